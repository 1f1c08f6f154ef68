use anyhow::Context;
use lambda_web_backend::configuration::get_configuration;
use lambda_web_backend::startup::Application;
use lambda_web_backend::telemetry::{get_tracing_subscriber, init_tracing_subscriber};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration")?;

    let tracing_subscriber = get_tracing_subscriber(&configuration.tracing, std::io::stdout)
        .context("Failed to initialize the Jaeger exporter")?;
    init_tracing_subscriber(tracing_subscriber)?;

    let application = Application::build(&configuration).with_context(|| {
        format!(
            "Failed to bind the address {}",
            configuration.application.address()
        )
    })?;
    tracing::info!(
        port = application.port(),
        target_group_arn = %configuration.function.target_group_arn,
        "Function host is listening"
    );
    application.run_until_stopped().await?;

    opentelemetry::global::shutdown_tracer_provider();
    Ok(())
}
