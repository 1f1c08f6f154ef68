use crate::domain::{InvocationEvent, ResponseRecord};

/// Entry point of the function registered behind the load balancer target group.
///
/// The payload is only logged; every invocation receives the same static page.
#[tracing::instrument(name = "Handling load balancer invocation", skip(event))]
pub async fn handle(event: InvocationEvent) -> ResponseRecord {
    tracing::info!("Function invoked by the load balancer");
    tracing::info!(payload = %event, "Received invocation payload");

    ResponseRecord::web_backend()
}
