use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};

use crate::configuration::{FunctionSettings, Settings};
use crate::routes;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(configuration: &Settings) -> Result<Self, std::io::Error> {
        let tcp_listener = TcpListener::bind(configuration.application.address())?;
        let port = tcp_listener.local_addr()?.port();
        let server = run(tcp_listener, configuration.function.clone())?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    tcp_listener: TcpListener,
    function: FunctionSettings,
) -> Result<Server, std::io::Error> {
    let function = web::Data::new(function);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(routes::health_check))
            .route(routes::INVOCATIONS_PATH, web::post().to(routes::invoke))
            .route("/lambda", web::route().to(routes::web_backend))
            .route("/lambda/{tail:.*}", web::route().to(routes::web_backend))
            .app_data(function.clone())
    })
    .listen(tcp_listener)?
    .run();

    Ok(server)
}
