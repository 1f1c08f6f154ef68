use actix_web::{HttpResponse, Responder};

/// Liveness probe for the process hosting the function.
#[tracing::instrument(name = "Health check probe")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().finish()
}
