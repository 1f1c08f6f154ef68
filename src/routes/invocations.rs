use crate::domain::InvocationEvent;
use crate::handler::handle;
use crate::routes::ApiError;
use actix_web::{web, HttpResponse};

/// Path of the function-invocation API, as exposed by the runtime interface emulator.
pub const INVOCATIONS_PATH: &str = "/2015-03-31/functions/function/invocations";

#[tracing::instrument(
    name = "Invoking the function",
    skip(body),
    fields(payload_size = body.len())
)]
pub async fn invoke(body: web::Bytes) -> Result<HttpResponse, ApiError> {
    let event = parse_event(&body)?;
    let response = handle(event).await;

    Ok(HttpResponse::Ok().json(response))
}

fn parse_event(body: &[u8]) -> Result<InvocationEvent, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(InvocationEvent::default());
    }

    serde_json::from_slice(body).map(InvocationEvent::new).map_err(|e| {
        tracing::warn!(error = %e, "Rejecting a payload that is not JSON");
        ApiError::InvalidRequestContent(format!("Could not parse request body into json: {}", e))
    })
}
