use crate::configuration::FunctionSettings;
use crate::domain::{AlbRequestEvent, InvocationEvent, ResponseRecord};
use crate::handler::handle;
use crate::routes::ApiError;
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use anyhow::Context;
use std::convert::TryFrom;

/// Serves `/lambda` and everything below it the way a load balancer target group
/// with a function backend would.
#[tracing::instrument(
    name = "Serving a load balancer request",
    skip(request, body, function),
    fields(
        http_method = %request.method(),
        path = %request.path()
    )
)]
pub async fn web_backend(
    request: HttpRequest,
    body: web::Bytes,
    function: web::Data<FunctionSettings>,
) -> Result<HttpResponse, ApiError> {
    let alb_event = to_alb_event(&request, &body, &function.target_group_arn);
    tracing::debug!(
        headers = alb_event.headers().len(),
        body_size = alb_event.body().len(),
        base64_body = alb_event.is_base64_encoded(),
        "Forwarding request as {} {}",
        alb_event.http_method(),
        alb_event.path()
    );
    let event = InvocationEvent::try_from(alb_event)
        .context("Failed to build the invocation event from the HTTP request")?;

    let record = handle(event).await;
    render(&record)
}

fn to_alb_event(request: &HttpRequest, body: &[u8], target_group_arn: &str) -> AlbRequestEvent {
    let headers = request.headers().iter().map(|(name, value)| {
        (
            name.as_str().to_string(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        )
    });

    AlbRequestEvent::new(
        target_group_arn,
        request.method().as_str(),
        request.path(),
        query_string_parameters(request.query_string()),
        headers,
        body,
    )
}

/// Splits a raw query string into pairs. Values stay percent-encoded, as the load
/// balancer forwards them.
fn query_string_parameters(query: &str) -> impl Iterator<Item = (String, String)> + '_ {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (pair.to_string(), String::new()),
        })
}

fn render(record: &ResponseRecord) -> Result<HttpResponse, ApiError> {
    let status = StatusCode::from_u16(record.status_code())
        .with_context(|| format!("Invalid status code {}", record.status_code()))?;

    let mut response = HttpResponse::build(status);
    for (name, value) in record.headers() {
        let name = HeaderName::try_from(name.as_str())
            .with_context(|| format!("Invalid response header name {:?}", name))?;
        let value = HeaderValue::try_from(value.as_str())
            .with_context(|| format!("Invalid value for response header {}", name))?;
        response.insert_header((name, value));
    }

    let body = record
        .decoded_body()
        .context("Failed to decode the base64 response body")?;

    Ok(response.body(body))
}
