use crate::helpers::spawn_app;
use lambda_web_backend::domain::{ResponseRecord, WEB_BACKEND_BODY};
use serde_json::json;

#[actix_rt::test]
async fn empty_event_returns_the_static_page() {
    let app = spawn_app().await;

    let response = app.invoke_json(&json!({})).await;

    assert_eq!(200, response.status().as_u16());
    let record: ResponseRecord = response.json().await.expect("Response is not a record");
    assert_eq!(record, ResponseRecord::web_backend());
}

#[actix_rt::test]
async fn invocation_returns_the_load_balancer_response_object() {
    let app = spawn_app().await;

    let response = app.invoke_json(&json!({})).await;

    let body: serde_json::Value = response.json().await.expect("Response is not JSON");
    assert_eq!(body["statusCode"], 200);
    assert_eq!(body["statusDescription"], "200 OK");
    assert_eq!(body["isBase64Encoded"], false);
    assert_eq!(body["headers"], json!({ "Content-Type": "text/html" }));
    assert_eq!(body["body"], WEB_BACKEND_BODY);
}

#[actix_rt::test]
async fn populated_load_balancer_event_returns_the_same_response() {
    let app = spawn_app().await;
    let event = json!({
        "requestContext": {
            "elb": {
                "targetGroupArn": "arn:aws:elasticloadbalancing:us-east-1:123456789012:targetgroup/tg/abc"
            }
        },
        "httpMethod": "GET",
        "path": "/lambda",
        "queryStringParameters": { "query": "1234ABCD" },
        "headers": {
            "accept": "text/html",
            "host": "lb.example.com",
            "user-agent": "ELB-HealthChecker/2.0"
        },
        "body": "",
        "isBase64Encoded": false
    });

    let response = app.invoke_json(&event).await;

    assert_eq!(200, response.status().as_u16());
    let record: ResponseRecord = response.json().await.expect("Response is not a record");
    assert_eq!(record, ResponseRecord::web_backend());
}

#[actix_rt::test]
async fn events_of_any_shape_are_accepted() {
    let app = spawn_app().await;
    let test_cases = vec![
        (json!(null), "null"),
        (json!([1, 2, 3]), "an array"),
        (json!("ping"), "a string"),
        (json!({ "httpMethod": 42, "headers": "nope" }), "a mistyped envelope"),
    ];

    for (event, description) in test_cases {
        let response = app.invoke_json(&event).await;

        assert_eq!(
            200,
            response.status().as_u16(),
            "The function did not answer 200 OK when the event was {}",
            description
        );
    }
}

#[actix_rt::test]
async fn concurrent_invocations_return_identical_responses() {
    let app = spawn_app().await;

    let first_event = json!({ "path": "/lambda" });
    let second_event = json!({ "path": "/lambda/other" });

    let (first, second) = tokio::join!(
        app.invoke_json(&first_event),
        app.invoke_json(&second_event)
    );

    let first: ResponseRecord = first.json().await.expect("Response is not a record");
    let second: ResponseRecord = second.json().await.expect("Response is not a record");
    assert_eq!(first, second);
    assert_eq!(first, ResponseRecord::web_backend());
}

#[actix_rt::test]
async fn non_json_payload_is_rejected_with_400() {
    let app = spawn_app().await;

    let response = app.invoke("<h1>not json</h1>").await;

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Error is not JSON");
    assert_eq!(body["errorType"], "InvalidRequestContent");
}
