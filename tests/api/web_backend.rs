use crate::helpers::spawn_app;
use lambda_web_backend::domain::WEB_BACKEND_BODY;

#[actix_rt::test]
async fn lambda_path_serves_the_static_page() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(&format!("{}/lambda?query=1234ABCD", &app.address))
        .header("Accept", "text/html")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok()),
        Some("text/html")
    );
    assert_eq!(response.text().await.unwrap(), WEB_BACKEND_BODY);
}

#[actix_rt::test]
async fn nested_paths_and_any_method_are_served() {
    let app = spawn_app().await;
    let test_cases = vec![
        (reqwest::Method::GET, "/lambda/index.html"),
        (reqwest::Method::POST, "/lambda/orders/42"),
        (reqwest::Method::PUT, "/lambda/a/b/c"),
        (reqwest::Method::DELETE, "/lambda/resource"),
    ];

    for (method, path) in test_cases {
        let response = app
            .api_client
            .request(method.clone(), &format!("{}{}", &app.address, path))
            .body(vec![0u8, 159, 146, 150])
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(
            200,
            response.status().as_u16(),
            "{} {} was not answered with 200 OK",
            method,
            path
        );
        assert_eq!(response.text().await.unwrap(), WEB_BACKEND_BODY);
    }
}

#[actix_rt::test]
async fn paths_outside_the_target_are_not_served() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(&format!("{}/lambdas", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
}
