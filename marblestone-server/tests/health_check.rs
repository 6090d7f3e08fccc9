mod common;

use common::TestApp;
use reqwest::Client;

#[tokio::test]
async fn liveness_route_answers_plain_text() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body = response.text().await.expect("Failed to read body");
    assert_eq!(body, "MARBLESTONE SERVER IS RUNNING...");
}

#[tokio::test]
#[ignore = "requires MongoDB at localhost:27017"]
async fn health_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "marblestone-server");

    app.cleanup().await;
}
