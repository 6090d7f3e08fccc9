mod common;

use common::TestApp;
use reqwest::Client;
use serde_json::json;

#[tokio::test]
#[ignore = "requires MongoDB at localhost:27017"]
async fn posted_property_round_trips_by_id() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/postproperty", app.address))
        .json(&json!({
            "title": "Lakeside villa",
            "price": 420000,
            "bedrooms": 4,
            "amenities": ["garden", "garage"]
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let ack: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(ack["acknowledged"], true);
    let id = ack["insertedId"].as_str().expect("insertedId missing");

    let response = client
        .get(&format!("{}/properties/{}", app.address, id))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["_id"], id);
    assert_eq!(body["title"], "Lakeside villa");
    assert_eq!(body["price"], 420000);
    assert_eq!(body["amenities"], json!(["garden", "garage"]));

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires MongoDB at localhost:27017"]
async fn listing_returns_every_property() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    for n in 0..3 {
        let response = client
            .post(&format!("{}/postproperty", app.address))
            .json(&json!({ "title": format!("Listing {}", n) }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success());
    }

    let response = client
        .get(&format!("{}/properties", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body.as_array().expect("Expected an array").len(), 3);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires MongoDB at localhost:27017"]
async fn malformed_property_id_takes_the_500_path() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/properties/not-an-object-id", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!("Failed to get property details"));

    app.cleanup().await;
}
