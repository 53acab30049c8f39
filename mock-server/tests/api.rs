use std::collections::HashMap;

use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, User, UserEnvelope};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn seeded() -> HashMap<u64, User> {
    HashMap::from([(
        1,
        User {
            name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            age: 36,
        },
    )])
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

#[tokio::test]
async fn get_user_returns_envelope() {
    let app = app_with(seeded());
    let resp = app.oneshot(get("/user/1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let envelope: UserEnvelope = body_json(resp).await;
    assert_eq!(envelope.user.name, "Ada");
    assert_eq!(envelope.user.surname, "Lovelace");
    assert_eq!(envelope.user.age, 36);
}

#[tokio::test]
async fn get_user_unknown_id_is_404() {
    let app = app_with(seeded());
    let resp = app.oneshot(get("/user/999")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_user_non_numeric_id_is_400() {
    let app = app_with(seeded());
    let resp = app.oneshot(get("/user/abc")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_server_has_no_users() {
    let app = app();
    let resp = app.oneshot(get("/user/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn envelope_body_has_exact_fields() {
    let app = app_with(seeded());
    let resp = app.oneshot(get("/user/1")).await.unwrap();

    let json: serde_json::Value = body_json(resp).await;
    let user = json["user"].as_object().unwrap();
    assert_eq!(user.len(), 3);
    assert!(user.contains_key("name"));
    assert!(user.contains_key("surname"));
    assert!(user.contains_key("age"));
}
