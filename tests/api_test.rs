//! HTTP routes driven through the router without binding a socket.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use phishing_detector::{
    api,
    config::ServerConfig,
    model::{Classifier, LogisticRegression, ModelBundle, SparseVector, TfidfVectorizer},
    service::InferenceService,
    ModelError,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tower::ServiceExt;

/// Always answers phishing.
struct AlwaysPhishing;

impl Classifier<[f64]> for AlwaysPhishing {
    fn predict(&self, _: &[f64]) -> Result<u8, ModelError> {
        Ok(1)
    }
}

/// Simulates an internal classifier fault.
struct Broken;

impl Classifier<SparseVector> for Broken {
    fn predict(&self, x: &SparseVector) -> Result<u8, ModelError> {
        Err(ModelError::FeatureMismatch {
            expected: 0,
            got: x.dim(),
        })
    }
}

fn vectorizer() -> TfidfVectorizer {
    let vocab: HashMap<String, usize> = [("otp".to_string(), 0)].into_iter().collect();
    TfidfVectorizer::new(vocab, vec![1.0]).unwrap()
}

fn app() -> axum::Router {
    let text = LogisticRegression::new(vec![1.0], -0.5, vec![0, 1]).unwrap();
    let bundle = ModelBundle::from_parts(AlwaysPhishing, text, vectorizer());
    api::router(
        InferenceService::new(Arc::new(bundle)),
        &ServerConfig::default(),
    )
}

fn broken_app() -> axum::Router {
    let bundle = ModelBundle::from_parts(AlwaysPhishing, Broken, vectorizer());
    api::router(
        InferenceService::new(Arc::new(bundle)),
        &ServerConfig::default(),
    )
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn check_url_returns_verdict() {
    let body = json!({"url": "  http://user@evil.com/login"}).to_string();
    let response = app().oneshot(post_json("/check_url", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let v = body_json(response).await;
    assert_eq!(v["url"], "  http://user@evil.com/login");
    assert_eq!(v["prediction"], "phishing");
    assert_eq!(
        v["explanation"],
        json!([
            "URL does not use HTTPS",
            "Contains suspicious keywords related to sensitive actions",
            "URL contains '@' symbol which is commonly used in phishing"
        ])
    );
}

#[tokio::test]
async fn check_text_returns_verdict() {
    let body = json!({"text": "hello there"}).to_string();
    let response = app().oneshot(post_json("/check_text", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let v = body_json(response).await;
    assert_eq!(v["text"], "hello there");
    assert_eq!(v["prediction"], "legitimate");
    assert_eq!(v["explanation"], json!(["Text pattern similar to legitimate messages"]));
}

#[tokio::test]
async fn empty_url_is_not_an_error() {
    let response = app()
        .oneshot(post_json("/check_url", r#"{"url": ""}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let v = body_json(response).await;
    assert_eq!(v["explanation"], json!(["URL does not use HTTPS"]));
}

#[tokio::test]
async fn missing_field_is_unprocessable() {
    let response = app()
        .oneshot(post_json("/check_url", r#"{"text": "x"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let response = app()
        .oneshot(post_json("/check_text", "{ nope"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn classifier_fault_is_internal_error() {
    let response = broken_app()
        .oneshot(post_json("/check_text", r#"{"text": "otp"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let v = body_json(response).await;
    assert!(v["detail"].as_str().unwrap().contains("classifier fault"));
}

#[tokio::test]
async fn health_reports_ok() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let v = body_json(response).await;
    assert_eq!(v["status"], "ok");
}
