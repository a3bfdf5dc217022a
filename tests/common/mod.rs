//! Shared helpers for HTTP-level tests: an in-memory app per test and thin
//! request wrappers around `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header::{CONTENT_LENGTH, CONTENT_TYPE}, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use movie_rental::{app, apply_migrations, store, AppState, Variant};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_BODY_LIMIT: usize = 16 * 1024;

/// Router backed by a fresh in-memory database migrated for `variant`.
pub async fn build_test_app(variant: Variant) -> Router {
    let pool = store::connect("sqlite::memory:", 1).await.unwrap();
    apply_migrations(&pool, variant).await.unwrap();
    app(AppState::new(pool, variant), TEST_BODY_LIMIT)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => {
            let payload = json.to_string();
            builder
                .header(CONTENT_TYPE, "application/json")
                .header(CONTENT_LENGTH, payload.len().to_string())
                .body(Body::from(payload))
                .unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// POST and return the created record, asserting success.
pub async fn create(app: &Router, collection: &str, body: Value) -> Value {
    let response = post_json(app, collection, body).await;
    assert_eq!(response.status(), 200, "create on {} failed", collection);
    body_json(response).await
}
