#![allow(dead_code)]

use std::collections::HashMap;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use dvga::bootstrap::app_context::AppContext;
use dvga::bootstrap::config::Config;
use dvga::bootstrap::setup::{self, SeedDemoData};
use dvga::presentation::router::build_router;
use serde_json::Value;
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot`

pub fn config(overrides: &[(&str, &str)]) -> Config {
    let mut map: HashMap<String, String> = HashMap::new();
    map.insert("DATABASE_URL".into(), "sqlite::memory:".into());
    map.insert("WEB_PORT".into(), "0".into());
    for (k, v) in overrides {
        map.insert(k.to_string(), v.to_string());
    }
    Config::from_lookup(|k| map.get(k).cloned()).expect("valid test config")
}

pub struct TestApp {
    pub ctx: AppContext,
    pub app: Router,
    pub dir: TempDir,
}

impl TestApp {
    pub fn upload_dir(&self) -> std::path::PathBuf {
        self.dir.path().join("uploads")
    }
}

pub async fn test_app() -> TestApp {
    let dir = tempfile::tempdir().expect("tempdir");
    let uploads = dir.path().join("uploads");
    let statics = dir.path().join("static");
    std::fs::create_dir_all(&statics).unwrap();
    std::fs::write(statics.join("hello.txt"), "hello from static").unwrap();

    let cfg = config(&[
        ("WEB_UPLOADDIR", uploads.to_str().unwrap()),
        ("STATIC_DIR", statics.to_str().unwrap()),
    ]);
    let ctx = AppContext::connect(cfg).await.expect("connect");
    setup::prepare(&ctx, &SeedDemoData).await.expect("setup");
    let app = build_router(ctx.clone());
    TestApp { ctx, app, dir }
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    (status, headers, body)
}

/// POSTs `body` to /graphql and parses the JSON reply.
pub async fn gql(app: &Router, body: Value, headers: &[(&str, &str)]) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json");
    for (k, v) in headers {
        builder = builder.header(*k, *v);
    }
    let req = builder.body(Body::from(body.to_string())).unwrap();
    let (status, _, bytes) = send(app, req).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub async fn query(app: &Router, q: &str) -> Value {
    let (status, value) = gql(app, serde_json::json!({ "query": q }), &[]).await;
    assert_eq!(status, StatusCode::OK, "unexpected status for {q}: {value}");
    value
}
