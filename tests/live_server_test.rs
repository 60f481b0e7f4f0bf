//! End-to-end test over a real listener.

use std::time::Duration;

use axum::http::StatusCode;
use axum::Router;

use axum_sass::{SassConfig, SassMiddleware, Syntax};

mod common;

#[tokio::test]
async fn test_served_over_http() {
    let dir = common::source_tree(&[("site.scss", "body { color: $accent; }\n")]);
    let mut config = SassConfig {
        source: Some(dir.path().to_path_buf()),
        mode: Syntax::Scss,
        cache: Some(true),
        ..Default::default()
    };
    config.variables.insert("accent".into(), "#ff5722".into());

    let middleware = SassMiddleware::new(config);
    let app = middleware.attach(
        Router::new().fallback(|| async { (StatusCode::NOT_FOUND, "fell through") }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    let url = format!("http://{}/css/site.css", addr);
    let response = reqwest::get(&url).await.expect("middleware unreachable");
    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("text/css; charset=utf-8")
    );
    let body = response.text().await.unwrap();
    assert!(body.contains("color: #ff5722;"), "unexpected body: {body}");

    // Second fetch is served from cache, byte-identical.
    let cached = reqwest::get(&url).await.unwrap().text().await.unwrap();
    assert_eq!(cached, body);
}
