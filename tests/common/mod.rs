//! Shared utilities for middleware integration tests.

use std::fs;
use std::path::Path;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tempfile::TempDir;
use tower::util::ServiceExt;

use axum_sass::{SassConfig, SassMiddleware, Syntax};

/// Create a temporary source tree from `(relative path, contents)` pairs.
pub fn source_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (relative, contents) in files {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }
    dir
}

/// Build a middleware over `dir` (SCSS mode, cache reads on) and a router
/// with a distinguishable fallback, applying `configure` on top.
#[allow(dead_code)]
pub fn middleware_over(
    dir: &Path,
    configure: impl FnOnce(&mut SassConfig),
) -> (SassMiddleware, Router) {
    let mut config = SassConfig {
        source: Some(dir.to_path_buf()),
        mode: Syntax::Scss,
        cache: Some(true),
        ..Default::default()
    };
    configure(&mut config);

    let middleware = SassMiddleware::new(config);
    let router = middleware.attach(
        Router::new().fallback(|| async { (StatusCode::NOT_FOUND, "fell through") }),
    );
    (middleware, router)
}

/// One-shot GET against the router; returns status, content-type, body.
#[allow(dead_code)]
pub async fn get(router: &Router, path: &str) -> (StatusCode, Option<String>, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}
