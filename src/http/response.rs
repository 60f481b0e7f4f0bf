//! Response helpers for compiled stylesheets.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// Compiled stylesheet body, served as `text/css`.
#[derive(Debug, Clone)]
pub struct Css(pub String);

impl IntoResponse for Css {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
            self.0,
        )
            .into_response()
    }
}
