//! Stylesheet interception middleware.
//!
//! The layer produced by [`SassMiddleware::attach`] does two things for
//! every request passing through the router: it stores a handle to the
//! result cache in the request extensions (so downstream handlers can
//! flush by path, see [`crate::http::FlushCssExt`]), and it intercepts
//! `GET /css/*.css` requests, serving them from cache or by compiling the
//! resolved source file. Requests it cannot serve (no match, hidden
//! partial, missing source) run the inner service unchanged.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};

use crate::cache::ResultCache;
use crate::compiler::{engine, CompileError, Diagnostics, Resolver};
use crate::config::{SassConfig, Syntax};
use crate::http::response::Css;
use crate::observability::metrics;

/// Sass/SCSS compilation middleware for an axum router.
///
/// Owns the compiled-output cache; its lifetime is the middleware's
/// lifetime. Cheap to clone.
#[derive(Clone)]
pub struct SassMiddleware {
    state: Arc<MiddlewareState>,
}

/// Shared request-handling state, resolved once from [`SassConfig`].
struct MiddlewareState {
    resolver: Resolver,
    source_root: PathBuf,
    mode: Syntax,
    prelude: String,
    cache_reads: bool,
    diagnostics: Diagnostics,
    cache: ResultCache,
}

impl SassMiddleware {
    /// Resolve configuration defaults and construct the middleware.
    pub fn new(config: SassConfig) -> Self {
        let source_root = config.source_root();
        let cache_reads = config.cache_reads();
        let prelude = engine::variable_prelude(&config.variables, config.mode);
        let resolver = Resolver::new(
            source_root.clone(),
            config.mode,
            config.force_minified,
            config.expose_partials,
        );

        tracing::debug!(
            source_root = %source_root.display(),
            mode = ?config.mode,
            cache_reads,
            "Stylesheet middleware configured"
        );

        Self {
            state: Arc::new(MiddlewareState {
                resolver,
                source_root,
                mode: config.mode,
                prelude,
                cache_reads,
                diagnostics: config.diagnostics,
                cache: ResultCache::new(),
            }),
        }
    }

    /// Register the middleware on a router.
    ///
    /// Everything already on the router (routes and fallback) becomes the
    /// inner service that non-stylesheet requests fall through to.
    pub fn attach(&self, router: Router) -> Router {
        router.layer(middleware::from_fn_with_state(
            self.state.clone(),
            intercept,
        ))
    }

    /// Flush one cached path, or the whole cache when `path` is `None`.
    pub fn flush(&self, path: Option<&str>) -> &Self {
        self.state.cache.flush(path);
        self
    }

    /// Handle to the compiled-output cache.
    pub fn cache(&self) -> &ResultCache {
        &self.state.cache
    }
}

/// The interception layer. See the module docs for the decision order.
async fn intercept(
    State(state): State<Arc<MiddlewareState>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    request.extensions_mut().insert(state.cache.clone());

    let path = request.uri().path();
    if request.method() != Method::GET || !path.starts_with("/css/") || !path.ends_with(".css") {
        return next.run(request).await;
    }
    let path = path.to_owned();

    if state.cache_reads {
        if let Some(css) = state.cache.get(&path) {
            metrics::record_cache_hit();
            tracing::debug!(path = %path, "Serving cached stylesheet");
            return Css(css).into_response();
        }
    }

    let Some(resolution) = state.resolver.resolve(&path) else {
        return next.run(request).await;
    };

    if !resolution.source_path.exists() {
        tracing::debug!(
            path = %path,
            source = %resolution.source_path.display(),
            "No stylesheet source; passing through"
        );
        return next.run(request).await;
    }

    metrics::record_cache_miss();

    let source = match fs::read_to_string(&resolution.source_path) {
        Ok(source) => source,
        Err(err) => {
            let err = CompileError::Read {
                path: resolution.source_path.clone(),
                source: err,
            };
            state.diagnostics.error(&err.to_string());
            tracing::error!(path = %path, error = %err, "Stylesheet read failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response();
        }
    };

    let started = Instant::now();
    let input = format!("{}{}", state.prelude, source);
    match engine::compile(
        input,
        &state.source_root,
        state.mode,
        resolution.style,
        &state.diagnostics,
    ) {
        Ok(css) => {
            metrics::record_compile(resolution.style.as_str(), started);
            tracing::debug!(
                path = %path,
                style = resolution.style.as_str(),
                elapsed = ?started.elapsed(),
                "Compiled stylesheet"
            );
            state.cache.insert(path, css.clone());
            Css(css).into_response()
        }
        Err(err) => {
            tracing::error!(path = %path, error = %err, "Stylesheet compilation failed");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}
