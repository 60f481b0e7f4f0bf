//! Request-side cache helpers.
//!
//! The interception layer stores a [`ResultCache`] handle in every
//! request's extensions. Downstream handlers can use it to invalidate the
//! cached stylesheet for the path they are handling, e.g. from an upload
//! or deploy endpoint that just replaced a source file.

use axum::http::Request;

use crate::cache::ResultCache;

/// Extension trait exposing the per-request cache flush helper.
pub trait FlushCssExt {
    /// Drop the cached stylesheet for this request's path, if any.
    ///
    /// A no-op for requests that did not pass through the middleware.
    fn flush_css(&self);
}

impl<B> FlushCssExt for Request<B> {
    fn flush_css(&self) {
        if let Some(cache) = self.extensions().get::<ResultCache>() {
            cache.flush(Some(self.uri().path()));
        }
    }
}
