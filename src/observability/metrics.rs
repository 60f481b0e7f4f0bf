//! Metrics collection for the stylesheet pipeline.
//!
//! # Metrics
//! - `sass_cache_hits_total` (counter): requests served from cache
//! - `sass_cache_misses_total` (counter): requests that went to the compiler
//! - `sass_cache_entries` (gauge): current cache size
//! - `sass_cache_flushes_total` (counter): flushes by scope (path/all)
//! - `sass_compiles_total` (counter): compiles by output style
//! - `sass_compile_duration_seconds` (histogram): compile latency

use std::time::Instant;

use metrics::{counter, gauge, histogram};

/// Record a request served from the cache.
pub fn record_cache_hit() {
    counter!("sass_cache_hits_total").increment(1);
}

/// Record a request that missed the cache and will compile.
pub fn record_cache_miss() {
    counter!("sass_cache_misses_total").increment(1);
}

/// Record the current number of cached entries.
pub fn record_cache_size(size: usize) {
    gauge!("sass_cache_entries").set(size as f64);
}

/// Record a cache flush. `scope` is `"path"` or `"all"`.
pub fn record_flush(scope: &'static str) {
    counter!("sass_cache_flushes_total", "scope" => scope).increment(1);
}

/// Record a completed compilation and its duration.
pub fn record_compile(style: &'static str, started: Instant) {
    counter!("sass_compiles_total", "style" => style).increment(1);
    histogram!("sass_compile_duration_seconds").record(started.elapsed().as_secs_f64());
}
