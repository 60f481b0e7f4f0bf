//! Observability subsystem.
//!
//! The middleware emits `tracing` events at its decision points and
//! records counters, gauges and histograms through the `metrics` facade.
//! Exposition (Prometheus scrape or otherwise) is the host application's
//! concern; a host that installs no recorder pays only for no-op calls.

pub mod metrics;
