//! Per-frame timing breakdown and the metrics sink seam.
//!
//! The pipeline never logs measurements directly; it reports spans and
//! counters to a [`MetricsSink`] owned by the caller, so embedders can route
//! telemetry wherever they like (or nowhere, via [`NullMetrics`]).

use log::debug;
use serde::Serialize;
use std::time::Duration;

/// Wall-clock milliseconds per pipeline stage.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub trace_ms: f64,
    pub edges_ms: f64,
    pub scene_ms: f64,
    pub fuse_ms: f64,
    pub fit_ms: f64,
    pub total_ms: f64,
}

/// Receiver for the pipeline's measurements. All methods default to no-ops
/// so sinks implement only what they consume.
pub trait MetricsSink {
    fn frame_start(&mut self) {}
    fn record_span(&mut self, _name: &'static str, _elapsed: Duration) {}
    fn record_counter(&mut self, _name: &'static str, _value: i64) {}
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullMetrics;

impl MetricsSink for NullMetrics {}

/// Forwards spans and counters to the `log` facade at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogMetrics;

impl MetricsSink for LogMetrics {
    fn record_span(&mut self, name: &'static str, elapsed: Duration) {
        debug!("span {name}: {:.3}ms", elapsed.as_secs_f64() * 1e3);
    }

    fn record_counter(&mut self, name: &'static str, value: i64) {
        debug!("counter {name}: {value}");
    }
}
