use super::TrackParams;
use crate::center::{fit_centerline, CenterFit};
use crate::diagnostics::{MetricsSink, NullMetrics, TimingBreakdown};
use crate::edges::extract_edges;
use crate::fuse::fuse_middle;
use crate::image::BinaryView;
use crate::scene::{SceneClassifier, SupplementLines};
use crate::tracer::{trace_boundaries, StopReason};
use crate::types::FrameAnalysis;
use log::warn;
use serde::Serialize;
use std::time::Instant;

/// Everything one frame produced, for the planner and for telemetry.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub analysis: FrameAnalysis,
    pub stop: StopReason,
    /// Fitted centerline, kept for the motion planner's speed governor.
    pub fit: CenterFit,
    pub timing: TimingBreakdown,
}

/// Stateful per-frame driver: trace, extract, classify, fuse, fit.
///
/// The only cross-frame state is the scene debouncing inside the classifier;
/// everything else is recomputed per frame.
#[derive(Debug, Default)]
pub struct TrackDetector {
    params: TrackParams,
    classifier: SceneClassifier,
}

impl TrackDetector {
    pub fn new(params: TrackParams) -> Self {
        Self {
            params,
            classifier: SceneClassifier::new(),
        }
    }

    pub fn params(&self) -> &TrackParams {
        &self.params
    }

    /// Boundary patches synthesized for the most recently processed frame.
    pub fn supplement(&self) -> &SupplementLines {
        self.classifier.supplement()
    }

    /// Runs the pipeline without metrics.
    pub fn process(&mut self, frame: &BinaryView<'_>) -> Option<FrameReport> {
        self.process_with(frame, &mut NullMetrics)
    }

    /// Runs the pipeline, reporting spans and counters to `sink`. `None`
    /// means the frame had no usable start point and was skipped; the
    /// previous frame's scene state is untouched in that case.
    pub fn process_with(
        &mut self,
        frame: &BinaryView<'_>,
        sink: &mut dyn MetricsSink,
    ) -> Option<FrameReport> {
        sink.frame_start();
        let frame_t0 = Instant::now();

        let t0 = Instant::now();
        let Some(raw) = trace_boundaries(frame, &self.params.tracer_options()) else {
            warn!("frame skipped: no start point");
            return None;
        };
        let trace_elapsed = t0.elapsed();
        sink.record_span("trace", trace_elapsed);

        let t0 = Instant::now();
        let edges = extract_edges(&raw, &self.params.edge_options());
        let edges_elapsed = t0.elapsed();
        sink.record_span("edges", edges_elapsed);
        sink.record_counter("validRow", edges.valid_row as i64);

        let t0 = Instant::now();
        let scene = self
            .classifier
            .classify(frame, &edges, &self.params.scene_options());
        let scene_confirmed = self.classifier.confirm(scene);
        let scene_elapsed = t0.elapsed();
        sink.record_span("scene", scene_elapsed);

        let t0 = Instant::now();
        let fused = fuse_middle(
            &edges,
            self.classifier.supplement(),
            self.params.width,
            self.params.height,
            self.params.row_cut_up,
            self.params.row_cut_down,
        );
        let fuse_elapsed = t0.elapsed();
        sink.record_span("fuse", fuse_elapsed);

        let t0 = Instant::now();
        let fit = fit_centerline(&fused, self.params.width, self.params.height);
        let fit_elapsed = t0.elapsed();
        sink.record_span("fit", fit_elapsed);

        let analysis = FrameAnalysis {
            scene,
            scene_confirmed,
            middle_error: fused.middle_error,
            control_center: fit.control_center,
            sigma_center: fit.sigma_center,
            valid_row: edges.valid_row,
            lost_left: edges.lost_left.len(),
            lost_right: edges.lost_right.len(),
        };
        let timing = TimingBreakdown {
            trace_ms: trace_elapsed.as_secs_f64() * 1e3,
            edges_ms: edges_elapsed.as_secs_f64() * 1e3,
            scene_ms: scene_elapsed.as_secs_f64() * 1e3,
            fuse_ms: fuse_elapsed.as_secs_f64() * 1e3,
            fit_ms: fit_elapsed.as_secs_f64() * 1e3,
            total_ms: frame_t0.elapsed().as_secs_f64() * 1e3,
        };
        Some(FrameReport {
            analysis,
            stop: raw.stop,
            fit,
            timing,
        })
    }

    /// Re-arms the scene debouncing for a new run segment.
    pub fn reset(&mut self) {
        self.classifier.reset();
    }
}
