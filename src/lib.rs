//! Perception and control core for an autonomous line-following vehicle.
//!
//! The input is a binarized camera frame (white track on black, with a
//! zero-padded border painted by the capture stage). One frame flows through
//! five stages:
//!
//! 1. **trace** ([`tracer`]): a bottom-window median scan finds the start
//!    pair, then two maze-following cursors walk the left and right
//!    track/background boundaries;
//! 2. **edges** ([`edges`]): the raw paths are collapsed to one point per
//!    height level, given local slopes, a width profile and the four track
//!    corners;
//! 3. **scene** ([`scene`]): zebra, crossroad and obstacle detectors
//!    classify the frame and synthesize supplement lines that patch the
//!    boundary where an element interrupts it;
//! 4. **fuse** ([`fuse`]): the supplements are spliced into the boundaries
//!    and the middle line with its weighted steering error is derived;
//! 5. **fit** ([`center`]): a cubic Bézier centerline, the weighted control
//!    center and a path-spread sigma summarise the frame for the
//!    [`motion`] planner.
//!
//! [`detector::TrackDetector`] drives the stages per frame; [`config`] loads
//! the on-vehicle parameter file; [`diagnostics`] carries timings and the
//! injectable metrics seam.

pub mod center;
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod edges;
pub mod fuse;
pub mod geom;
pub mod image;
pub mod motion;
pub mod scene;
pub mod tracer;
pub mod types;

pub use center::{fit_centerline, CenterFit};
pub use config::{load_config, ConfigError, TrackConfig};
pub use detector::{FrameReport, TrackDetector, TrackParams};
pub use diagnostics::{MetricsSink, NullMetrics, TimingBreakdown};
pub use edges::{extract_edges, EdgeMap};
pub use fuse::{fuse_middle, FusedLines};
pub use image::{BinaryImage, BinaryView};
pub use motion::{MotionCommand, MotionParams, MotionPlanner};
pub use scene::{SceneClassifier, SupplementLines};
pub use tracer::{trace_boundaries, RawTrace, StopReason};
pub use types::{FrameAnalysis, Point, Scene};

/// Convenience glob import for embedders.
pub mod prelude {
    pub use crate::center::CenterFit;
    pub use crate::detector::{FrameReport, TrackDetector, TrackParams};
    pub use crate::diagnostics::{MetricsSink, NullMetrics};
    pub use crate::image::{BinaryImage, BinaryView};
    pub use crate::motion::{MotionCommand, MotionParams, MotionPlanner};
    pub use crate::types::{FrameAnalysis, Point, Scene};
}
