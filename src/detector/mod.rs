//! Per-frame pipeline driver.
//!
//! Overview: [`TrackDetector`] owns the tuning ([`TrackParams`]) and the
//! cross-frame scene state, and runs one binary frame through
//! trace → edges → scene → fuse → fit, emitting a serialisable
//! [`FrameReport`] with stage timings.
//!
//! Modules:
//! - [`params`]: the typed parameter block and its per-stage option views;
//! - [`pipeline`]: the driver itself.

pub mod params;
pub mod pipeline;

pub use params::TrackParams;
pub use pipeline::{FrameReport, TrackDetector};
