//! Maze-following boundary tracer.
//!
//! Two cursors walk the white/black boundary of the track simultaneously,
//! the left one hugging the left edge and the right one mirrored. Each
//! cursor keeps a facing direction and inspects the pixel in front of it and
//! the front-diagonal toward the track interior, turning, stepping forward
//! or cutting the diagonal accordingly.
//!
//! Tracing starts from a median start-point scan over the bottom rows
//! ([`find_start_point`]) and ends on one of four conditions: a cursor about
//! to leave the padded interior, too many consecutive turns without a move,
//! both cursors converging on one cell (track pinched closed), or the hard
//! step cap. Every termination is normal; downstream consumes whatever
//! prefix was produced.

pub mod start;
pub mod walk;

use crate::types::Point;
use serde::Serialize;

pub use start::find_start_point;
pub use walk::{trace_boundaries, STEP_MAX};

/// Why the walk ended. Diagnostics only; none of these is an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// A cursor's next position would leave the padded interior.
    OutOfBounds,
    /// More than three consecutive turns without a move (stuck / dead end).
    TurnLimit,
    /// Both cursors reached the identical cell (e.g. a stop line).
    Converged,
    /// Runaway safety valve.
    StepCap,
}

/// Raw left/right boundary paths for one frame, one point per traced step in
/// traversal order.
#[derive(Clone, Debug)]
pub struct RawTrace {
    pub left: Vec<Point>,
    pub right: Vec<Point>,
    pub stop: StopReason,
}

/// Knobs for the start scan and the walk.
#[derive(Clone, Copy, Debug)]
pub struct TracerOptions {
    /// Rows above the bottom edge where the start scan begins.
    pub start_line: i32,
    /// Number of rows sampled by the start scan.
    pub scan_height: i32,
}

impl Default for TracerOptions {
    fn default() -> Self {
        Self {
            start_line: 3,
            scan_height: 10,
        }
    }
}
