//! Edge extraction over the raw boundary traces.
//!
//! Collapses each maze path to one representative point per distinct height
//! level, derives a local slope per collapsed row, builds the per-row track
//! width profile, tracks rows lost to the zero border, and detects the four
//! track corners (lower corners from the slope sign flip during the collapse
//! pass, upper corners from a slope-band + width-shrink second pass).

pub mod corners;

use crate::geom::{slope_between, slope_is_vertical, variance};
use crate::types::{Corners, Point, Side};
use crate::tracer::RawTrace;
use log::debug;

pub use corners::{detect_upper_corner, SideThresholds};

/// Per-frame edge geometry shared by the classifier, fuser and fitter.
#[derive(Clone, Debug, Default)]
pub struct EdgeMap {
    /// One point per distinct height level, strictly decreasing y.
    pub left: Vec<Point>,
    pub right: Vec<Point>,
    /// `right[i].x - left[i].x` over the common valid range.
    pub width_block: Vec<i32>,
    /// `min(left rows, right rows)`.
    pub valid_row: usize,
    /// Rows whose edge sat exactly on the border column (tracer hugged the
    /// padding, not a real edge).
    pub lost_left: Vec<Point>,
    pub lost_right: Vec<Point>,
    pub corners: Corners,
    /// Population variance of each side's slope sequence (path smoothness).
    pub slope_sigma_left: f64,
    pub slope_sigma_right: f64,
}

/// Extraction knobs: frame geometry plus the upper-corner slope thresholds.
#[derive(Clone, Copy, Debug)]
pub struct EdgeOptions {
    pub width: i32,
    pub height: i32,
    pub border: i32,
    pub corner_left: SideThresholds,
    pub corner_right: SideThresholds,
}

impl EdgeOptions {
    pub fn new(width: i32, height: i32, border: i32) -> Self {
        Self {
            width,
            height,
            border,
            corner_left: SideThresholds::default_left(),
            corner_right: SideThresholds::default_right(),
        }
    }
}

/// Collapses one raw path: a point is kept whenever its y improves on the
/// lowest y seen so far, deduplicating horizontal wandering within a row.
fn collapse(path: &[Point], limit: usize) -> Vec<Point> {
    let mut highest = i32::MAX;
    let mut out = Vec::with_capacity(limit);
    for p in &path[..limit.min(path.len())] {
        if p.y < highest {
            highest = p.y;
            out.push(*p);
        }
    }
    out
}

/// Assigns per-row slopes (lookback at i-2 and i-4, averaged when both are
/// finite, vertical sentinel kept when both are vertical) and records the
/// side's lower corner at the first confirmed sign flip. Returns the slope
/// sequence for the variance report.
fn assign_slopes(edge: &mut [Point], side: Side, lower_corner: &mut Point) -> Vec<f64> {
    let mut slopes = Vec::with_capacity(edge.len());
    for i in 0..edge.len() {
        if i <= 8 {
            edge[i].slope = 0.0;
            continue;
        }
        let s1 = slope_between(edge[i], edge[i - 2]);
        let s2 = slope_between(edge[i], edge[i - 4]);
        let s = if !slope_is_vertical(s1) && !slope_is_vertical(s2) {
            (s1 + s2) / 2.0
        } else if !slope_is_vertical(s1) {
            s1
        } else {
            s2
        };
        edge[i].slope = s;
        slopes.push(s as f64);

        // Lower corner: the first row where the slope leaves the vertical
        // regime toward the side's "curving away" sign. The previous point
        // is recorded; first match wins.
        let curving_away = match side {
            Side::Left => s > 0.0,
            Side::Right => s < 0.0,
        };
        if curving_away && !slope_is_vertical(s) && !lower_corner.is_found() {
            *lower_corner = edge[i - 1];
        }
    }
    slopes
}

/// Runs the full extraction over a raw trace.
pub fn extract_edges(raw: &RawTrace, opts: &EdgeOptions) -> EdgeMap {
    let mut map = EdgeMap::default();
    let common = raw.left.len().min(raw.right.len());

    map.left = collapse(&raw.left, common);
    map.right = collapse(&raw.right, common);
    map.valid_row = map.left.len().min(map.right.len());

    let slopes_l = assign_slopes(&mut map.left, Side::Left, &mut map.corners.left_down);
    let slopes_r = assign_slopes(&mut map.right, Side::Right, &mut map.corners.right_down);

    for i in 0..map.valid_row {
        map.width_block.push(map.right[i].x - map.left[i].x);
        if map.left[i].x == opts.border {
            map.lost_left.push(map.left[i]);
        }
        if map.right[i].x == opts.width - opts.border - 1 {
            map.lost_right.push(map.right[i]);
        }
    }

    if let Some(c) = detect_upper_corner(
        &map.left,
        &map.width_block,
        opts.height,
        Side::Left,
        &opts.corner_left,
    ) {
        map.corners.left_up = c;
    }
    if let Some(c) = detect_upper_corner(
        &map.right,
        &map.width_block,
        opts.height,
        Side::Right,
        &opts.corner_right,
    ) {
        map.corners.right_up = c;
    }

    map.slope_sigma_left = variance(&slopes_l);
    map.slope_sigma_right = variance(&slopes_r);
    debug!(
        "edges: valid_row={} lost=({}, {}) sigma=({:.2}, {:.2})",
        map.valid_row,
        map.lost_left.len(),
        map.lost_right.len(),
        map.slope_sigma_left,
        map.slope_sigma_right
    );
    map
}
