use crate::geom::slope_is_vertical;
use crate::types::{Point, Side};

/// Slope thresholds gating the upper-corner test for one side. The slope1
/// pair bounds the band the current row's slope must fall in; slope2 is the
/// threshold the two-rows-earlier slope must clear. Values are domain-tuned
/// configuration, not derived.
#[derive(Clone, Copy, Debug)]
pub struct SideThresholds {
    pub slope1_min: f32,
    pub slope1_max: f32,
    pub slope2: f32,
}

impl SideThresholds {
    pub fn default_left() -> Self {
        Self {
            slope1_min: -0.5,
            slope1_max: -10.0,
            slope2: 0.5,
        }
    }

    pub fn default_right() -> Self {
        Self {
            slope1_min: 0.5,
            slope1_max: 10.0,
            slope2: -0.5,
        }
    }
}

/// Scans the collapsed edge for the upper corner once the width profile is
/// available. Row `i - 2` is accepted when the slope at `i` falls inside the
/// configured band, the slope at `i - 2` clears the second threshold and is
/// non-zero, the width evidence holds — the track has shrunk to at most 60%
/// of its width two rows back, or both slopes are finite (a clean slope
/// inflection needs no shrink) — and the candidate is not within the bottom
/// 50 rows of the frame. First qualifying row wins.
pub fn detect_upper_corner(
    edge: &[Point],
    width_block: &[i32],
    height: i32,
    side: Side,
    th: &SideThresholds,
) -> Option<Point> {
    let limit = edge.len().min(width_block.len());
    for i in 8..limit {
        let s = edge[i].slope;
        let s2 = edge[i - 2].slope;
        let in_band = match side {
            Side::Left => s < th.slope1_min && s > th.slope1_max,
            Side::Right => s > th.slope1_min && s < th.slope1_max,
        };
        let s2_clears = match side {
            Side::Left => s2 > th.slope2,
            Side::Right => s2 < th.slope2,
        };
        let width_shrunk = width_block[i] as f32 <= width_block[i - 2] as f32 * 0.6;
        if in_band
            && s2_clears
            && s2 != 0.0
            && (width_shrunk || !slope_is_vertical(s))
            && (width_shrunk || !slope_is_vertical(s2))
            && edge[i - 2].y < height - 50
        {
            return Some(edge[i - 2]);
        }
    }
    None
}
