//! Centerline fitting: a cubic Bézier through four middle-line anchors plus
//! the weighted control-center abscissa and a path-spread sigma used by the
//! speed governor as a reliability signal.

use crate::fuse::FusedLines;
use crate::geom::{bezier, point_variance};
use crate::types::Point;
use log::debug;

/// Bézier sample step for the fitted centerline.
const FIT_DT: f64 = 0.03;
/// Row fractions anchoring the four control points.
const ANCHOR_FRACTIONS: [f64; 4] = [0.0, 1.0 / 3.0, 2.0 / 3.0, 0.9];
/// Sigma reported when the fit is too short to be trusted.
pub const SIGMA_UNRELIABLE: f64 = 1000.0;

/// Fitted centerline and its scalar summaries.
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterFit {
    pub center_edge: Vec<Point>,
    /// Weighted center abscissa, clamped to `[0, width - 1]`.
    pub control_center: i32,
    /// Trimmed 2D spread of the fitted points, or [`SIGMA_UNRELIABLE`].
    pub sigma_center: f64,
}

/// Bottom-weighted average of the centerline abscissas, seeded with one
/// frame-center vote so an empty curve still yields a sane answer. Rows in
/// the upper half of the frame all carry the half-height weight; lower rows
/// gain weight as they approach the bottom.
pub fn weighted_control_center(center_edge: &[Point], width: i32, height: i32) -> i32 {
    let mut acc = (width / 2) as i64;
    let mut weight_sum = 1i64;
    for p in center_edge {
        let w = if p.y < height / 2 {
            (height / 2) as i64
        } else {
            (height - p.y) as i64
        };
        acc += p.x as i64 * w;
        weight_sum += w;
    }
    ((acc / weight_sum) as i32).clamp(0, width - 1)
}

fn trimmed_sigma(center_edge: &[Point]) -> f64 {
    if center_edge.len() <= 20 {
        return SIGMA_UNRELIABLE;
    }
    let trim = center_edge.len() / 5;
    point_variance(&center_edge[trim..center_edge.len() - trim])
}

/// Fits the centerline over the fused middle line. Degenerate inputs (either
/// boundary empty) report the frame center with the unreliable sigma.
pub fn fit_centerline(fused: &FusedLines, width: i32, height: i32) -> CenterFit {
    if fused.left_line.is_empty() || fused.right_line.is_empty() {
        return CenterFit {
            center_edge: Vec::new(),
            control_center: width / 2,
            sigma_center: SIGMA_UNRELIABLE,
        };
    }

    let rows = fused.left_line.len().min(fused.right_line.len());
    let mut ctrl = [Point::default(); 4];
    for (k, frac) in ANCHOR_FRACTIONS.iter().enumerate() {
        let i = (((rows - 1) as f64) * frac) as usize;
        let l = fused.left_line[i];
        let r = fused.right_line[i];
        ctrl[k] = Point::new((l.x + r.x) / 2, (l.y + r.y) / 2);
    }

    let center_edge = bezier(FIT_DT, &ctrl);
    let control_center = weighted_control_center(&center_edge, width, height);
    let sigma_center = trimmed_sigma(&center_edge);
    debug!(
        "center: points={} control={} sigma={:.2}",
        center_edge.len(),
        control_center,
        sigma_center
    );
    CenterFit {
        center_edge,
        control_center,
        sigma_center,
    }
}
