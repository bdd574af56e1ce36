use crate::geom::bezier;
use crate::types::{Corners, Point, Side};

/// Consecutive contracting rows required before an obstacle is suspected.
pub const CONTRACTION_ROWS: u32 = 3;
/// Width fraction against the row five levels back that counts as contraction.
pub const CONTRACTION_FRACTION: f32 = 0.8;
/// Minimum absolute track width for a contracting row to count.
pub const MIN_ROW_WIDTH: i32 = 10;
/// Minimum edge inset from the padding border for a contracting row.
pub const MIN_EDGE_INSET: i32 = 10;

const CORNER_INSET: i32 = 30;

fn ratio_down(down: Point, up: Point) -> bool {
    if up.x == 0 {
        return false;
    }
    let r = down.x as f32 / up.x as f32;
    (0.9..=1.1).contains(&r)
}

/// Confirms an obstacle from a one-sided corner pair: both corners on the
/// same side, at least 30px inside the frame on the obstacle side, above the
/// bottom 30 rows, with the lower corner roughly plumb over the upper one.
/// Returns which side the obstacle occludes.
pub fn corner_confirm(corners: &Corners, width: i32, height: i32) -> Option<Side> {
    let top = height - CORNER_INSET;
    let left_ok = corners.left_down.x >= CORNER_INSET
        && corners.left_up.x >= CORNER_INSET
        && corners.left_down.y <= top
        && corners.left_up.y <= top
        && ratio_down(corners.left_down, corners.left_up);
    if left_ok {
        return Some(Side::Left);
    }
    let right_ok = corners.right_down.x <= width - CORNER_INSET
        && corners.right_up.x <= width - CORNER_INSET
        && corners.right_down.x > 0
        && corners.right_up.x > 0
        && corners.right_down.y <= top
        && corners.right_up.y <= top
        && ratio_down(corners.right_down, corners.right_up);
    if right_ok {
        return Some(Side::Right);
    }
    None
}

/// Bends a quadratic Bézier around the occlusion: from the third edge row,
/// through a midpoint biased two-thirds toward the upper corner, to the
/// upper corner itself. The sample step is one per row of vertical extent.
pub fn supplement(edge: &[Point], up: Point) -> Vec<Point> {
    if edge.len() <= 2 {
        return Vec::new();
    }
    let p0 = edge[2];
    let dy = (up.y - p0.y).abs();
    if dy == 0 {
        return Vec::new();
    }
    let mid = Point::new((p0.x + 2 * up.x) / 3, (p0.y + 2 * up.y) / 3);
    bezier(1.0 / dy as f64, &[p0, mid, up])
}
