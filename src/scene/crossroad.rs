use crate::geom::{line_from_slope_dy, link_points, slope_between};
use crate::types::{Corners, Point};

/// Rows (after the first 20) whose width must exceed 90% of the frame before
/// corner confirmation is attempted.
pub const WIDE_ROWS_NEEDED: u32 = 20;
/// Width fraction marking a "track spans the frame" row.
pub const WIDE_FRACTION: f32 = 0.9;

/// Corner x must sit inside `[20, width - 20]` to be a plausible crossroad
/// corner.
fn plausible(p: Point, width: i32) -> bool {
    p.x > 20 && p.x < width - 20
}

/// Stage-2 confirmation: a plausible upper corner on either side and a
/// plausible lower corner on either side (two confirmations).
pub fn corners_confirm(corners: &Corners, width: i32) -> bool {
    let up = plausible(corners.left_up, width) || plausible(corners.right_up, width);
    let down = plausible(corners.left_down, width) || plausible(corners.right_down, width);
    up && down
}

/// A lower corner reported within the top 20 rows means "not found near the
/// bottom" and is treated as absent for supplement purposes.
fn lower_found(p: Point) -> bool {
    p.is_found() && p.y > 20
}

/// Synthesizes one side's gap-filling line across the intersection.
///
/// Four cases on the upper/lower corner pair:
/// 1. both present, upper above lower: straight connect, lower to upper;
/// 2. both present, inverted order: extrapolate from the upper corner along
///    the corner-to-corner slope over `upper.y - firstRow.y`;
/// 3. only upper: connect the first edge row to the upper corner;
/// 4. only lower: extrapolate from the lower corner along the measured edge
///    slope four rows above it, over `lower.y - 4 - firstRow.y`.
///
/// Neither corner present leaves the line empty. All cases produce
/// y-monotonic sequences starting at the bottom end, as the fuser's
/// monotonic cursor requires.
pub fn supplement_side(up: Point, down: Point, edge: &[Point]) -> Vec<Point> {
    let Some(&first) = edge.first() else {
        return Vec::new();
    };
    match (lower_found(down), up.is_found()) {
        (true, true) if up.y < down.y => link_points(down, up),
        (true, true) => {
            let slope = slope_between(down, up);
            line_from_slope_dy(up, slope, up.y - first.y)
        }
        (false, true) => link_points(first, up),
        (true, false) => {
            let target = down.y - 4;
            let slope = edge
                .iter()
                .min_by_key(|p| (p.y - target).abs())
                .map(|p| p.slope)
                .unwrap_or(0.0);
            line_from_slope_dy(down, slope, target - first.y)
        }
        (false, false) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(x: i32) -> Vec<Point> {
        (0..40).map(|i| Point::new(x, 220 - i * 2)).collect()
    }

    #[test]
    fn confirm_needs_upper_and_lower() {
        let mut c = Corners::default();
        assert!(!corners_confirm(&c, 320));
        c.left_up = Point::new(60, 80);
        assert!(!corners_confirm(&c, 320));
        c.right_down = Point::new(250, 180);
        assert!(corners_confirm(&c, 320));
    }

    #[test]
    fn corners_near_frame_edge_are_implausible() {
        let mut c = Corners::default();
        c.left_up = Point::new(10, 80);
        c.left_down = Point::new(315, 180);
        assert!(!corners_confirm(&c, 320));
    }

    #[test]
    fn both_corners_connect_lower_to_upper() {
        let up = Point::new(60, 80);
        let down = Point::new(50, 180);
        let line = supplement_side(up, down, &edge(48));
        assert_eq!(*line.first().unwrap(), down);
        assert_eq!(*line.last().unwrap(), up);
        for w in line.windows(2) {
            assert!(w[1].y <= w[0].y, "supplement not y-monotonic: {w:?}");
        }
    }

    #[test]
    fn upper_only_connects_from_first_row() {
        let up = Point::new(60, 80);
        let line = supplement_side(up, Point::default(), &edge(48));
        assert_eq!(*line.first().unwrap(), Point::new(48, 220));
        assert_eq!(*line.last().unwrap(), up);
    }

    #[test]
    fn lower_only_extrapolates_with_edge_slope() {
        let mut e = edge(48);
        for p in &mut e {
            p.slope = -2.0;
        }
        let down = Point::new(50, 180);
        let line = supplement_side(Point::default(), down, &e);
        assert_eq!(*line.first().unwrap(), down);
        // extent is (down.y - 4) - first.y = -44 rows upward along slope -2
        let last = *line.last().unwrap();
        assert_eq!(last.y, down.y - 44);
        assert_eq!(last.x, down.x + 22);
    }

    #[test]
    fn no_corners_leaves_line_empty() {
        assert!(supplement_side(Point::default(), Point::default(), &edge(48)).is_empty());
    }
}
