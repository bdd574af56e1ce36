use crate::types::Point;

/// Sentinel magnitude reported for a vertical two-point slope. The sign
/// encodes which point is higher (smaller y).
pub const VERTICAL_SLOPE: f32 = 255.0;

/// Slope magnitude beyond which a configured slope is treated as vertical by
/// the ray generators.
const VERTICAL_INPUT: f32 = 1000.0;

/// Slope between two points in the `Δy/Δx` convention, with `±VERTICAL_SLOPE`
/// standing in for a vertical line (`Δx == 0`).
#[inline]
pub fn slope_between(p1: Point, p2: Point) -> f32 {
    if p1.x == p2.x {
        if p1.y > p2.y {
            VERTICAL_SLOPE
        } else {
            -VERTICAL_SLOPE
        }
    } else {
        (p1.y - p2.y) as f32 / (p1.x - p2.x) as f32
    }
}

/// True when `slope` carries the vertical sentinel. Non-sentinel edge slopes
/// are bounded by the 2/4-row lookback, so magnitude alone is decisive.
#[inline]
pub fn slope_is_vertical(slope: f32) -> bool {
    slope.abs() >= VERTICAL_SLOPE
}

/// Endpoint-inclusive integer walk from `a` to `b` (Bresenham). Each cell is
/// emitted exactly once, `a` first and `b` last.
pub fn link_points(a: Point, b: Point) -> Vec<Point> {
    let dx = (b.x - a.x).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let dy = -(b.y - a.y).abs();
    let sy = if a.y < b.y { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (a.x, a.y);

    let mut out = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    loop {
        out.push(Point::new(x, y));
        if x == b.x && y == b.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    out
}

/// Points along the ray of the given slope starting at `start`, covering a
/// signed vertical extent `dy`. Slopes beyond the vertical threshold (and
/// near-zero slopes, which cannot advance vertically) degenerate to a pure
/// vertical step.
pub fn line_from_slope_dy(start: Point, slope: f32, dy: i32) -> Vec<Point> {
    if dy == 0 {
        return vec![start];
    }
    let end = if slope.abs() > VERTICAL_INPUT || slope.abs() < 1e-6 {
        Point::new(start.x, start.y + dy)
    } else {
        let dx = (dy as f32 / slope).round() as i32;
        Point::new(start.x + dx, start.y + dy)
    };
    link_points(start, end)
}

/// Horizontal-extent variant of [`line_from_slope_dy`]. A vertical slope has
/// no horizontal extent, so the ray degenerates to the start point.
pub fn line_from_slope_dx(start: Point, slope: f32, dx: i32) -> Vec<Point> {
    if dx == 0 || slope.abs() > VERTICAL_INPUT {
        return vec![start];
    }
    let dy = (dx as f32 * slope).round() as i32;
    link_points(start, Point::new(start.x + dx, start.y + dy))
}
