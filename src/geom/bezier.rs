use crate::types::Point;
use nalgebra::Vector2;

fn factorial(n: usize) -> f64 {
    (1..=n).map(|i| i as f64).product::<f64>().max(1.0)
}

#[inline]
fn bernstein(n: usize, i: usize, t: f64) -> f64 {
    let binom = factorial(n) / (factorial(i) * factorial(n - i));
    binom * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32)
}

/// Evaluates a Bézier curve over its control points with an explicit
/// Bernstein-basis summation, sampling `t` from 0 in steps of `dt` while
/// `t <= 1`. Coordinates are truncated to pixel cells, so the first sample
/// equals the first control point exactly.
pub fn bezier(dt: f64, ctrl: &[Point]) -> Vec<Point> {
    if ctrl.is_empty() || dt <= 0.0 {
        return Vec::new();
    }
    let n = ctrl.len() - 1;
    let mut out = Vec::with_capacity((1.0 / dt) as usize + 2);
    let mut t = 0.0;
    while t <= 1.0 {
        let mut acc = Vector2::<f64>::zeros();
        for (i, p) in ctrl.iter().enumerate() {
            acc += Vector2::new(p.x as f64, p.y as f64) * bernstein(n, i, t);
        }
        out.push(Point::new(acc.x as i32, acc.y as i32));
        t += dt;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_control_point() {
        let ctrl = [
            Point::new(160, 230),
            Point::new(150, 160),
            Point::new(170, 90),
            Point::new(160, 20),
        ];
        let curve = bezier(0.03, &ctrl);
        assert_eq!(curve[0], ctrl[0]);
    }

    #[test]
    fn last_sample_lands_near_last_control_point() {
        let ctrl = [
            Point::new(160, 230),
            Point::new(150, 160),
            Point::new(170, 90),
            Point::new(160, 20),
        ];
        let dt = 0.03;
        let curve = bezier(dt, &ctrl);
        let last = *curve.last().unwrap();
        let end = ctrl[3];
        // last sampled t is within one step of 1; the curve point moves at
        // most the full control-polygon span per unit t
        let span_x = 20.0 * dt + 1.0;
        let span_y = 210.0 * dt + 1.0;
        assert!(
            (last.x - end.x).abs() as f64 <= span_x && (last.y - end.y).abs() as f64 <= span_y,
            "last={last:?} end={end:?}"
        );
    }

    #[test]
    fn quadratic_midpoint() {
        let ctrl = [Point::new(0, 0), Point::new(10, 0), Point::new(20, 0)];
        let curve = bezier(0.5, &ctrl);
        // samples at t = 0, 0.5, 1.0
        assert_eq!(curve.len(), 3);
        assert_eq!(curve[1], Point::new(10, 0));
        assert_eq!(curve[2], Point::new(20, 0));
    }

    #[test]
    fn empty_controls_yield_empty_curve() {
        assert!(bezier(0.03, &[]).is_empty());
    }
}
