use crate::types::Point;
use nalgebra::Vector2;

/// Population variance of a scalar sequence. Empty input yields 0.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / values.len() as f64
}

/// 2D population variance of a point sequence: mean-subtract, then average
/// the squared norms. Empty input yields 0.
pub fn point_variance(points: &[Point]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let n = points.len() as f64;
    let mean = points
        .iter()
        .fold(Vector2::<f64>::zeros(), |acc, p| {
            acc + Vector2::new(p.x as f64, p.y as f64)
        })
        / n;
    points
        .iter()
        .map(|p| {
            let d = Vector2::new(p.x as f64, p.y as f64) - mean;
            d.dot(&d)
        })
        .sum::<f64>()
        / n
}
