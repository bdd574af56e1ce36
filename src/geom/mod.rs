//! Discrete geometry building blocks shared across the pipeline: two-point
//! slopes with a vertical sentinel, endpoint-inclusive integer line walks,
//! slope-projected ray generators, a Bernstein-basis Bézier evaluator and
//! small variance helpers.

pub mod bezier;
pub mod slope;
pub mod stats;

pub use bezier::bezier;
pub use slope::{
    line_from_slope_dx, line_from_slope_dy, link_points, slope_between, slope_is_vertical,
    VERTICAL_SLOPE,
};
pub use stats::{point_variance, variance};
