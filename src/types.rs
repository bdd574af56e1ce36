use serde::Serialize;

/// Pixel position on the binary frame with a derived local slope.
///
/// Equality compares `(x, y)` only; `slope` is an attribute computed after
/// the fact by the edge extractor and carried for classification use.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub slope: f32,
}

impl Point {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y, slope: 0.0 }
    }

    #[inline]
    pub fn with_slope(x: i32, y: i32, slope: f32) -> Self {
        Self { x, y, slope }
    }

    /// Corner sentinel check: `{0,0}` means "not found this frame".
    #[inline]
    pub fn is_found(&self) -> bool {
        self.x != 0
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

/// Which boundary a cursor or an edge sequence belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Side {
    Left,
    Right,
}

/// Discrete classification of the current track segment.
///
/// Ring, Bridge, Catering, Layby and Parking are reserved hooks; the
/// classifier currently falls through to `Normal` for them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Scene {
    #[default]
    Normal,
    Zebra,
    Cross,
    Ring,
    Bridge,
    Obstacle,
    Catering,
    Layby,
    Parking,
}

/// Corner quadrant tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CornerKind {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

/// The four track corners detected per frame. `{0,0}` marks an absent
/// corner; each slot is written at most once per frame (first match wins).
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct Corners {
    pub left_up: Point,
    pub left_down: Point,
    pub right_up: Point,
    pub right_down: Point,
}

impl Corners {
    pub fn get(&self, kind: CornerKind) -> Point {
        match kind {
            CornerKind::LeftUp => self.left_up,
            CornerKind::LeftDown => self.left_down,
            CornerKind::RightUp => self.right_up,
            CornerKind::RightDown => self.right_down,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Immutable per-frame summary produced by the pipeline driver and handed to
/// the motion planner and telemetry sinks.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameAnalysis {
    /// Raw scene returned by the classifier this frame.
    pub scene: Scene,
    /// Scene after per-scene debouncing (zebra needs several consecutive
    /// frames before it is trusted).
    pub scene_confirmed: Scene,
    /// Height-weighted centerline error in pixels (signed, + is right).
    pub middle_error: f32,
    /// Weighted control-center abscissa, clamped to `[0, width - 1]`.
    pub control_center: i32,
    /// Path-smoothness variance over the fitted centerline; 1000 is the
    /// "unreliable / insufficient data" sentinel.
    pub sigma_center: f64,
    /// Number of collapsed edge rows common to both sides.
    pub valid_row: usize,
    /// Rows where the left/right edge hugged the zero border.
    pub lost_left: usize,
    pub lost_right: usize,
}
