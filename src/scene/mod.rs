//! Geometric scene classification over the extracted edge map.
//!
//! Overview: the classifier walks the collapsed edge rows bottom-up and
//! tests, per row and in fixed order, for zebra stripes, a crossroad and an
//! obstacle; the first element confirmed wins the frame. Crossroad and
//! obstacle confirmations also synthesize supplement lines that patch the
//! boundary gap the element tears open, for the fuser to splice in.
//!
//! Modules:
//! - [`debounce`]: per-scene multi-frame confirmation state machine;
//! - [`zebra`]: stripe transition counting;
//! - [`crossroad`]: wide-row staging, corner confirmation and gap synthesis;
//! - [`obstacle`]: width-contraction staging and occlusion bypass curve.

pub mod crossroad;
pub mod debounce;
pub mod obstacle;
pub mod zebra;

use crate::edges::EdgeMap;
use crate::image::BinaryView;
use crate::types::{Point, Scene, Side};
use log::debug;

pub use debounce::{Debounce, DebounceState};
pub use zebra::ZebraCounter;

/// Frames of consecutive zebra sightings before the scene is trusted. The
/// geometric elements confirm on sight.
pub const ZEBRA_CONFIRM_FRAMES: u32 = 5;

/// Boundary patches synthesized when a track element interrupts the normal
/// two-edge corridor. Empty vectors mean "no patch on that side".
#[derive(Clone, Debug, Default)]
pub struct SupplementLines {
    pub crossroad_left: Vec<Point>,
    pub crossroad_right: Vec<Point>,
    pub obstacle_left: Vec<Point>,
    pub obstacle_right: Vec<Point>,
}

impl SupplementLines {
    fn clear(&mut self) {
        self.crossroad_left.clear();
        self.crossroad_right.clear();
        self.obstacle_left.clear();
        self.obstacle_right.clear();
    }
}

/// Geometry knobs shared by the element detectors.
#[derive(Clone, Copy, Debug)]
pub struct SceneOptions {
    pub width: i32,
    pub height: i32,
    pub border: i32,
}

/// Stateful classifier: per-frame element scan plus cross-frame debouncing.
#[derive(Debug)]
pub struct SceneClassifier {
    zebra: Debounce,
    cross: Debounce,
    obstacle: Debounce,
    supplement: SupplementLines,
}

impl Default for SceneClassifier {
    fn default() -> Self {
        Self {
            zebra: Debounce::new(ZEBRA_CONFIRM_FRAMES),
            cross: Debounce::new(1),
            obstacle: Debounce::new(1),
            supplement: SupplementLines::default(),
        }
    }
}

impl SceneClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans the frame's edge rows for track elements. Returns the raw scene
    /// for this frame; call [`SceneClassifier::confirm`] afterwards to fold
    /// it into the cross-frame state.
    pub fn classify(
        &mut self,
        frame: &BinaryView<'_>,
        edges: &EdgeMap,
        opts: &SceneOptions,
    ) -> Scene {
        self.supplement.clear();

        let mut zebra_counter = ZebraCounter::default();
        let mut wide_rows = 0u32;
        let mut contraction_streak = 0u32;
        let wide_width = opts.width as f32 * crossroad::WIDE_FRACTION;

        for i in 0..edges.valid_row {
            let left = edges.left[i];
            let right = edges.right[i];
            let width = edges.width_block[i];

            if zebra::scan_row(frame, left, right, width, &mut zebra_counter) {
                debug!("scene: zebra at row {i} ({zebra_counter:?})");
                return Scene::Zebra;
            }

            if i > 20 && width as f32 > wide_width {
                wide_rows += 1;
                if wide_rows >= crossroad::WIDE_ROWS_NEEDED
                    && crossroad::corners_confirm(&edges.corners, opts.width)
                {
                    self.supplement.crossroad_left = crossroad::supplement_side(
                        edges.corners.left_up,
                        edges.corners.left_down,
                        &edges.left,
                    );
                    self.supplement.crossroad_right = crossroad::supplement_side(
                        edges.corners.right_up,
                        edges.corners.right_down,
                        &edges.right,
                    );
                    debug!("scene: crossroad after {wide_rows} wide rows");
                    return Scene::Cross;
                }
            }

            let contracting = i >= 5
                && (width as f32) < edges.width_block[i - 5] as f32 * obstacle::CONTRACTION_FRACTION
                && width >= obstacle::MIN_ROW_WIDTH
                && left.x >= opts.border + obstacle::MIN_EDGE_INSET
                && right.x <= opts.width - opts.border - obstacle::MIN_EDGE_INSET;
            if contracting {
                contraction_streak += 1;
                if contraction_streak >= obstacle::CONTRACTION_ROWS {
                    if let Some(side) =
                        obstacle::corner_confirm(&edges.corners, opts.width, opts.height)
                    {
                        match side {
                            Side::Left => {
                                self.supplement.obstacle_left =
                                    obstacle::supplement(&edges.left, edges.corners.left_up);
                            }
                            Side::Right => {
                                self.supplement.obstacle_right =
                                    obstacle::supplement(&edges.right, edges.corners.right_up);
                            }
                        }
                        debug!("scene: obstacle on {side:?} at row {i}");
                        return Scene::Obstacle;
                    }
                }
            } else {
                contraction_streak = 0;
            }
        }

        Scene::Normal
    }

    /// Folds the frame's raw scene into the per-scene debouncers and
    /// returns the confirmed scene.
    pub fn confirm(&mut self, raw: Scene) -> Scene {
        let zebra = self.zebra.observe(raw == Scene::Zebra);
        let cross = self.cross.observe(raw == Scene::Cross);
        let obstacle = self.obstacle.observe(raw == Scene::Obstacle);
        if zebra {
            Scene::Zebra
        } else if cross {
            Scene::Cross
        } else if obstacle {
            Scene::Obstacle
        } else {
            Scene::Normal
        }
    }

    pub fn supplement(&self) -> &SupplementLines {
        &self.supplement
    }

    /// Re-arms every scene for a new run segment.
    pub fn reset(&mut self) {
        self.zebra.reset();
        self.cross.reset();
        self.obstacle.reset();
        self.supplement.clear();
    }
}
