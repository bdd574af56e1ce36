use crate::edges::{EdgeOptions, SideThresholds};
use crate::scene::SceneOptions;
use crate::tracer::TracerOptions;

/// Pipeline-wide geometry and tuning, typically produced from a
/// [`TrackConfig`](crate::config::TrackConfig).
#[derive(Clone, Copy, Debug)]
pub struct TrackParams {
    pub width: i32,
    pub height: i32,
    /// Zero-padding border painted by the capture stage.
    pub border: i32,
    pub start_line: i32,
    pub scan_height: i32,
    /// Rows dropped from the top/bottom of the error window.
    pub row_cut_up: usize,
    pub row_cut_down: usize,
    pub corner_left: SideThresholds,
    pub corner_right: SideThresholds,
}

impl Default for TrackParams {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
            border: 2,
            start_line: 3,
            scan_height: 10,
            row_cut_up: 10,
            row_cut_down: 10,
            corner_left: SideThresholds::default_left(),
            corner_right: SideThresholds::default_right(),
        }
    }
}

impl TrackParams {
    pub fn tracer_options(&self) -> TracerOptions {
        TracerOptions {
            start_line: self.start_line,
            scan_height: self.scan_height,
        }
    }

    pub fn edge_options(&self) -> EdgeOptions {
        EdgeOptions {
            width: self.width,
            height: self.height,
            border: self.border,
            corner_left: self.corner_left,
            corner_right: self.corner_right,
        }
    }

    pub fn scene_options(&self) -> SceneOptions {
        SceneOptions {
            width: self.width,
            height: self.height,
            border: self.border,
        }
    }
}
