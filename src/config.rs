//! Flat JSON configuration in the original on-vehicle key set.
//!
//! The file is a single object of `Key: value` pairs. Missing keys fall back
//! to defaults and unknown keys are ignored, so older and newer files load
//! interchangeably.

use crate::detector::TrackParams;
use crate::edges::SideThresholds;
use crate::motion::MotionParams;
use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Raw configuration as stored on disk.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    #[serde(rename = "Image_Width")]
    pub image_width: i32,
    #[serde(rename = "Image_Height")]
    pub image_height: i32,
    #[serde(rename = "Border")]
    pub border: i32,
    #[serde(rename = "Start_Line")]
    pub start_line: i32,
    /// Binarisation threshold consumed by the capture stage ahead of this
    /// crate; accepted here so shared config files load unchanged.
    #[serde(rename = "threshold")]
    pub threshold: i32,
    #[serde(rename = "Row_Cut_Up")]
    pub row_cut_up: usize,
    #[serde(rename = "Row_Cut_Bottom")]
    pub row_cut_bottom: usize,

    #[serde(rename = "Corner_Left_Up_Slope1_Min")]
    pub corner_left_slope1_min: f32,
    #[serde(rename = "Corner_Left_Up_Slope1_Max")]
    pub corner_left_slope1_max: f32,
    #[serde(rename = "Corner_Left_Up_Slope2")]
    pub corner_left_slope2: f32,
    #[serde(rename = "Corner_Right_Up_Slope1_Min")]
    pub corner_right_slope1_min: f32,
    #[serde(rename = "Corner_Right_Up_Slope1_Max")]
    pub corner_right_slope1_max: f32,
    #[serde(rename = "Corner_Right_Up_Slope2")]
    pub corner_right_slope2: f32,

    #[serde(rename = "Speed_Low")]
    pub speed_low: f32,
    #[serde(rename = "Speed_High")]
    pub speed_high: f32,
    #[serde(rename = "Speed_Bridge")]
    pub speed_bridge: f32,
    #[serde(rename = "Speed_Catering")]
    pub speed_catering: f32,
    #[serde(rename = "Speed_Layby")]
    pub speed_layby: f32,
    #[serde(rename = "Speed_Obstacle")]
    pub speed_obstacle: f32,
    #[serde(rename = "Speed_Parking")]
    pub speed_parking: f32,
    #[serde(rename = "Speed_Ring")]
    pub speed_ring: f32,
    #[serde(rename = "Speed_Down")]
    pub speed_down: f32,

    /// Accepted but unused, like `Turn_P`: the controller's gain is built
    /// from `Run_P2`/`Run_P3` alone.
    #[serde(rename = "Run_P1")]
    pub run_p1: f32,
    #[serde(rename = "Run_P2")]
    pub run_p2: f32,
    #[serde(rename = "Run_P3")]
    pub run_p3: f32,
    /// Legacy static proportional gain. The planner derives its gain from
    /// Run_P2/Run_P3, so a non-zero value here is reported and ignored.
    #[serde(rename = "Turn_P")]
    pub turn_p: f32,
    #[serde(rename = "Turn_D")]
    pub turn_d: f32,
    #[serde(rename = "Motion_Enable")]
    pub motion_enable: bool,
}

impl Default for TrackConfig {
    fn default() -> Self {
        let motion = MotionParams::default();
        let left = SideThresholds::default_left();
        let right = SideThresholds::default_right();
        Self {
            image_width: 320,
            image_height: 240,
            border: 2,
            start_line: 3,
            threshold: 128,
            row_cut_up: 10,
            row_cut_bottom: 10,
            corner_left_slope1_min: left.slope1_min,
            corner_left_slope1_max: left.slope1_max,
            corner_left_slope2: left.slope2,
            corner_right_slope1_min: right.slope1_min,
            corner_right_slope1_max: right.slope1_max,
            corner_right_slope2: right.slope2,
            speed_low: motion.speed_low,
            speed_high: motion.speed_high,
            speed_bridge: motion.speed_bridge,
            speed_catering: motion.speed_catering,
            speed_layby: motion.speed_layby,
            speed_obstacle: motion.speed_obstacle,
            speed_parking: motion.speed_parking,
            speed_ring: motion.speed_ring,
            speed_down: motion.speed_down,
            run_p1: 0.0,
            run_p2: motion.run_p2,
            run_p3: motion.run_p3,
            turn_p: 0.0,
            turn_d: motion.turn_d,
            motion_enable: motion.enable,
        }
    }
}

/// Reads and parses a configuration file.
pub fn load_config(path: &Path) -> Result<TrackConfig, ConfigError> {
    let text = fs::read_to_string(path)?;
    let config: TrackConfig = serde_json::from_str(&text)?;
    if config.turn_p != 0.0 {
        warn!("Turn_P={} is ignored; gain comes from Run_P2/Run_P3", config.turn_p);
    }
    Ok(config)
}

impl TrackConfig {
    pub fn to_params(&self) -> TrackParams {
        TrackParams {
            width: self.image_width,
            height: self.image_height,
            border: self.border,
            start_line: self.start_line,
            scan_height: 10,
            row_cut_up: self.row_cut_up,
            row_cut_down: self.row_cut_bottom,
            corner_left: SideThresholds {
                slope1_min: self.corner_left_slope1_min,
                slope1_max: self.corner_left_slope1_max,
                slope2: self.corner_left_slope2,
            },
            corner_right: SideThresholds {
                slope1_min: self.corner_right_slope1_min,
                slope1_max: self.corner_right_slope1_max,
                slope2: self.corner_right_slope2,
            },
        }
    }

    pub fn to_motion_params(&self) -> MotionParams {
        MotionParams {
            enable: self.motion_enable,
            slow_down: false,
            speed_low: self.speed_low,
            speed_high: self.speed_high,
            speed_bridge: self.speed_bridge,
            speed_catering: self.speed_catering,
            speed_layby: self.speed_layby,
            speed_obstacle: self.speed_obstacle,
            speed_parking: self.speed_parking,
            speed_ring: self.speed_ring,
            speed_down: self.speed_down,
            run_p2: self.run_p2,
            run_p3: self.run_p3,
            turn_d: self.turn_d,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_defaults_and_ignores_unknown_keys() {
        let text = r#"{
            "Image_Width": 640,
            "Speed_High": 2.0,
            "Uart_Baud": 115200
        }"#;
        let config: TrackConfig = serde_json::from_str(text).unwrap();
        assert_eq!(config.image_width, 640);
        assert_eq!(config.speed_high, 2.0);
        assert_eq!(config.image_height, 240);
        assert_eq!(config.border, 2);
    }

    #[test]
    fn typed_params_carry_the_corner_thresholds() {
        let text = r#"{"Corner_Left_Up_Slope1_Min": -0.8, "Corner_Left_Up_Slope2": 0.9}"#;
        let config: TrackConfig = serde_json::from_str(text).unwrap();
        let params = config.to_params();
        assert_eq!(params.corner_left.slope1_min, -0.8);
        assert_eq!(params.corner_left.slope2, 0.9);
        assert_eq!(params.corner_right.slope2, -0.5);
    }

    #[test]
    fn motion_params_mirror_the_speed_table() {
        let config = TrackConfig {
            speed_down: 0.1,
            motion_enable: false,
            ..TrackConfig::default()
        };
        let motion = config.to_motion_params();
        assert_eq!(motion.speed_down, 0.1);
        assert!(!motion.enable);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = serde_json::from_str::<TrackConfig>("not json").unwrap_err();
        assert!(ConfigError::from(err).to_string().contains("parse"));
    }
}
