//! Runs the pipeline over a synthetic crossroad frame and prints the frame
//! report as JSON. An optional argument names a configuration file.
//!
//! ```text
//! frame_demo [config.json]
//! ```

use std::path::Path;
use std::process::ExitCode;

use track_detector::diagnostics::LogMetrics;
use track_detector::prelude::*;
use track_detector::{load_config, TrackConfig};

/// Vertical corridor opening into a full-width horizontal band.
fn crossroad_frame(params: &TrackParams) -> BinaryImage {
    let (w, h) = (params.width as usize, params.height as usize);
    let mut img = BinaryImage::new(w, h);
    img.fill_white(w * 3 / 16, 0, w * 13 / 16, h);
    img.fill_white(0, h / 3, w, h * 7 / 12);
    img.paint_border(params.border as usize);
    img
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => TrackConfig::default(),
    };
    let params = config.to_params();
    let img = crossroad_frame(&params);

    let mut detector = TrackDetector::new(params);
    let mut planner = MotionPlanner::new(config.to_motion_params());
    let mut metrics = LogMetrics;
    match detector.process_with(&img.view(), &mut metrics) {
        Some(report) => {
            let cmd = planner.plan(
                &report.fit,
                report.analysis.middle_error,
                report.analysis.scene_confirmed,
                params.width,
                params.height,
            );
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("report serialization failed: {err}");
                    return ExitCode::FAILURE;
                }
            }
            println!("command: pwm={} speed={:.2}", cmd.servo_pwm, cmd.speed);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("frame skipped: no start point");
            ExitCode::FAILURE
        }
    }
}
