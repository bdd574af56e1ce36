use track_detector::prelude::*;

fn main() {
    env_logger::init();

    let params = TrackParams::default();
    let mut img = BinaryImage::new(params.width as usize, params.height as usize);
    img.fill_white(60, 0, 260, 240);
    img.paint_border(params.border as usize);

    let mut detector = TrackDetector::new(params);
    let mut planner = MotionPlanner::default();
    match detector.process(&img.view()) {
        Some(report) => {
            let cmd = planner.plan(
                &report.fit,
                report.analysis.middle_error,
                report.analysis.scene_confirmed,
                params.width,
                params.height,
            );
            println!(
                "scene={:?} center={} error={:.2} pwm={} speed={:.2}",
                report.analysis.scene_confirmed,
                report.analysis.control_center,
                report.analysis.middle_error,
                cmd.servo_pwm,
                cmd.speed
            );
        }
        None => println!("frame skipped: no start point"),
    }
}
