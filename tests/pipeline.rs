mod common;

use common::synthetic_track::{
    cornered_crossroad_track, crossroad_track, dead_end_track, straight_track, zebra_track,
};
use track_detector::prelude::*;
use track_detector::StopReason;

fn detector() -> TrackDetector {
    TrackDetector::new(TrackParams::default())
}

#[test]
fn straight_track_reports_centered_normal_scene() {
    let img = straight_track();
    let mut det = detector();
    let report = det.process(&img.view()).expect("frame");
    assert_eq!(report.analysis.scene, Scene::Normal);
    assert_eq!(report.analysis.scene_confirmed, Scene::Normal);
    assert!(
        (report.analysis.control_center - 160).abs() <= 1,
        "control_center={}",
        report.analysis.control_center
    );
    assert!(report.analysis.middle_error.abs() < 2.0);
    assert!(report.analysis.valid_row > 50);
    assert!(report.fit.sigma_center.is_finite());
}

#[test]
fn zebra_confirms_on_the_fifth_consecutive_frame() {
    let img = zebra_track();
    let mut det = detector();
    for frame in 1..=5 {
        let report = det.process(&img.view()).expect("frame");
        assert_eq!(report.analysis.scene, Scene::Zebra, "frame {frame}");
        if frame < 5 {
            assert_eq!(report.analysis.scene_confirmed, Scene::Normal, "frame {frame}");
        } else {
            assert_eq!(report.analysis.scene_confirmed, Scene::Zebra);
        }
    }
    // confirmation is sticky until the detector is re-armed
    let clean = straight_track();
    let report = det.process(&clean.view()).expect("frame");
    assert_eq!(report.analysis.scene, Scene::Normal);
    assert_eq!(report.analysis.scene_confirmed, Scene::Zebra);
    det.reset();
    let report = det.process(&clean.view()).expect("frame");
    assert_eq!(report.analysis.scene_confirmed, Scene::Normal);
}

#[test]
fn crossroad_band_floods_both_edges_to_the_border() {
    let img = crossroad_track();
    let mut det = detector();
    let report = det.process(&img.view()).expect("frame");
    // across the band both tracers hug the padding, so those rows are
    // reported as lost on both sides
    assert!(report.analysis.lost_left > 20, "lost_left={}", report.analysis.lost_left);
    assert!(report.analysis.lost_right > 20, "lost_right={}", report.analysis.lost_right);
    assert_ne!(report.analysis.scene, Scene::Obstacle);
    assert_ne!(report.analysis.scene, Scene::Zebra);
}

#[test]
fn cornered_crossroad_classifies_cross_and_patches_both_sides() {
    let img = cornered_crossroad_track();
    let mut det = detector();
    let report = det.process(&img.view()).expect("frame");
    assert_eq!(report.analysis.scene, Scene::Cross);
    assert_eq!(report.analysis.scene_confirmed, Scene::Cross);
    let supp = det.supplement();
    assert!(!supp.crossroad_left.is_empty());
    assert!(!supp.crossroad_right.is_empty());
    // each patch runs upward from its lower corner to its upper one
    let first = supp.crossroad_left.first().unwrap();
    let last = supp.crossroad_left.last().unwrap();
    assert!(first.y > last.y, "patch from y={} to y={}", first.y, last.y);
    assert!(first.x > last.x);
}

#[test]
fn dead_end_terminates_on_the_turn_limit() {
    let img = dead_end_track();
    let mut det = detector();
    let report = det.process(&img.view()).expect("frame");
    assert_eq!(report.stop, StopReason::TurnLimit);
    assert!(report.analysis.valid_row <= 2, "valid_row={}", report.analysis.valid_row);
}

#[test]
fn all_black_frame_is_skipped_without_state_damage() {
    let empty = BinaryImage::new(320, 240);
    let mut det = detector();
    assert!(det.process(&empty.view()).is_none());
    // the detector still works on the next good frame
    let img = straight_track();
    let report = det.process(&img.view()).expect("frame");
    assert_eq!(report.analysis.scene, Scene::Normal);
}
