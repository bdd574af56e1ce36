//! Synthetic 320x240 binary frames for the pipeline scenarios.

use track_detector::image::{BinaryImage, BLACK};

pub const W: usize = 320;
pub const H: usize = 240;

/// Straight vertical corridor, white on black, padded border.
pub fn straight_track() -> BinaryImage {
    let mut img = BinaryImage::new(W, H);
    img.fill_white(60, 0, 260, H);
    img.paint_border(2);
    img
}

/// Straight corridor with zebra bars across the middle third. Bar pitch and
/// count are chosen so a couple of scanned rows push both transition
/// counters past the trigger.
pub fn zebra_track() -> BinaryImage {
    let mut img = straight_track();
    for x in (84..240).step_by(12) {
        img.fill_rect(x, 85, x + 4, 155, BLACK);
    }
    img
}

/// Vertical corridor opening into a full-width horizontal band.
pub fn crossroad_track() -> BinaryImage {
    let mut img = BinaryImage::new(W, H);
    img.fill_white(60, 0, 260, H);
    img.fill_white(0, 80, W, 140);
    img.paint_border(2);
    img
}

/// Crossroad approach view: the corridor flares outward into visible lower
/// corners, pinches back to corridor width at the upper corners, then opens
/// into a full-width band.
pub fn cornered_crossroad_track() -> BinaryImage {
    let mut img = BinaryImage::new(W, H);
    for y in 0..H {
        let (x0, x1) = if y >= 200 {
            (60, 260)
        } else if y >= 170 {
            // flaring out toward the lower corners, one pixel per row
            (60 - (200 - y), 260 + (200 - y))
        } else if y >= 140 {
            // pinching back in above the corner apex
            (30 + (170 - y), 290 - (170 - y))
        } else if (80..110).contains(&y) {
            (0, W)
        } else {
            (60, 260)
        };
        img.fill_white(x0, y, x1, y + 1);
    }
    img.paint_border(2);
    img
}

/// Short white stub whose start point lands inside a black notch, so the
/// left cursor has nowhere to go.
pub fn dead_end_track() -> BinaryImage {
    let mut img = BinaryImage::new(W, H);
    img.fill_white(40, H - 20, 220, H);
    img.fill_rect(39, 231, 42, 234, BLACK);
    img.paint_border(2);
    img
}
