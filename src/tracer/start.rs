use crate::image::BinaryView;
use crate::types::Point;
use log::debug;

/// Scans `scan_height` rows starting `scan_start_y` above the bottom edge
/// and derives a left/right start-point pair for the boundary walk.
///
/// A row qualifies when its leftmost-to-rightmost white run is wider than
/// half the frame; at least `scan_height / 2` rows must qualify. The result
/// is the median left/right column over qualifying rows, placed at the
/// vertical middle of the scan window.
pub fn find_start_point(
    frame: &BinaryView<'_>,
    scan_start_y: i32,
    scan_height: i32,
) -> Option<(Point, Point)> {
    let w = frame.width();
    let h = frame.height();
    let y_base = h - scan_start_y;
    if y_base < 0 || y_base >= h {
        return None;
    }

    let mut lefts = Vec::with_capacity(scan_height as usize);
    let mut rights = Vec::with_capacity(scan_height as usize);
    for offset in 0..scan_height {
        let y = y_base - offset;
        if y < 0 || y >= h {
            continue;
        }
        let left = (0..w).find(|&x| frame.is_white(x, y));
        let right = (0..w).rev().find(|&x| frame.is_white(x, y));
        if let (Some(left), Some(right)) = (left, right) {
            if left > 0 && right > left && (right - left) as f32 > w as f32 * 0.5 {
                lefts.push(left);
                rights.push(right);
            }
        }
    }

    let needed = (scan_height / 2).max(1) as usize;
    if lefts.len() < needed {
        debug!(
            "start scan at y={scan_start_y}: only {} of {needed} rows qualified",
            lefts.len()
        );
        return None;
    }
    lefts.sort_unstable();
    rights.sort_unstable();
    let left_pt = lefts[lefts.len() / 2];
    let right_pt = rights[rights.len() / 2];
    let y_pt = h - scan_start_y - scan_height / 2;
    Some((Point::new(left_pt, y_pt), Point::new(right_pt, y_pt)))
}
