//! Splices the scene supplement lines into the raw boundaries and derives
//! the per-row middle line with its height-weighted steering error.

use crate::edges::EdgeMap;
use crate::scene::SupplementLines;
use crate::types::Point;
use log::debug;

/// Forward rows a base row may look ahead in the supplement line for a match.
const MATCH_WINDOW: usize = 5;
/// Maximum |Δy| between a base row and its supplement replacement.
const MATCH_TOLERANCE: i32 = 2;

/// Post-fusion boundary and middle lines for one frame.
#[derive(Clone, Debug, Default)]
pub struct FusedLines {
    pub left_line: Vec<Point>,
    pub right_line: Vec<Point>,
    pub middle_line: Vec<Point>,
    /// Height-weighted signed deviation of the middle line from the frame
    /// center, averaged over the cut window. Positive means the track bends
    /// right of center.
    pub middle_error: f32,
}

/// Replaces base rows with supplement points under a monotonic cursor: each
/// base row may match one of the next few supplement points by y proximity,
/// and the cursor only ever advances. A y-disordered supplement therefore
/// degrades to partial (or no) splicing instead of corrupting earlier rows.
fn splice(base: &mut [Point], supp: &[Point]) {
    if supp.is_empty() {
        return;
    }
    let mut cursor = 0usize;
    for row in base.iter_mut() {
        if cursor >= supp.len() {
            break;
        }
        let window_end = (cursor + MATCH_WINDOW).min(supp.len());
        for k in cursor..window_end {
            if (supp[k].y - row.y).abs() <= MATCH_TOLERANCE {
                *row = supp[k];
                cursor = k + 1;
                break;
            }
        }
    }
}

/// Fuses the edge map with the frame's supplement lines and computes the
/// middle line and its weighted error.
///
/// Crossroad patches are applied first, then obstacle patches override them
/// where both exist. The error window drops `row_cut_down` rows at the
/// bottom and everything above `height - row_cut_up`.
pub fn fuse_middle(
    edges: &EdgeMap,
    supp: &SupplementLines,
    width: i32,
    height: i32,
    row_cut_up: usize,
    row_cut_down: usize,
) -> FusedLines {
    let mut fused = FusedLines {
        left_line: edges.left.clone(),
        right_line: edges.right.clone(),
        ..FusedLines::default()
    };

    splice(&mut fused.left_line, &supp.crossroad_left);
    splice(&mut fused.right_line, &supp.crossroad_right);
    splice(&mut fused.left_line, &supp.obstacle_left);
    splice(&mut fused.right_line, &supp.obstacle_right);

    let rows = fused.left_line.len().min(fused.right_line.len());
    fused.middle_line.reserve(rows);
    for i in 0..rows {
        let l = fused.left_line[i];
        let r = fused.right_line[i];
        fused.middle_line.push(Point::new((l.x + r.x) / 2, l.y));
    }

    let half = width as f32 / 2.0;
    let mut acc = 0.0f32;
    let mut count = 0u32;
    for (i, p) in fused.middle_line.iter().enumerate() {
        if i <= row_cut_down || i as i32 >= height - row_cut_up as i32 {
            continue;
        }
        let weight = 1.0 - i as f32 / height as f32;
        acc += weight * (p.x as f32 - half);
        count += 1;
    }
    if count > 0 {
        fused.middle_error = acc / count as f32;
    }
    debug!(
        "fuse: rows={} error={:.2} spliced=({},{},{},{})",
        rows,
        fused.middle_error,
        supp.crossroad_left.len(),
        supp.crossroad_right.len(),
        supp.obstacle_left.len(),
        supp.obstacle_right.len()
    );
    fused
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SupplementLines;

    fn edges_straight(rows: usize, lx: i32, rx: i32) -> EdgeMap {
        let mut map = EdgeMap::default();
        for i in 0..rows {
            let y = 230 - i as i32 * 2;
            map.left.push(Point::new(lx, y));
            map.right.push(Point::new(rx, y));
            map.width_block.push(rx - lx);
        }
        map.valid_row = rows;
        map
    }

    #[test]
    fn centered_corridor_has_near_zero_error() {
        let edges = edges_straight(80, 60, 260);
        let fused = fuse_middle(&edges, &SupplementLines::default(), 320, 240, 10, 10);
        assert_eq!(fused.middle_line.len(), 80);
        assert!(fused.middle_line.iter().all(|p| p.x == 160));
        assert!(fused.middle_error.abs() < 1e-3);
    }

    #[test]
    fn offset_corridor_errors_toward_its_side() {
        let edges = edges_straight(80, 100, 300);
        let fused = fuse_middle(&edges, &SupplementLines::default(), 320, 240, 10, 10);
        assert!(fused.middle_error > 0.0);
    }

    #[test]
    fn supplement_rows_replace_matching_boundary_rows() {
        let edges = edges_straight(80, 60, 260);
        let mut supp = SupplementLines::default();
        // patch the left boundary inward between y=200 and y=180
        supp.crossroad_left = (0..11).map(|k| Point::new(90, 200 - k * 2)).collect();
        let fused = fuse_middle(&edges, &supp, 320, 240, 10, 10);
        let patched: Vec<_> = fused
            .left_line
            .iter()
            .filter(|p| p.x == 90)
            .collect();
        assert_eq!(patched.len(), 11);
        // middle shifts right over the patched span
        assert!(fused.middle_line.iter().any(|p| p.x == 175));
    }

    #[test]
    fn obstacle_patch_overrides_crossroad_patch() {
        let edges = edges_straight(80, 60, 260);
        let mut supp = SupplementLines::default();
        supp.crossroad_left = vec![Point::new(90, 200)];
        supp.obstacle_left = vec![Point::new(120, 200)];
        let fused = fuse_middle(&edges, &supp, 320, 240, 10, 10);
        assert!(fused.left_line.iter().any(|p| p.x == 120 && p.y == 200));
        assert!(!fused.left_line.iter().any(|p| p.x == 90));
    }

    #[test]
    fn disordered_supplement_degrades_without_rewinding() {
        let edges = edges_straight(80, 60, 260);
        let mut supp = SupplementLines::default();
        // y jumps back down mid-line; the cursor must not follow it
        supp.crossroad_left = vec![
            Point::new(90, 210),
            Point::new(91, 208),
            Point::new(92, 226),
            Point::new(93, 206),
        ];
        let fused = fuse_middle(&edges, &supp, 320, 240, 10, 10);
        // the out-of-order point never lands on an earlier (lower) row
        for (i, p) in fused.left_line.iter().enumerate() {
            if p.x == 92 {
                let prior = &fused.left_line[..i];
                assert!(prior.iter().all(|q| q.x != 93));
            }
        }
        assert_eq!(fused.middle_line.len(), 80);
    }
}
