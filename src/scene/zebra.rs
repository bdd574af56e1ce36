use crate::image::BinaryView;
use crate::types::Point;

/// Transitions required in each direction before a zebra crossing triggers.
pub const ZEBRA_TRANSITIONS: u32 = 30;

/// Margin kept away from both edges when counting transitions.
const EDGE_MARGIN: i32 = 20;

/// Black/white transition counters accumulated over the frame's rows.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZebraCounter {
    pub black_to_white: u32,
    pub white_to_black: u32,
}

impl ZebraCounter {
    pub fn triggered(&self) -> bool {
        self.black_to_white >= ZEBRA_TRANSITIONS && self.white_to_black >= ZEBRA_TRANSITIONS
    }
}

/// Scans one edge row for zebra stripes: only rows whose image y lies in the
/// middle third of the frame, with a track width inside the (0.6·W, 0.7·W)
/// band, contribute; transitions are counted over columns strictly between
/// `left.x + 20` and `right.x - 20`. Returns whether the accumulated counts
/// reached the trigger.
pub fn scan_row(
    frame: &BinaryView<'_>,
    left: Point,
    right: Point,
    row_width: i32,
    counter: &mut ZebraCounter,
) -> bool {
    let w = frame.width();
    let h = frame.height();
    let y = left.y;
    if y <= h / 3 || y >= h / 3 * 2 {
        return false;
    }
    let band = (row_width as f32) > w as f32 * 0.6 && (row_width as f32) < w as f32 * 0.7;
    if !band {
        return false;
    }

    let x0 = (left.x + EDGE_MARGIN + 1).max(0);
    let x1 = (right.x - EDGE_MARGIN).min(w - 1);
    for x in x0..x1 {
        let here = frame.is_white(x, y);
        let next = frame.is_white(x + 1, y);
        if here && !next {
            counter.white_to_black += 1;
        } else if !here && next {
            counter.black_to_white += 1;
        }
    }
    counter.triggered()
}
