use super::{find_start_point, RawTrace, StopReason, TracerOptions};
use crate::image::BinaryView;
use crate::types::{Point, Side};
use log::debug;

// Facing directions: up, right, down, left.
const DIR_FRONT: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
// Front-diagonal toward the track interior, indexed by facing.
const DIR_FRONT_LEFT: [(i32, i32); 4] = [(-1, -1), (1, -1), (1, 1), (-1, 1)];
const DIR_FRONT_RIGHT: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

/// Hard cap on steps per cursor.
pub const STEP_MAX: usize = 1500;

const TURN_LIMIT: u32 = 3;

struct Cursor {
    pos: Point,
    dir: usize,
    turn: u32,
    step: usize,
    side: Side,
}

impl Cursor {
    fn new(pos: Point, side: Side) -> Self {
        Self {
            pos,
            dir: 0, // facing up
            turn: 0,
            step: 0,
            side,
        }
    }

    #[inline]
    fn diag(&self) -> (i32, i32) {
        match self.side {
            Side::Left => DIR_FRONT_LEFT[self.dir],
            Side::Right => DIR_FRONT_RIGHT[self.dir],
        }
    }

    /// 90° rotation toward the track interior (right for the left cursor).
    #[inline]
    fn rotate_interior(&mut self) {
        self.dir = match self.side {
            Side::Left => (self.dir + 1) % 4,
            Side::Right => (self.dir + 3) % 4,
        };
    }

    /// 90° rotation away from the interior.
    #[inline]
    fn rotate_exterior(&mut self) {
        self.dir = match self.side {
            Side::Left => (self.dir + 3) % 4,
            Side::Right => (self.dir + 1) % 4,
        };
    }

    /// One maze step: turn on a blocked front, advance on a clear front with
    /// the interior diagonal blocked, or cut the diagonal otherwise.
    fn step(&mut self, frame: &BinaryView<'_>, path: &mut Vec<Point>) {
        let front = DIR_FRONT[self.dir];
        let diag = self.diag();
        let front_white = frame.is_white(self.pos.x + front.0, self.pos.y + front.1);
        let diag_white = frame.is_white(self.pos.x + diag.0, self.pos.y + diag.1);

        if !front_white {
            self.rotate_interior();
            self.turn += 1;
        } else if !diag_white {
            self.pos.x += front.0;
            self.pos.y += front.1;
            path.push(self.pos);
            self.step += 1;
            self.turn = 0;
        } else {
            self.pos.x += diag.0;
            self.pos.y += diag.1;
            self.rotate_exterior();
            path.push(self.pos);
            self.step += 1;
            self.turn = 0;
        }
    }

    fn in_interior(&self, frame: &BinaryView<'_>) -> bool {
        self.pos.x > 0
            && self.pos.x < frame.width() - 1
            && self.pos.y > 0
            && self.pos.y < frame.height() - 1
    }
}

/// Runs the start scan (expanding the window on failure) and the dual-cursor
/// walk, producing the raw left/right boundary paths. `None` means no start
/// point was found up to half the frame height; the caller skips the frame.
pub fn trace_boundaries(frame: &BinaryView<'_>, opts: &TracerOptions) -> Option<RawTrace> {
    let h = frame.height();
    let mut scan_start = opts.start_line;
    let (l_start, r_start) = loop {
        match find_start_point(frame, scan_start, opts.scan_height) {
            Some(pair) => break pair,
            None => {
                scan_start += 5;
                if scan_start > h / 2 {
                    debug!("no start point up to y={scan_start}, frame abandoned");
                    return None;
                }
            }
        }
    };

    let mut left = vec![l_start];
    let mut right = vec![r_start];
    let mut l_cursor = Cursor::new(l_start, Side::Left);
    let mut r_cursor = Cursor::new(r_start, Side::Right);

    let stop = loop {
        if !l_cursor.in_interior(frame) || !r_cursor.in_interior(frame) {
            break StopReason::OutOfBounds;
        }
        l_cursor.step(frame, &mut left);
        r_cursor.step(frame, &mut right);

        if l_cursor.turn > TURN_LIMIT || r_cursor.turn > TURN_LIMIT {
            break StopReason::TurnLimit;
        }
        if l_cursor.pos == r_cursor.pos {
            break StopReason::Converged;
        }
        if l_cursor.step > STEP_MAX || r_cursor.step > STEP_MAX {
            break StopReason::StepCap;
        }
    };
    debug!(
        "trace stop={stop:?} left={} right={} steps",
        left.len(),
        right.len()
    );
    Some(RawTrace { left, right, stop })
}
