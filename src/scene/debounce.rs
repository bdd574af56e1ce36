/// Per-scene confirmation state machine replacing sticky global flags:
/// `Searching(count)` advances on consecutive hits and collapses back to
/// zero on a miss; `Confirmed` holds until an explicit [`Debounce::reset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebounceState {
    Searching(u32),
    Confirmed,
}

#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    threshold: u32,
    state: DebounceState,
}

impl Debounce {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: threshold.max(1),
            state: DebounceState::Searching(0),
        }
    }

    /// Feeds one frame's observation; returns whether the scene is
    /// confirmed after it.
    pub fn observe(&mut self, hit: bool) -> bool {
        match self.state {
            DebounceState::Confirmed => true,
            DebounceState::Searching(n) => {
                if !hit {
                    self.state = DebounceState::Searching(0);
                    return false;
                }
                let n = n + 1;
                if n >= self.threshold {
                    self.state = DebounceState::Confirmed;
                    true
                } else {
                    self.state = DebounceState::Searching(n);
                    false
                }
            }
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.state == DebounceState::Confirmed
    }

    /// Per-run-segment semantics: the owner decides when a confirmed scene
    /// is allowed to re-arm.
    pub fn reset(&mut self) {
        self.state = DebounceState::Searching(0);
    }
}
