use std::time::{Duration, Instant};

/// One debounce timeline: idle, or armed with a deadline. Arming is
/// last-write-wins; a newer event replaces any pending deadline, so only
/// the most recently scheduled fire can happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Debounce {
    #[default]
    Idle,
    Armed {
        deadline: Instant,
    },
}

impl Debounce {
    pub fn arm(&mut self, now: Instant, quiet: Duration) {
        *self = Debounce::Armed {
            deadline: now + quiet,
        };
    }

    pub fn cancel(&mut self) {
        *self = Debounce::Idle;
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, Debounce::Armed { .. })
    }

    /// Armed with a deadline still in the future.
    pub fn is_active(&self, now: Instant) -> bool {
        matches!(self, Debounce::Armed { deadline } if *deadline > now)
    }

    /// Returns true exactly once when the deadline has been reached,
    /// resetting to idle. A cancelled timeline never fires.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self {
            Debounce::Armed { deadline } if *deadline <= now => {
                *self = Debounce::Idle;
                true
            }
            _ => false,
        }
    }
}
