//! Lane identifiers.

use std::fmt;

/// Number of playable lanes.
pub const LANE_COUNT: usize = 4;

/// One of the four vertical tracks blocks fall through (0 = leftmost).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lane(u8);

impl Lane {
    pub const ALL: [Lane; LANE_COUNT] = [Lane(0), Lane(1), Lane(2), Lane(3)];

    /// Returns `None` for indices outside `0..LANE_COUNT`.
    pub const fn new(index: usize) -> Option<Lane> {
        if index < LANE_COUNT {
            Some(Lane(index as u8))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lane {}", self.0)
    }
}
