//! Falling blocks.

use crate::chart::ChartEvent;
use crate::lane::Lane;

/// Judgment state of a block. `Hit` and `MissedThrough` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockState {
    Falling,
    Hit,
    MissedThrough,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    lane: Lane,
    y: f64,
    state: BlockState,
}

impl Block {
    pub fn new(lane: Lane, y: f64) -> Self {
        Self { lane, y, state: BlockState::Falling }
    }

    pub fn from_chart(event: &ChartEvent) -> Self {
        Self::new(event.lane, event.initial_position())
    }

    pub fn lane(&self) -> Lane {
        self.lane
    }

    /// Current vertical position (top of the hit box).
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn state(&self) -> BlockState {
        self.state
    }

    pub fn is_falling(&self) -> bool {
        self.state == BlockState::Falling
    }

    pub fn is_hit(&self) -> bool {
        self.state == BlockState::Hit
    }

    pub fn is_missed_through(&self) -> bool {
        self.state == BlockState::MissedThrough
    }

    /// Transition to `Hit`. Returns false (and changes nothing) if the block
    /// was already judged.
    pub fn mark_hit(&mut self) -> bool {
        self.judge(BlockState::Hit)
    }

    /// Transition to `MissedThrough`. Returns false if already judged.
    pub fn mark_through(&mut self) -> bool {
        self.judge(BlockState::MissedThrough)
    }

    fn judge(&mut self, to: BlockState) -> bool {
        if self.state != BlockState::Falling {
            return false;
        }
        self.state = to;
        true
    }

    /// Judged blocks keep falling until the cleanup sweep drops them.
    pub fn advance(&mut self, distance: f64) {
        self.y += distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_judgment_is_terminal() {
        let mut b = Block::new(Lane::ALL[0], 0.0);
        assert!(b.is_falling());
        assert!(b.mark_hit());
        assert!(!b.mark_through());
        assert!(!b.mark_hit());
        assert!(b.is_hit() && !b.is_missed_through());

        let mut b = Block::new(Lane::ALL[0], 0.0);
        assert!(b.mark_through());
        assert!(!b.mark_hit());
        assert_eq!(b.state(), BlockState::MissedThrough);
    }

    #[test]
    fn test_judged_block_keeps_falling() {
        let mut b = Block::new(Lane::ALL[3], 10.0);
        b.mark_hit();
        b.advance(3.0);
        assert_eq!(b.y(), 13.0);
    }

    #[test]
    fn test_from_chart() {
        let b = Block::from_chart(&ChartEvent { lane: Lane::ALL[1], delay_index: 2 });
        assert_eq!(b.y(), -160.0);
        assert_eq!(b.lane(), Lane::ALL[1]);
    }
}
