//! Hit / miss / through judgment.
//!
//! Pure functions over a block list; counters, feedback and sound are the
//! session's business.

use crate::block::Block;
use crate::config::Geometry;
use crate::lane::Lane;

/// Outcome of judging a tap or a falling block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Judgment {
    /// Tap landed on a block inside the hit window.
    Hit,
    /// Tap with nothing to hit.
    Miss,
    /// Block fell past the hit window untouched.
    Through,
}

/// Vertical band around the button row in which a tap can hit a block.
/// Both bounds are exclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitWindow {
    pub top: f64,
    pub bottom: f64,
}

impl HitWindow {
    pub fn from_geometry(g: &Geometry) -> Self {
        Self { top: g.hit_window_top(), bottom: g.hit_window_bottom() }
    }

    pub fn contains(&self, y: f64) -> bool {
        self.top < y && y < self.bottom
    }

    pub fn is_past(&self, y: f64) -> bool {
        y > self.bottom
    }
}

/// Mark every still-falling block below the window as a through and return
/// the lanes they were in, in block order. Must run before `advance_all`.
pub fn through_pass(blocks: &mut [Block], window: &HitWindow) -> Vec<Lane> {
    let mut lanes = Vec::new();
    for b in blocks.iter_mut() {
        if b.is_falling() && window.is_past(b.y()) && b.mark_through() {
            lanes.push(b.lane());
        }
    }
    lanes
}

pub fn advance_all(blocks: &mut [Block], fall_speed: f64) {
    for b in blocks.iter_mut() {
        b.advance(fall_speed);
    }
}

/// Resolve a tap on `lane`: the first falling block of that lane inside the
/// window becomes a hit, otherwise the tap is a miss and nothing changes.
pub fn resolve_tap(blocks: &mut [Block], lane: Lane, window: &HitWindow) -> Judgment {
    let target = blocks
        .iter_mut()
        .find(|b| b.lane() == lane && b.is_falling() && window.contains(b.y()));
    match target {
        Some(block) => {
            block.mark_hit();
            Judgment::Hit
        }
        None => Judgment::Miss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> HitWindow {
        HitWindow::from_geometry(&Geometry::default())
    }

    #[test]
    fn test_window_bounds_are_exclusive() {
        let w = window();
        assert!(!w.contains(350.0));
        assert!(w.contains(351.0));
        assert!(w.contains(449.9));
        assert!(!w.contains(450.0));
        assert!(!w.is_past(450.0));
        assert!(w.is_past(450.5));
    }

    #[test]
    fn test_tap_hits_first_block_in_window() {
        let lane = Lane::ALL[1];
        let mut blocks = vec![
            Block::new(Lane::ALL[0], 400.0),
            Block::new(lane, 380.0),
            Block::new(lane, 420.0),
        ];
        assert_eq!(resolve_tap(&mut blocks, lane, &window()), Judgment::Hit);
        assert!(blocks[1].is_hit());
        assert!(blocks[2].is_falling());
        assert!(blocks[0].is_falling());
        // second tap takes the next eligible block
        assert_eq!(resolve_tap(&mut blocks, lane, &window()), Judgment::Hit);
        assert!(blocks[2].is_hit());
        assert_eq!(resolve_tap(&mut blocks, lane, &window()), Judgment::Miss);
    }

    #[test]
    fn test_tap_outside_window_misses_without_mutation() {
        let lane = Lane::ALL[0];
        let mut blocks = vec![Block::new(lane, 100.0), Block::new(lane, 460.0)];
        let before = blocks.clone();
        assert_eq!(resolve_tap(&mut blocks, lane, &window()), Judgment::Miss);
        assert_eq!(blocks, before);
    }

    #[test]
    fn test_through_pass_marks_once() {
        let mut blocks = vec![Block::new(Lane::ALL[2], 451.0), Block::new(Lane::ALL[3], 449.0)];
        assert_eq!(through_pass(&mut blocks, &window()), vec![Lane::ALL[2]]);
        assert!(blocks[0].is_missed_through());
        assert!(through_pass(&mut blocks, &window()).is_empty());
    }

    #[test]
    fn test_through_pass_skips_hit_blocks() {
        let mut blocks = vec![Block::new(Lane::ALL[2], 500.0)];
        blocks[0].mark_hit();
        assert!(through_pass(&mut blocks, &window()).is_empty());
        assert!(blocks[0].is_hit());
    }

    #[test]
    fn test_through_uses_position_before_advance() {
        let mut blocks = vec![Block::new(Lane::ALL[0], 449.0)];
        let w = window();
        assert!(through_pass(&mut blocks, &w).is_empty());
        advance_all(&mut blocks, 3.0);
        assert_eq!(blocks[0].y(), 452.0);
        assert!(blocks[0].is_falling());
        assert_eq!(through_pass(&mut blocks, &w).len(), 1);
    }
}
