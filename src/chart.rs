//! The fixed chart every session plays.
//!
//! A chart slot is a "delay index": a block scheduled for slot `i` starts
//! `SLOT_SPACING * i` above the top of the play field and reaches the button
//! row purely through the constant per-tick fall speed. Slot index is therefore
//! a schedule, not a time in seconds.

use crate::lane::Lane;

/// Vertical distance between consecutive chart slots.
pub const SLOT_SPACING: f64 = 80.0;

/// Empty slots before the pattern begins.
pub const LEAD_IN_SLOTS: i64 = 11;
/// Slots covered by the repeating pattern.
pub const PATTERN_SLOTS: i64 = 128;
/// Length of one pattern bar in slots.
pub const PATTERN_PERIOD: i64 = 32;

const LANE1_STEPS: [i64; 6] = [0, 2, 6, 16, 18, 22];
const LANE0_STEPS: [i64; 3] = [3, 17, 19];

/// One block to spawn: which lane and at which slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartEvent {
    pub lane: Lane,
    pub delay_index: u32,
}

impl ChartEvent {
    /// Starting vertical position for this event's block.
    pub fn initial_position(&self) -> f64 {
        -SLOT_SPACING * self.delay_index as f64
    }
}

/// Generate the chart, ordered by delay index.
///
/// Lead-in slots never carry a block: the pattern is only matched once the
/// step counter is non-negative.
pub fn generate() -> Vec<ChartEvent> {
    let (lane0, lane1) = (Lane::ALL[0], Lane::ALL[1]);
    let mut events = Vec::new();
    for i in 0..LEAD_IN_SLOTS + PATTERN_SLOTS {
        let step = i - LEAD_IN_SLOTS;
        if step < 0 {
            continue;
        }
        let phase = step.rem_euclid(PATTERN_PERIOD);
        let delay_index = i as u32;
        if LANE1_STEPS.contains(&phase) {
            events.push(ChartEvent { lane: lane1, delay_index });
        }
        if LANE0_STEPS.contains(&phase) {
            events.push(ChartEvent { lane: lane0, delay_index });
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_is_deterministic() {
        assert_eq!(generate(), generate());
    }

    #[test]
    fn test_chart_enumeration() {
        // Pattern bar: (step, lane) pairs in slot order.
        let bar: [(u32, usize); 9] =
            [(0, 1), (2, 1), (3, 0), (6, 1), (16, 1), (17, 0), (18, 1), (19, 0), (22, 1)];
        let mut expected = Vec::new();
        for bar_idx in 0..4u32 {
            for (step, lane) in bar {
                expected.push((lane, 11 + bar_idx * 32 + step));
            }
        }
        let actual: Vec<(usize, u32)> =
            generate().iter().map(|e| (e.lane.index(), e.delay_index)).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_chart_shape() {
        let chart = generate();
        assert_eq!(chart.len(), 36);
        assert_eq!(chart.iter().filter(|e| e.lane.index() == 1).count(), 24);
        assert_eq!(chart.iter().filter(|e| e.lane.index() == 0).count(), 12);
        assert!(chart.iter().all(|e| e.delay_index >= 11 && e.delay_index < 139));
        assert!(chart.windows(2).all(|w| w[0].delay_index < w[1].delay_index));
    }

    #[test]
    fn test_initial_position_scales_with_slot() {
        let e = ChartEvent { lane: Lane::ALL[1], delay_index: 11 };
        assert_eq!(e.initial_position(), -880.0);
    }
}
