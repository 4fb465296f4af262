//! Session timers as data.
//!
//! Each timer is a `(deadline, kind)` entry owned by the session and fired by
//! the tick, so restarting a session can drop every pending timer at once.

/// What happens when a session timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// Prune blocks outside the visible range.
    Cleanup,
    /// Stop play, stop the music, start the first outro cue.
    End,
    /// Cut the first outro cue.
    OutroPause,
    /// Play the second outro cue and reveal the results.
    OutroFinale,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timer {
    pub deadline_ms: f64,
    pub kind: TimerKind,
}

/// Timers sorted by deadline; equal deadlines keep scheduling order.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    timers: Vec<Timer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self { timers: Vec::new() }
    }

    pub fn schedule(&mut self, deadline_ms: f64, kind: TimerKind) {
        let pos = self.timers.partition_point(|t| t.deadline_ms <= deadline_ms);
        self.timers.insert(pos, Timer { deadline_ms, kind });
    }

    /// Remove and return the earliest timer if it is due at `now_ms`.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<Timer> {
        match self.timers.first() {
            Some(t) if t.deadline_ms <= now_ms => Some(self.timers.remove(0)),
            _ => None,
        }
    }

    pub fn peek(&self) -> Option<&Timer> {
        self.timers.first()
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }
}
