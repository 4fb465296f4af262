//! Collaborator interfaces the session drives: drawing and sound.
//!
//! Input needs no trait; whatever owns the session calls `Session::tap`.

use std::fmt;

use crate::judge::Judgment;
use crate::lane::Lane;

/// Final counters shown on the result screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub hit: u32,
    pub through: u32,
    pub miss: u32,
}

impl Score {
    pub fn record(&mut self, judgment: Judgment) {
        match judgment {
            Judgment::Hit => self.hit += 1,
            Judgment::Miss => self.miss += 1,
            Judgment::Through => self.through += 1,
        }
    }
}

/// Three lines: hit, through, miss.
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hit: {}\nThrough: {}\nMiss: {}", self.hit, self.through, self.miss)
    }
}

pub trait RenderSink {
    fn clear_frame(&mut self);
    fn draw_lane_guides(&mut self);
    fn draw_block(&mut self, lane: Lane, y: f64);
    fn draw_feedback_label(&mut self, kind: Judgment, lane: Lane);
    fn draw_score_line(&mut self, score: &Score);
    fn draw_results(&mut self, score: &Score);
    fn set_start_control_visible(&mut self, visible: bool);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Hit,
    Miss,
    Background,
    OutroFirst,
    OutroSecond,
}

impl AudioCue {
    pub const COUNT: usize = 5;

    pub const ALL: [AudioCue; Self::COUNT] = [
        AudioCue::Hit,
        AudioCue::Miss,
        AudioCue::Background,
        AudioCue::OutroFirst,
        AudioCue::OutroSecond,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Best-effort playback. Implementations swallow their own failures.
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
    fn pause(&mut self, cue: AudioCue);
    /// Rewind to the start, then play.
    fn restart(&mut self, cue: AudioCue);

    /// Pause every cue.
    fn stop_all(&mut self) {
        for cue in AudioCue::ALL {
            self.pause(cue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_text_has_three_lines() {
        let mut s = Score::default();
        s.record(Judgment::Hit);
        s.record(Judgment::Hit);
        s.record(Judgment::Through);
        s.record(Judgment::Miss);
        assert_eq!(s.to_string(), "Hit: 2\nThrough: 1\nMiss: 1");
        assert_eq!(s.to_string().lines().count(), 3);
    }

    #[test]
    fn test_cue_indices_are_dense() {
        for (i, cue) in AudioCue::ALL.iter().enumerate() {
            assert_eq!(cue.index(), i);
        }
    }
}
