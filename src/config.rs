//! Game configuration: play-field geometry, session timings and audio assets.
//!
//! `GameConfig::default()` is the tuning the game ships with. With the `serde`
//! feature every section derives `Serialize`/`Deserialize` and missing fields
//! fall back to their defaults, so a partial JSON object only overrides what it
//! names.

use crate::error::{GameError, Result};
use crate::lane::{LANE_COUNT, Lane};

// --- Play field --------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Geometry {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Left edge of each lane.
    pub lane_lefts: [f64; LANE_COUNT],
    pub lane_width: f64,
    /// Top of the lane button row.
    pub buttons_top: f64,
    pub buttons_height: f64,
    /// Height of a block's hit box.
    pub block_height: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            canvas_width: 360.0,
            canvas_height: 540.0,
            lane_lefts: [10.0, 100.0, 190.0, 280.0],
            lane_width: 70.0,
            buttons_top: 400.0,
            buttons_height: 50.0,
            block_height: 50.0,
        }
    }
}

impl Geometry {
    pub fn lane_left(&self, lane: Lane) -> f64 {
        self.lane_lefts[lane.index()]
    }

    /// Upper bound of the hit window: a block must be strictly below this.
    pub fn hit_window_top(&self) -> f64 {
        self.buttons_top - self.block_height
    }

    /// Lower bound of the hit window; a falling block past it is a through.
    pub fn hit_window_bottom(&self) -> f64 {
        self.buttons_top + self.buttons_height
    }
}

// --- Timings -----------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Timing {
    pub ticks_per_second: u32,
    /// Distance every block falls per tick.
    pub fall_speed: f64,
    /// Since session start: prune blocks that can no longer matter.
    pub cleanup_after_ms: f64,
    /// Since session start: stop play and begin the outro.
    pub session_length_ms: f64,
    /// How long the first outro cue plays before it is paused.
    pub outro_first_ms: f64,
    /// Silence between the two outro cues.
    pub outro_gap_ms: f64,
    /// Lifetime of each on-screen Hit / Through / Miss label.
    pub feedback_ms: f64,
    /// Blocks at or above this position are dropped by the cleanup sweep.
    pub cleanup_top: f64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            ticks_per_second: 60,
            fall_speed: 3.0,
            cleanup_after_ms: 100_000.0,
            session_length_ms: 103_000.0,
            outro_first_ms: 2_500.0,
            outro_gap_ms: 300.0,
            feedback_ms: 500.0,
            cleanup_top: -10.0,
        }
    }
}

impl Timing {
    pub fn tick_interval_ms(&self) -> f64 {
        1000.0 / self.ticks_per_second as f64
    }
}

// --- Audio assets ------------------------------------------------------------

/// Where each sound cue is loaded from. Hit and miss share one sample by
/// default; point `miss` elsewhere to tell them apart.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AudioAssets {
    pub hit: String,
    pub miss: String,
    pub background: String,
    pub outro_first: String,
    pub outro_second: String,
}

impl Default for AudioAssets {
    fn default() -> Self {
        Self {
            hit: "Taiko1Note.wav".into(),
            miss: "Taiko1Note.wav".into(),
            background: "Michiyuki_NoTaiko.wav".into(),
            outro_first: "./drumroll1.mp3".into(),
            outro_second: "./drumroll2.mp3".into(),
        }
    }
}

// --- Root --------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub geometry: Geometry,
    pub timing: Timing,
    pub audio: AudioAssets,
    /// Emit per-tap judgments to the console.
    pub verbose: bool,
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        let g = &self.geometry;
        let t = &self.timing;
        let finite = [
            g.canvas_width,
            g.canvas_height,
            g.lane_width,
            g.buttons_top,
            g.buttons_height,
            g.block_height,
            t.fall_speed,
            t.cleanup_after_ms,
            t.session_length_ms,
            t.outro_first_ms,
            t.outro_gap_ms,
            t.feedback_ms,
            t.cleanup_top,
        ];
        if finite.iter().chain(g.lane_lefts.iter()).any(|v| !v.is_finite()) {
            return Err(invalid("all numeric values must be finite"));
        }
        if g.canvas_width <= 0.0 || g.canvas_height <= 0.0 {
            return Err(invalid("canvas size must be positive"));
        }
        if g.lane_width <= 0.0 {
            return Err(invalid("lane width must be positive"));
        }
        if g.buttons_height <= 0.0 || g.block_height <= 0.0 {
            return Err(invalid("button and block heights must be positive"));
        }
        if t.ticks_per_second == 0 {
            return Err(invalid("tick rate must be positive"));
        }
        if t.fall_speed <= 0.0 {
            return Err(invalid("fall speed must be positive"));
        }
        if t.cleanup_after_ms < 0.0 || t.cleanup_after_ms > t.session_length_ms {
            return Err(invalid("cleanup must happen between start and session end"));
        }
        if t.outro_first_ms < 0.0 || t.outro_gap_ms < 0.0 || t.feedback_ms < 0.0 {
            return Err(invalid("durations must not be negative"));
        }
        Ok(())
    }

    /// Parse and validate a (possibly partial) JSON configuration.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: GameConfig =
            serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

fn invalid(msg: &str) -> GameError {
    GameError::InvalidConfig(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hit_window() {
        let g = Geometry::default();
        assert_eq!(g.hit_window_top(), 350.0);
        assert_eq!(g.hit_window_bottom(), 450.0);
        assert_eq!(g.lane_left(Lane::ALL[2]), 190.0);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
        assert!((Timing::default().tick_interval_ms() - 16.666_666).abs() < 1e-3);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut cfg = GameConfig::default();
        cfg.timing.fall_speed = 0.0;
        assert!(matches!(cfg.validate(), Err(GameError::InvalidConfig(_))));

        let mut cfg = GameConfig::default();
        cfg.timing.cleanup_after_ms = 200_000.0;
        assert!(cfg.validate().is_err());

        let mut cfg = GameConfig::default();
        cfg.geometry.lane_lefts[1] = f64::NAN;
        assert!(cfg.validate().is_err());

        let mut cfg = GameConfig::default();
        cfg.timing.ticks_per_second = 0;
        assert!(cfg.validate().is_err());
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let cfg = GameConfig::from_json(r#"{ "timing": { "fall_speed": 4.5 }, "audio": { "miss": "miss.wav" } }"#)
            .unwrap();
        assert_eq!(cfg.timing.fall_speed, 4.5);
        assert_eq!(cfg.timing.ticks_per_second, 60);
        assert_eq!(cfg.audio.miss, "miss.wav");
        assert_eq!(cfg.audio.hit, "Taiko1Note.wav");
        assert_eq!(cfg.geometry, Geometry::default());
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn test_json_errors_are_config_errors() {
        assert!(matches!(GameConfig::from_json("{ nope"), Err(GameError::InvalidConfig(_))));
        assert!(GameConfig::from_json(r#"{ "timing": { "fall_speed": -1.0 } }"#).is_err());
    }
}
