//! Session controller: lifecycle, scoring, timers and the per-tick pass.
//!
//! A `Session` owns every piece of mutable game state. The host calls
//! `start`, `tap` and `tick` from its own event turns; none of them block and
//! each runs to completion, so there is no locking.
//!
//! Tick order: due timers, then the through pass, then block advance, then
//! drawing. Once play has ended the tick only services timers (outro and
//! results) until the next `start`.

use log::{debug, info};

use crate::block::Block;
use crate::chart::{self, ChartEvent};
use crate::config::GameConfig;
use crate::judge::{self, HitWindow, Judgment};
use crate::lane::Lane;
use crate::sinks::{AudioCue, AudioSink, RenderSink, Score};
use crate::timers::{TimerKind, TimerQueue};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing played yet.
    Idle,
    Playing,
    /// Play stopped, outro cues running, results not shown yet.
    Outro,
    /// Results on screen; `start` begins a new session.
    Finished,
}

/// On-screen label for one judgment, visible until `expires_at_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Feedback {
    kind: Judgment,
    lane: Lane,
    expires_at_ms: f64,
}

pub struct Session {
    config: GameConfig,
    window: HitWindow,
    phase: SessionPhase,
    score: Score,
    blocks: Vec<Block>,
    feedback: Vec<Feedback>,
    timers: TimerQueue,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        let window = HitWindow::from_geometry(&config.geometry);
        Self {
            config,
            window,
            phase: SessionPhase::Idle,
            score: Score::default(),
            blocks: Vec::new(),
            feedback: Vec::new(),
            timers: TimerQueue::new(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == SessionPhase::Playing
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn hit_window(&self) -> HitWindow {
        self.window
    }

    /// Labels currently on screen, oldest first. Hook for embedders and tests
    /// that inspect state without a `RenderSink`.
    pub fn active_feedback(&self) -> impl Iterator<Item = (Judgment, Lane)> + '_ {
        self.feedback.iter().map(|f| (f.kind, f.lane))
    }

    /// Timers not yet fired. Hook for embedders and tests.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Idle screen: empty field with lane guides.
    pub fn draw_idle(&self, view: &mut impl RenderSink) {
        view.clear_frame();
        view.draw_lane_guides();
    }

    /// Begin a session with the built-in chart. Anything left from a previous
    /// session, including its pending timers and any cue still sounding, is
    /// discarded.
    pub fn start(&mut self, now_ms: f64, audio: &mut impl AudioSink, view: &mut impl RenderSink) {
        self.start_with_chart(&chart::generate(), now_ms, audio, view);
    }

    pub fn start_with_chart(
        &mut self,
        chart: &[ChartEvent],
        now_ms: f64,
        audio: &mut impl AudioSink,
        view: &mut impl RenderSink,
    ) {
        self.timers.clear();
        self.feedback.clear();
        self.score = Score::default();
        self.blocks = chart.iter().map(Block::from_chart).collect();
        self.phase = SessionPhase::Playing;

        let t = &self.config.timing;
        let end = now_ms + t.session_length_ms;
        self.timers.schedule(now_ms + t.cleanup_after_ms, TimerKind::Cleanup);
        self.timers.schedule(end, TimerKind::End);
        self.timers.schedule(end + t.outro_first_ms, TimerKind::OutroPause);
        self.timers
            .schedule(end + t.outro_first_ms + t.outro_gap_ms, TimerKind::OutroFinale);

        audio.stop_all();
        audio.restart(AudioCue::Background);
        view.set_start_control_visible(false);
        info!("session started with {} blocks", self.blocks.len());
    }

    /// Add a block to a running session's live set. Hook for embedders and
    /// tests that need a block at an exact position; the chart only produces
    /// multiples of the slot spacing.
    pub fn spawn_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Judge a lane activation. Returns `None` when no session is playing.
    pub fn tap(&mut self, lane: Lane, now_ms: f64, audio: &mut impl AudioSink) -> Option<Judgment> {
        if !self.is_playing() {
            return None;
        }
        let judgment = judge::resolve_tap(&mut self.blocks, lane, &self.window);
        self.record(judgment, lane, now_ms);
        match judgment {
            Judgment::Hit => audio.restart(AudioCue::Hit),
            _ => audio.restart(AudioCue::Miss),
        }
        debug!("tap on {lane}: {judgment:?}");
        Some(judgment)
    }

    pub fn tick(&mut self, now_ms: f64, audio: &mut impl AudioSink, view: &mut impl RenderSink) {
        while let Some(timer) = self.timers.pop_due(now_ms) {
            self.fire(timer.kind, audio, view);
        }
        if !self.is_playing() {
            return;
        }

        for lane in judge::through_pass(&mut self.blocks, &self.window) {
            self.record(Judgment::Through, lane, now_ms);
            debug!("through on {lane}");
        }
        judge::advance_all(&mut self.blocks, self.config.timing.fall_speed);
        self.feedback.retain(|f| f.expires_at_ms > now_ms);

        self.render(view);
    }

    fn record(&mut self, kind: Judgment, lane: Lane, now_ms: f64) {
        self.score.record(kind);
        self.feedback.push(Feedback {
            kind,
            lane,
            expires_at_ms: now_ms + self.config.timing.feedback_ms,
        });
    }

    fn fire(&mut self, kind: TimerKind, audio: &mut impl AudioSink, view: &mut impl RenderSink) {
        match kind {
            TimerKind::Cleanup => {
                let top = self.config.timing.cleanup_top;
                let bottom = self.config.geometry.canvas_height;
                let before = self.blocks.len();
                self.blocks.retain(|b| b.y() > top && b.y() < bottom);
                info!("cleanup kept {} of {} blocks", self.blocks.len(), before);
            }
            TimerKind::End => {
                self.phase = SessionPhase::Outro;
                audio.pause(AudioCue::Background);
                audio.restart(AudioCue::OutroFirst);
                info!("session ended");
            }
            TimerKind::OutroPause => audio.pause(AudioCue::OutroFirst),
            TimerKind::OutroFinale => {
                audio.restart(AudioCue::OutroSecond);
                self.phase = SessionPhase::Finished;
                view.draw_results(&self.score);
                view.set_start_control_visible(true);
                info!(
                    "results: hit {} through {} miss {}",
                    self.score.hit, self.score.through, self.score.miss
                );
            }
        }
    }

    fn render(&self, view: &mut impl RenderSink) {
        view.clear_frame();
        view.draw_lane_guides();
        for b in &self.blocks {
            view.draw_block(b.lane(), b.y());
        }
        for kind in [Judgment::Hit, Judgment::Through, Judgment::Miss] {
            for f in self.feedback.iter().filter(|f| f.kind == kind) {
                view.draw_feedback_label(f.kind, f.lane);
            }
        }
        view.draw_score_line(&self.score);
    }
}
