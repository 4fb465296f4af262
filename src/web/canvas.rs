//! Canvas `RenderSink` and start-button visibility.

use web_sys::{CanvasRenderingContext2d, HtmlElement};

use crate::config::Geometry;
use crate::judge::Judgment;
use crate::lane::Lane;
use crate::sinks::{RenderSink, Score};

const FONT: &str = "bold 20px 'MS Gothic', 'Fira Code', monospace";
// Drawn bar is thinner than the hit box: inset from its top and bottom.
const BLOCK_INSET: f64 = 20.0;
const RESULT_HEADER_Y: f64 = 160.0;
const RESULT_FIRST_ROW_Y: f64 = 200.0;
const RESULT_ROW_STEP: f64 = 30.0;

/// 2d canvas drawing plus the start button, which the session shows and
/// hides through the same sink.
pub struct CanvasView {
    ctx: CanvasRenderingContext2d,
    geometry: Geometry,
    start_control: HtmlElement,
}

impl CanvasView {
    pub fn new(ctx: CanvasRenderingContext2d, geometry: Geometry, start_control: HtmlElement) -> Self {
        ctx.set_font(FONT);
        ctx.set_text_baseline("top");
        Self { ctx, geometry, start_control }
    }

    fn text_width(&self, text: &str) -> f64 {
        self.ctx.measure_text(text).map(|m| m.width()).unwrap_or(0.0)
    }
}

fn label(kind: Judgment) -> (&'static str, &'static str, f64) {
    // text, colour, offset below the button row
    match kind {
        Judgment::Hit => ("HIT", "#0ff", 10.0),
        Judgment::Through => ("Thru", "#ff0", 30.0),
        Judgment::Miss => ("Miss", "#f0f", 50.0),
    }
}

impl RenderSink for CanvasView {
    fn clear_frame(&mut self) {
        self.ctx.set_fill_style_str("#000");
        self.ctx
            .fill_rect(0.0, 0.0, self.geometry.canvas_width, self.geometry.canvas_height);
    }

    fn draw_lane_guides(&mut self) {
        self.ctx.set_stroke_style_str("#ccc");
        for lane in Lane::ALL {
            self.ctx.stroke_rect(
                self.geometry.lane_left(lane),
                0.0,
                self.geometry.lane_width,
                self.geometry.canvas_height,
            );
        }
    }

    fn draw_block(&mut self, lane: Lane, y: f64) {
        self.ctx.set_fill_style_str("#f00");
        self.ctx.fill_rect(
            self.geometry.lane_left(lane),
            y + BLOCK_INSET,
            self.geometry.lane_width,
            self.geometry.block_height - 2.0 * BLOCK_INSET,
        );
    }

    fn draw_feedback_label(&mut self, kind: Judgment, lane: Lane) {
        let (text, colour, offset) = label(kind);
        let x = self.geometry.lane_left(lane) + (self.geometry.lane_width - self.text_width(text)) / 2.0;
        self.ctx.set_fill_style_str(colour);
        self.ctx
            .fill_text(text, x, self.geometry.hit_window_bottom() + offset)
            .ok();
    }

    fn draw_score_line(&mut self, score: &Score) {
        self.ctx.set_fill_style_str("#fff");
        let line = format!(
            "Hit  {}    Through  {}    Miss  {}",
            score.hit, score.through, score.miss
        );
        self.ctx.fill_text(&line, 10.0, 10.0).ok();
    }

    fn draw_results(&mut self, score: &Score) {
        let text = score.to_string();
        let rows: Vec<&str> = text.lines().collect();
        if rows.len() < 3 {
            return;
        }
        let width = self.geometry.canvas_width;

        let header = "Results";
        self.ctx.set_fill_style_str("#fff");
        self.ctx
            .fill_text(header, (width - self.text_width(header)) / 2.0, RESULT_HEADER_Y)
            .ok();

        // rows share the through line's x so they left-align
        let x = (width - self.text_width(rows[1])) / 2.0;
        for (i, (row, colour)) in rows.iter().zip(["#0ff", "#ff0", "#f0f"]).enumerate() {
            self.ctx.set_fill_style_str(colour);
            self.ctx
                .fill_text(row, x, RESULT_FIRST_ROW_Y + i as f64 * RESULT_ROW_STEP)
                .ok();
        }
    }

    fn set_start_control_visible(&mut self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        self.start_control.style().set_property("display", display).ok();
    }
}
