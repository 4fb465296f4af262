//! Browser binding: finds the page's canvas and buttons, wires input, and
//! drives the session from a fixed 60 Hz `setInterval`.
//!
//! Expected markup: a `<canvas id="canvas">` (created if absent), a start
//! button `#start` and four lane buttons `#zero #one #two #three`. Lane
//! buttons are positioned over the button row by this module.
use std::cell::RefCell;

use log::info;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, Window, window};

use crate::config::{GameConfig, Geometry};
use crate::error::{GameError, Result};
use crate::lane::{LANE_COUNT, Lane};
use crate::logging;
use crate::performance_now;
use crate::session::Session;
use crate::sinks::AudioSink;

mod audio;
mod canvas;

pub use audio::HtmlAudio;
pub use canvas::CanvasView;

pub const CANVAS_ID: &str = "canvas";
pub const START_ID: &str = "start";
pub const LANE_BUTTON_IDS: [&str; LANE_COUNT] = ["zero", "one", "two", "three"];

// Press-start events only; a full click waits for release.
const LANE_EVENTS: [&str; 2] = ["mousedown", "touchstart"];

struct WebGame {
    session: Session,
    view: CanvasView,
    audio: HtmlAudio,
}

thread_local! {
    static GAME: RefCell<Option<WebGame>> = RefCell::new(None);
}

fn with_game(f: impl FnOnce(&mut WebGame)) {
    GAME.with(|cell| {
        if let Some(game) = cell.borrow_mut().as_mut() {
            f(game);
        }
    });
}

/// Set up the page and show the idle screen. Calling this again silences and
/// replaces the running game (and its config) but keeps the listeners and loop
/// from the first call.
pub fn launch(config: GameConfig) -> Result<()> {
    config.validate()?;
    let win = window().ok_or(GameError::NoWindow)?;
    let doc = win.document().ok_or(GameError::NoDocument)?;

    let canvas = find_or_create_canvas(&doc, &config.geometry)?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(GameError::ContextUnavailable)?
        .dyn_into()
        .map_err(|_| GameError::ContextUnavailable)?;
    let start: HtmlElement = element(&doc, START_ID)?;
    let mut lane_buttons = Vec::with_capacity(LANE_COUNT);
    for id in LANE_BUTTON_IDS {
        lane_buttons.push(element::<HtmlElement>(&doc, id)?);
    }
    position_lane_buttons(&lane_buttons, &config.geometry)?;

    logging::set_verbose(config.verbose);
    let interval_ms = config.timing.tick_interval_ms();
    let mut view = CanvasView::new(ctx, config.geometry.clone(), start.clone());
    let audio = HtmlAudio::load(&config.audio);
    let session = Session::new(config);
    session.draw_idle(&mut view);

    let previous = GAME.with(|cell| cell.replace(Some(WebGame { session, view, audio })));
    match previous {
        // old elements would keep playing after being dropped
        Some(mut old) => old.audio.stop_all(),
        None => {
            wire_start(&start)?;
            wire_lanes(&lane_buttons)?;
            start_loop(&win, interval_ms)?;
        }
    }
    info!("game ready");
    Ok(())
}

fn element<T: JsCast>(doc: &Document, id: &str) -> Result<T> {
    doc.get_element_by_id(id)
        .ok_or_else(|| GameError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| GameError::MissingElement(id.to_string()))
}

fn find_or_create_canvas(doc: &Document, geometry: &Geometry) -> Result<HtmlCanvasElement> {
    let canvas: HtmlCanvasElement = if doc.get_element_by_id(CANVAS_ID).is_some() {
        element(doc, CANVAS_ID)?
    } else {
        let c: HtmlCanvasElement = doc
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| GameError::MissingElement(CANVAS_ID.to_string()))?;
        c.set_id(CANVAS_ID);
        doc.body().ok_or(GameError::NoDocument)?.append_child(&c)?;
        c
    };
    canvas.set_width(geometry.canvas_width as u32);
    canvas.set_height(geometry.canvas_height as u32);
    Ok(canvas)
}

fn position_lane_buttons(buttons: &[HtmlElement], g: &Geometry) -> Result<()> {
    for (lane, button) in Lane::ALL.into_iter().zip(buttons) {
        let style = button.style();
        style.set_property("left", &format!("{}px", g.lane_left(lane)))?;
        style.set_property("top", &format!("{}px", g.buttons_top))?;
        style.set_property("width", &format!("{}px", g.lane_width))?;
        style.set_property("height", &format!("{}px", g.buttons_height))?;
    }
    Ok(())
}

fn wire_start(start: &HtmlElement) -> Result<()> {
    let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
        evt.prevent_default();
        let now = performance_now();
        with_game(|g| g.session.start(now, &mut g.audio, &mut g.view));
    }) as Box<dyn FnMut(_)>);
    start.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn wire_lanes(buttons: &[HtmlElement]) -> Result<()> {
    for (lane, button) in Lane::ALL.into_iter().zip(buttons) {
        for event in LANE_EVENTS {
            // preventDefault on touchstart suppresses the emulated mousedown,
            // so one physical press yields one tap.
            let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
                evt.prevent_default();
                let now = performance_now();
                with_game(|g| {
                    g.session.tap(lane, now, &mut g.audio);
                });
            }) as Box<dyn FnMut(_)>);
            button.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
    }
    Ok(())
}

fn start_loop(win: &Window, interval_ms: f64) -> Result<()> {
    let tick = Closure::wrap(Box::new(move || {
        let now = performance_now();
        with_game(|g| g.session.tick(now, &mut g.audio, &mut g.view));
    }) as Box<dyn FnMut()>);
    win.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        interval_ms.max(1.0) as i32,
    )?;
    tick.forget();
    Ok(())
}
