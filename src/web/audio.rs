//! `AudioSink` backed by `<audio>` elements.

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

use crate::config::AudioAssets;
use crate::sinks::{AudioCue, AudioSink};

/// One `<audio>` element per cue. Cues whose element could not be created
/// stay silent.
pub struct HtmlAudio {
    elements: [Option<HtmlAudioElement>; AudioCue::COUNT],
    // Rejection handler shared by every `play()` promise (autoplay policy,
    // missing file, play interrupted by pause).
    on_rejected: Closure<dyn FnMut(JsValue)>,
}

fn source(assets: &AudioAssets, cue: AudioCue) -> &str {
    match cue {
        AudioCue::Hit => &assets.hit,
        AudioCue::Miss => &assets.miss,
        AudioCue::Background => &assets.background,
        AudioCue::OutroFirst => &assets.outro_first,
        AudioCue::OutroSecond => &assets.outro_second,
    }
}

impl HtmlAudio {
    pub fn load(assets: &AudioAssets) -> Self {
        let elements = AudioCue::ALL.map(|cue| {
            let src = source(assets, cue);
            match HtmlAudioElement::new_with_src(src) {
                Ok(el) => Some(el),
                Err(e) => {
                    warn!("audio {cue:?} ({src}) unavailable: {e:?}");
                    None
                }
            }
        });
        let on_rejected = Closure::wrap(Box::new(|e: JsValue| {
            debug!("audio playback rejected: {e:?}");
        }) as Box<dyn FnMut(JsValue)>);
        Self { elements, on_rejected }
    }

    fn element(&self, cue: AudioCue) -> Option<&HtmlAudioElement> {
        self.elements[cue.index()].as_ref()
    }
}

impl AudioSink for HtmlAudio {
    fn play(&mut self, cue: AudioCue) {
        if let Some(el) = self.element(cue) {
            match el.play() {
                Ok(promise) => {
                    let _ = promise.catch(&self.on_rejected);
                }
                Err(e) => warn!("audio {cue:?} failed to play: {e:?}"),
            }
        }
    }

    fn pause(&mut self, cue: AudioCue) {
        if let Some(el) = self.element(cue) {
            el.pause().ok();
        }
    }

    fn restart(&mut self, cue: AudioCue) {
        if let Some(el) = self.element(cue) {
            el.set_current_time(0.0);
        }
        self.play(cue);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn missing_assets() -> AudioAssets {
        let url = "does-not-exist.wav".to_string();
        AudioAssets {
            hit: url.clone(),
            miss: url.clone(),
            background: url.clone(),
            outro_first: url.clone(),
            outro_second: url,
        }
    }

    #[wasm_bindgen_test]
    fn test_unplayable_cues_are_handled_quietly() {
        let mut audio = HtmlAudio::load(&missing_assets());
        audio.restart(AudioCue::Background);
        audio.restart(AudioCue::Hit);
        audio.stop_all();
        for cue in AudioCue::ALL {
            assert!(audio.element(cue).is_some_and(|el| el.paused()));
        }
    }
}
