use crate::core::constants::AMBIENT_VOLUME;
use crate::core::Cue;
use fnv::FnvHashMap;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One preloaded `<audio>` element per cue. Playback never reports failure.
pub struct CueBank {
    elements: FnvHashMap<Cue, web::HtmlAudioElement>,
}

impl CueBank {
    pub fn new() -> Self {
        let mut elements = FnvHashMap::default();
        for cue in Cue::ALL {
            match web::HtmlAudioElement::new_with_src(cue.url()) {
                Ok(a) => {
                    a.set_preload("auto");
                    if cue == Cue::Ambient {
                        a.set_loop(true);
                        a.set_volume(AMBIENT_VOLUME);
                    }
                    elements.insert(cue, a);
                }
                Err(e) => log::warn!("[sound] {:?} audio element error: {:?}", cue, e),
            }
        }
        Self { elements }
    }

    /// Play a fresh copy so overlapping cues don't cut each other off.
    pub fn play(&self, cue: Cue) {
        let Some(a) = self.elements.get(&cue) else {
            return;
        };
        let copy = a
            .clone_node()
            .ok()
            .and_then(|n| n.dyn_into::<web::HtmlAudioElement>().ok());
        if let Some(copy) = copy {
            _ = copy.play();
        }
    }

    pub fn set_ambient(&self, playing: bool) {
        if let Some(a) = self.elements.get(&Cue::Ambient) {
            if playing {
                _ = a.play();
            } else {
                _ = a.pause();
            }
        }
    }
}
