//! `Host` backed by the live DOM and `setTimeout`.

use crate::audio::CueBank;
use crate::core::gallery::slider_offset_px;
use crate::core::{Cue, Host, Label, MessageId, Site, Surface, Tab, Task, Theme};
use crate::{dom, surface};
use fnv::FnvHashMap;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedApp = Rc<RefCell<App>>;

pub struct App {
    pub site: Site<StdRng>,
    pub host: WebHost,
    started: Instant,
}

impl App {
    pub fn new_shared(site: Site<StdRng>, document: web::Document, started: Instant) -> SharedApp {
        Rc::new_cyclic(|weak| {
            RefCell::new(App {
                site,
                host: WebHost::new(document, weak.clone()),
                started,
            })
        })
    }
}

/// Borrow the app and hand `f` the site, host and current page time.
/// A nested dispatch (an event fired synchronously from inside a handler)
/// is dropped rather than panicking on the `RefCell`.
pub fn dispatch(app: &SharedApp, f: impl FnOnce(&mut Site<StdRng>, &mut WebHost, Duration)) {
    let Ok(mut guard) = app.try_borrow_mut() else {
        log::warn!("[init] nested dispatch skipped");
        return;
    };
    let App {
        site,
        host,
        started,
    } = &mut *guard;
    let now = started.elapsed();
    f(site, host, now);
}

pub struct WebHost {
    document: web::Document,
    app: Weak<RefCell<App>>,
    cues: CueBank,
    messages: FnvHashMap<MessageId, web::Element>,
    typewriter: Option<web::Element>,
}

impl WebHost {
    fn new(document: web::Document, app: Weak<RefCell<App>>) -> Self {
        Self {
            document,
            app,
            cues: CueBank::new(),
            messages: FnvHashMap::default(),
            typewriter: None,
        }
    }

    pub fn set_typewriter_target(&mut self, el: web::Element) {
        self.typewriter = Some(el);
    }
}

impl Host for WebHost {
    fn schedule(&mut self, delay: Duration, task: Task) {
        let app = self.app.clone();
        let ms = delay.as_millis().min(i32::MAX as u128) as i32;
        dom::after(ms, move || {
            if let Some(app) = app.upgrade() {
                dispatch(&app, |site, host, _| site.run(host, task));
            }
        });
    }

    fn set_visible(&mut self, surface: Surface, visible: bool) {
        surface::set_visible(&self.document, surface, visible);
    }

    fn fade_out(&mut self, surface: Surface) {
        surface::fade_out(&self.document, surface);
    }

    fn play_cue(&mut self, cue: Cue) {
        self.cues.play(cue);
    }

    fn set_ambient(&mut self, playing: bool) {
        self.cues.set_ambient(playing);
    }

    fn set_jumpscare_image(&mut self, url: &str) {
        if let Some(img) = self.document.get_element_by_id("jumpscare-image") {
            _ = img.set_attribute("src", url);
        }
    }

    fn set_label(&mut self, label: Label, text: &str) {
        match label {
            Label::SoundIndicator => {
                if let Some(el) = dom::query(&self.document, ".sound-indicator") {
                    el.set_text_content(Some(text));
                }
            }
            Label::ThemeIndicator => {
                if let Some(el) = dom::query(&self.document, ".theme-indicator") {
                    el.set_text_content(Some(text));
                }
            }
            Label::ThemeIcon => {
                if let Some(el) = self.document.get_element_by_id("theme-toggle") {
                    el.set_inner_html(text);
                }
            }
        }
    }

    fn apply_theme(&mut self, theme: Theme) {
        if let Some(body) = self.document.body() {
            let cl = body.class_list();
            _ = cl.remove_1(theme.toggled().body_class());
            _ = cl.add_1(theme.body_class());
        }
    }

    fn show_slide(&mut self, index: usize) {
        let width = dom::query(&self.document, ".gallery-slide")
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            .map(|el| el.offset_width() as f64)
            .unwrap_or(0.0);
        if let Some(slider) = dom::query(&self.document, ".gallery-slider") {
            let offset = slider_offset_px(index, width);
            dom::set_style(&slider, "transform", &format!("translateX({offset}px)"));
        }
    }

    fn show_tab(&mut self, tab: Tab) {
        for button in dom::query_all(&self.document, ".tab-button") {
            let cl = button.class_list();
            if button.get_attribute("data-tab").as_deref() == Some(tab.as_str()) {
                _ = cl.add_1("active");
            } else {
                _ = cl.remove_1("active");
            }
        }
        let content_id = tab.content_id();
        for content in dom::query_all(&self.document, ".tab-content") {
            let cl = content.class_list();
            if content.id() == content_id {
                _ = cl.remove_1("hidden");
            } else {
                _ = cl.add_1("hidden");
            }
        }
    }

    fn append_typed(&mut self, ch: char) {
        if let Some(el) = &self.typewriter {
            let mut text = el.text_content().unwrap_or_default();
            text.push(ch);
            el.set_text_content(Some(&text));
        }
    }

    fn spawn_message(&mut self, id: MessageId, text: &str) {
        let (Ok(el), Some(body)) = (self.document.create_element("div"), self.document.body())
        else {
            return;
        };
        _ = el.class_list().add_1("idle-message");
        el.set_text_content(Some(text));
        _ = body.append_child(&el);
        self.messages.insert(id, el);
    }

    fn set_message_shown(&mut self, id: MessageId, shown: bool) {
        if let Some(el) = self.messages.get(&id) {
            let cl = el.class_list();
            _ = if shown { cl.add_1("show") } else { cl.remove_1("show") };
        }
    }

    fn remove_message(&mut self, id: MessageId) {
        if let Some(el) = self.messages.remove(&id) {
            el.remove();
        }
    }
}
