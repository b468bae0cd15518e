use crate::dom;
use crate::host::{dispatch, SharedApp};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_jumpscare_elements(app: &SharedApp, document: &web::Document) {
    for el in dom::query_all(document, "[data-jumpscare]") {
        let intensity = el.get_attribute("data-jumpscare").unwrap_or_default();
        let app = app.clone();
        dom::listen(&el, "click", move |_: web::MouseEvent| {
            dispatch(&app, |site, host, _| {
                site.click_jumpscare_element(host, &intensity)
            });
        });
    }
}

pub fn wire_easter_eggs(app: &SharedApp, document: &web::Document) {
    for egg in dom::query_all(document, ".easter-egg, [data-trigger=\"hidden\"]") {
        let app = app.clone();
        dom::listen(&egg, "click", move |_: web::MouseEvent| {
            dispatch(&app, |site, host, _| site.click_easter_egg(host));
        });
    }
}

pub fn wire_download_buttons(app: &SharedApp, document: &web::Document) {
    for button in dom::query_all(document, ".download-button") {
        let app = app.clone();
        dom::listen(&button, "mouseenter", move |_: web::MouseEvent| {
            dispatch(&app, |site, host, _| site.hover_download(host));
        });
    }
}

/// Re-type `#typewriter` the first time half of it scrolls into view.
pub fn wire_typewriter(app: &SharedApp, document: &web::Document) {
    let Some(el) = document.get_element_by_id("typewriter") else {
        return;
    };
    let text = el.text_content().unwrap_or_default();
    el.set_text_content(Some(""));
    if let Ok(mut guard) = app.try_borrow_mut() {
        guard.host.set_typewriter_target(el.clone());
    }

    let app = app.clone();
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
        let visible = entries.iter().any(|entry| {
            entry
                .dyn_into::<web::IntersectionObserverEntry>()
                .map(|e| e.is_intersecting())
                .unwrap_or(false)
        });
        if visible {
            dispatch(&app, |site, host, _| site.start_typewriter(host, &text));
        }
    }) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&wasm_bindgen::JsValue::from_f64(0.5));
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts) {
        Ok(observer) => observer.observe(&el),
        Err(e) => log::warn!("[init] IntersectionObserver error: {:?}", e),
    }
    callback.forget();
}

/// Idle poll and the session-wide ambient jumpscare draw.
pub fn start_timers(app: &SharedApp) {
    let (poll_ms, ambient_ms) = {
        let guard = app.borrow();
        let cfg = guard.site.config();
        (
            cfg.idle_poll.as_millis() as i32,
            cfg.ambient_period.as_millis() as i32,
        )
    };

    let idle_app = app.clone();
    dom::every(poll_ms, move || {
        dispatch(&idle_app, |site, host, now| site.poll_idle(host, now));
    });

    let ambient_app = app.clone();
    dom::every(ambient_ms, move || {
        dispatch(&ambient_app, |site, host, _| site.ambient_tick(host));
    });
}
