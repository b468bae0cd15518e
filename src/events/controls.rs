use crate::core::{Cue, Direction, Tab};
use crate::dom;
use crate::host::{dispatch, SharedApp};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_sound(app: &SharedApp, document: &web::Document) {
    let toggle_app = app.clone();
    dom::add_click_listener(document, "toggle-sound", move || {
        dispatch(&toggle_app, |site, host, _| site.toggle_sound(host));
    });

    for el in dom::query_all(document, "[data-sound]") {
        let attr = el.get_attribute("data-sound").unwrap_or_default();
        let Some(cue) = Cue::from_attr(&attr) else {
            continue;
        };
        let event = if cue == Cue::Hover { "mouseenter" } else { "click" };
        let app = app.clone();
        dom::listen(&el, event, move |_: web::Event| {
            dispatch(&app, |site, host, _| site.play_cue(host, cue));
        });
    }
}

pub fn wire_theme(app: &SharedApp, document: &web::Document) {
    let app = app.clone();
    dom::add_click_listener(document, "theme-toggle", move || {
        dispatch(&app, |site, host, _| site.toggle_theme(host));
    });
}

pub fn wire_gallery(app: &SharedApp, document: &web::Document) {
    for nav in dom::query_all(document, ".gallery-nav") {
        let direction = if nav.class_list().contains("prev") {
            Direction::Prev
        } else {
            Direction::Next
        };
        let app = app.clone();
        let doc = document.clone();
        dom::listen(&nav, "click", move |_: web::MouseEvent| {
            let slides = dom::query_all(&doc, ".gallery-slide").len();
            dispatch(&app, |site, host, _| {
                site.navigate_gallery(host, direction, slides)
            });
        });
    }
}

pub fn wire_tabs(app: &SharedApp, document: &web::Document) {
    for button in dom::query_all(document, ".tab-button") {
        let attr = button.get_attribute("data-tab").unwrap_or_default();
        let tab = match attr.parse::<Tab>() {
            Ok(tab) => tab,
            Err(e) => {
                log::warn!("[init] {e}");
                continue;
            }
        };
        let app = app.clone();
        dom::listen(&button, "click", move |_: web::MouseEvent| {
            dispatch(&app, |site, host, _| site.switch_tab(host, tab));
        });
    }
}

/// Submission is simulated; nothing leaves the page.
pub fn wire_contact_form(app: &SharedApp, document: &web::Document) {
    let Some(form) = document
        .get_element_by_id("contact-form")
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let app = app.clone();
    let form_for_data = form.clone();
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let name = web::FormData::new_with_form(&form_for_data)
            .ok()
            .and_then(|data| data.get("name").as_string())
            .unwrap_or_default();
        log::info!("[form] submitted by {:?}", name);
        dispatch(&app, |site, host, _| site.submit_contact(host));
    });
}

pub fn wire_summon(app: &SharedApp, document: &web::Document) {
    let app = app.clone();
    dom::add_click_listener(document, "summon-button", move || {
        dispatch(&app, |site, host, _| site.summon(host));
    });
}
