use crate::core::constants::CURSOR_TRAIL_MS;
use crate::core::layout::{
    anchor_scroll_top, cursor_enabled, nav_scrolled, parallax_background_position,
};
use crate::core::InputKind;
use crate::dom;
use crate::host::{dispatch, SharedApp};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Any monitored input counts as activity and drops the chance to baseline.
pub fn wire_activity_monitor(app: &SharedApp, document: &web::Document) {
    for kind in InputKind::ALL {
        let app = app.clone();
        dom::listen(document, kind.event_name(), move |_: web::Event| {
            dispatch(&app, |site, _, now| site.on_input(kind, now));
        });
    }
}

pub fn wire_cursor(document: &web::Document) {
    let (Some(body), Some(cursor), Some(trail)) = (
        document.body(),
        document.get_element_by_id("custom-cursor"),
        document.get_element_by_id("cursor-trail"),
    ) else {
        log::warn!("[init] custom cursor elements missing");
        return;
    };

    let (c, t) = (cursor.clone(), trail.clone());
    dom::listen(&body, "mousemove", move |ev: web::MouseEvent| {
        let width = web::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        if !cursor_enabled(width) {
            return;
        }
        let left = format!("{}px", ev.client_x());
        let top = format!("{}px", ev.client_y());
        dom::set_style(&c, "display", "block");
        dom::set_style(&t, "display", "block");
        dom::set_style(&c, "left", &left);
        dom::set_style(&c, "top", &top);
        let t = t.clone();
        dom::after(CURSOR_TRAIL_MS, move || {
            dom::set_style(&t, "left", &left);
            dom::set_style(&t, "top", &top);
        });
    });

    dom::listen(&body, "mouseleave", move |_: web::MouseEvent| {
        dom::set_style(&cursor, "display", "none");
        dom::set_style(&trail, "display", "none");
    });
}

pub fn wire_scroll(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    let nav = document.get_element_by_id("main-nav");
    dom::listen(&window, "scroll", move |_: web::Event| {
        let scroll_y = web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
        if let Some(nav) = &nav {
            let cl = nav.class_list();
            _ = if nav_scrolled(scroll_y) {
                cl.add_1("scrolled")
            } else {
                cl.remove_1("scrolled")
            };
        }
        let position = parallax_background_position(scroll_y);
        for section in dom::query_all(&doc, ".section") {
            // hero carries a video background
            if section.id() != "hero" {
                dom::set_style(&section, "background-position", &position);
            }
        }
    });
}

pub fn wire_anchors(document: &web::Document) {
    for anchor in dom::query_all(document, "a[href^=\"#\"]") {
        let doc = document.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        dom::listen(&anchor, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let target = dom::query(&doc, &href)
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
            if let (Some(target), Some(window)) = (target, web::window()) {
                let opts = web::ScrollToOptions::new();
                opts.set_top(anchor_scroll_top(target.offset_top() as f64));
                opts.set_behavior(web::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&opts);
            }
        });
    }
}
