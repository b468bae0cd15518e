use crate::core::Surface;
use crate::dom;
use web_sys as web;

// Keyframes and idle-message styling injected at startup.
const EFFECT_CSS: &str = r#"
@keyframes shake {
    0%, 100% { transform: translateX(0); }
    10%, 30%, 50%, 70%, 90% { transform: translateX(-10px); }
    20%, 40%, 60%, 80% { transform: translateX(10px); }
}

.shake {
    animation: shake 0.5s cubic-bezier(.36,.07,.19,.97) both;
}

.idle-message {
    position: fixed;
    bottom: 30px;
    left: 50%;
    transform: translateX(-50%) translateY(30px);
    background-color: rgba(10, 10, 10, 0.8);
    color: var(--current-blood);
    padding: 15px 30px;
    border-radius: 5px;
    border-left: 3px solid var(--current-blood);
    font-family: 'Eater', cursive;
    opacity: 0;
    transition: transform 0.3s ease, opacity 0.3s ease;
    z-index: 1000;
}

.idle-message.show {
    opacity: 1;
    transform: translateX(-50%) translateY(0);
}
"#;

pub fn inject_styles(document: &web::Document) {
    let (Ok(style), Some(head)) = (document.create_element("style"), document.head()) else {
        log::warn!("[init] could not inject effect styles");
        return;
    };
    style.set_text_content(Some(EFFECT_CSS));
    _ = head.append_child(&style);
}

fn element(document: &web::Document, surface: Surface) -> Option<web::Element> {
    match surface {
        Surface::Jumpscare => document.get_element_by_id("jumpscare-container"),
        Surface::PageShake => document.body().map(Into::into),
        Surface::SummonOverlay => document.get_element_by_id("summon-overlay"),
        Surface::LoadingScreen => document.get_element_by_id("loading-screen"),
        Surface::FormMessage => dom::query(document, ".form-message"),
    }
}

pub fn set_visible(document: &web::Document, surface: Surface, visible: bool) {
    let Some(el) = element(document, surface) else {
        return;
    };
    let cl = el.class_list();
    match surface {
        Surface::Jumpscare | Surface::SummonOverlay => {
            _ = if visible { cl.add_1("active") } else { cl.remove_1("active") };
        }
        Surface::PageShake => {
            _ = if visible { cl.add_1("shake") } else { cl.remove_1("shake") };
        }
        Surface::LoadingScreen => {
            dom::set_style(&el, "display", if visible { "" } else { "none" });
        }
        Surface::FormMessage => {
            if visible {
                _ = cl.remove_1("hidden");
                _ = cl.add_1("visible");
            } else {
                _ = cl.remove_1("visible");
                _ = cl.add_1("hidden");
            }
        }
    }
}

#[inline]
pub fn fade_out(document: &web::Document, surface: Surface) {
    if let Some(el) = element(document, surface) {
        dom::set_style(&el, "opacity", "0");
    }
}
