pub mod controls;
pub mod input;
pub mod triggers;

use crate::host::SharedApp;
use web_sys as web;

pub fn wire_all(app: &SharedApp, document: &web::Document) {
    input::wire_activity_monitor(app, document);
    input::wire_cursor(document);
    input::wire_scroll(document);
    input::wire_anchors(document);

    controls::wire_sound(app, document);
    controls::wire_theme(app, document);
    controls::wire_gallery(app, document);
    controls::wire_tabs(app, document);
    controls::wire_contact_form(app, document);
    controls::wire_summon(app, document);

    triggers::wire_jumpscare_elements(app, document);
    triggers::wire_easter_eggs(app, document);
    triggers::wire_download_buttons(app, document);
    triggers::wire_typewriter(app, document);
    triggers::start_timers(app);
}
