//! Pointer and scroll driven layout math for the cursor, nav bar and
//! parallax sections.

use super::constants::{
    ANCHOR_HEADER_OFFSET_PX, CURSOR_MIN_VIEWPORT_PX, NAV_SCROLLED_PX, PARALLAX_SPEED,
};

/// The custom cursor is only used on wide viewports.
#[inline]
pub fn cursor_enabled(viewport_width: f64) -> bool {
    viewport_width > CURSOR_MIN_VIEWPORT_PX
}

#[inline]
pub fn nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_PX
}

/// Vertical background offset for a parallax section.
#[inline]
pub fn parallax_offset(scroll_y: f64) -> f64 {
    -(scroll_y * PARALLAX_SPEED)
}

#[inline]
pub fn parallax_background_position(scroll_y: f64) -> String {
    format!("50% {}px", parallax_offset(scroll_y))
}

/// Scroll target for an in-page anchor, clearing the fixed header.
#[inline]
pub fn anchor_scroll_top(target_offset_top: f64) -> f64 {
    target_offset_top - ANCHOR_HEADER_OFFSET_PX
}
