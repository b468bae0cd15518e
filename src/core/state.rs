//! The per-session state record. Lives as long as the page; nothing here
//! is persisted.

use super::config::SiteConfig;
use super::gallery::Tab;
use super::idle::IdleTracker;
use super::sound::Sound;
use super::theme::Theme;
use std::time::Duration;

/// Input classes that count as visitor activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    PointerMove,
    PointerDown,
    KeyPress,
    Scroll,
    TouchStart,
}

impl InputKind {
    pub const ALL: [InputKind; 5] = [
        InputKind::PointerMove,
        InputKind::PointerDown,
        InputKind::KeyPress,
        InputKind::Scroll,
        InputKind::TouchStart,
    ];

    /// DOM event name listened for on the document.
    pub fn event_name(self) -> &'static str {
        match self {
            InputKind::PointerMove => "mousemove",
            InputKind::PointerDown => "mousedown",
            InputKind::KeyPress => "keypress",
            InputKind::Scroll => "scroll",
            InputKind::TouchStart => "touchstart",
        }
    }
}

#[derive(Clone, Debug)]
pub struct SiteState {
    pub sound: Sound,
    pub theme: Theme,
    pub gallery_index: usize,
    pub active_tab: Tab,
    /// Either the baseline or the escalated chance, nothing in between.
    pub jumpscare_chance: f64,
    pub idle: IdleTracker,
}

impl SiteState {
    pub fn new(config: &SiteConfig, now: Duration) -> Self {
        Self {
            sound: Sound::default(),
            theme: Theme::default(),
            gallery_index: 0,
            active_tab: Tab::default(),
            jumpscare_chance: config.baseline_chance,
            idle: IdleTracker::new(now),
        }
    }
}
