//! Capability boundary between the effect logic and whatever renders it.
//!
//! The browser shell implements [`Host`] on top of the DOM and `setTimeout`;
//! tests implement it with a recorder and a virtual clock. Nothing behind
//! this trait is allowed to call back into the site synchronously: deferred
//! work is handed back later through [`crate::core::Site::run`].

use super::constants::{AMBIENT_URL, CLICK_URL, HOVER_URL, JUMPSCARE_URL, TYPING_URL};
use super::gallery::Tab;
use super::theme::Theme;
use std::time::Duration;

/// Page regions whose visibility the logic toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Jumpscare,
    PageShake,
    SummonOverlay,
    LoadingScreen,
    FormMessage,
}

/// Logical sound cues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Ambient,
    Hover,
    Click,
    Jumpscare,
    Typing,
}

impl Cue {
    pub const ALL: [Cue; 5] = [Cue::Ambient, Cue::Hover, Cue::Click, Cue::Jumpscare, Cue::Typing];

    pub fn url(self) -> &'static str {
        match self {
            Cue::Ambient => AMBIENT_URL,
            Cue::Hover => HOVER_URL,
            Cue::Click => CLICK_URL,
            Cue::Jumpscare => JUMPSCARE_URL,
            Cue::Typing => TYPING_URL,
        }
    }

    /// Value used in `data-sound` attributes.
    pub fn from_attr(value: &str) -> Option<Cue> {
        match value {
            "hover" => Some(Cue::Hover),
            "click" => Some(Cue::Click),
            _ => None,
        }
    }
}

/// Text slots the logic rewrites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    SoundIndicator,
    ThemeIndicator,
    ThemeIcon,
}

/// Handle for a transient idle message element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u32);

/// Deferred work scheduled through [`Host::schedule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    HideJumpscare { generation: u64 },
    EndShake { generation: u64 },
    RevealMessage(MessageId),
    FadeMessage(MessageId),
    RemoveMessage(MessageId),
    TypeNextChar,
    FadeLoadingScreen,
    HideLoadingScreen,
    SummonScream,
    EndSummon,
}

pub trait Host {
    /// One-shot deferred task. There is no cancellation.
    fn schedule(&mut self, delay: Duration, task: Task);
    fn set_visible(&mut self, surface: Surface, visible: bool);
    fn fade_out(&mut self, surface: Surface);
    fn play_cue(&mut self, cue: Cue);
    fn set_ambient(&mut self, playing: bool);
    fn set_jumpscare_image(&mut self, url: &str);
    fn set_label(&mut self, label: Label, text: &str);
    fn apply_theme(&mut self, theme: Theme);
    fn show_slide(&mut self, index: usize);
    fn show_tab(&mut self, tab: Tab);
    fn append_typed(&mut self, ch: char);
    fn spawn_message(&mut self, id: MessageId, text: &str);
    fn set_message_shown(&mut self, id: MessageId, shown: bool);
    fn remove_message(&mut self, id: MessageId);
}
