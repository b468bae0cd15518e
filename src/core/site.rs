//! Every page action, wired to shared state and a [`Host`].
//!
//! All randomness goes through the injected `R`, so a seeded or mocked RNG
//! makes every probability-gated branch reproducible.

use super::config::SiteConfig;
use super::constants::IDLE_MESSAGES;
use super::gallery::{step_index, Direction, Tab};
use super::host::{Cue, Host, Label, Surface, Task};
use super::idle::{IdlePoll, MessageBoard};
use super::jumpscare::{Intensity, JumpscareState};
use super::state::{InputKind, SiteState};
use super::typewriter::Typewriter;
use rand::Rng;
use std::time::Duration;

pub struct Site<R: Rng> {
    config: SiteConfig,
    state: SiteState,
    rng: R,
    jumpscare: JumpscareState,
    messages: MessageBoard,
    typewriter: Option<Typewriter>,
    summon_active: bool,
}

impl<R: Rng> Site<R> {
    pub fn new(config: SiteConfig, rng: R, now: Duration) -> Self {
        let state = SiteState::new(&config, now);
        Self {
            config,
            state,
            rng,
            jumpscare: JumpscareState::default(),
            messages: MessageBoard::default(),
            typewriter: None,
            summon_active: false,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn state(&self) -> &SiteState {
        &self.state
    }

    pub fn jumpscare(&self) -> &JumpscareState {
        &self.jumpscare
    }

    pub fn messages(&self) -> &MessageBoard {
        &self.messages
    }

    pub fn jumpscare_chance(&self) -> f64 {
        self.state.jumpscare_chance
    }

    pub fn sound_enabled(&self) -> bool {
        self.state.sound.enabled
    }

    /// Mirrors the overlay: the first `EndSummon` hides it even if another
    /// summon is still pending.
    pub fn summon_active(&self) -> bool {
        self.summon_active
    }

    fn roll(&mut self, chance: f64) -> bool {
        self.rng.gen::<f64>() < chance
    }

    /// Page-load work: schedule the loading screen fade.
    pub fn boot<H: Host>(&mut self, host: &mut H) {
        host.apply_theme(self.state.theme);
        host.show_slide(self.state.gallery_index);
        host.schedule(self.config.loading_fade, Task::FadeLoadingScreen);
    }

    // ---------------- Interaction monitor / idle escalator ----------------

    pub fn on_input(&mut self, kind: InputKind, now: Duration) {
        log::trace!("[idle] input {:?}", kind);
        self.state.idle.touch(now);
        self.state.jumpscare_chance = self.config.baseline_chance;
    }

    pub fn poll_idle<H: Host>(&mut self, host: &mut H, now: Duration) {
        match self.state.idle.poll(now, &self.config) {
            IdlePoll::Active => {}
            IdlePoll::Idle { announce } => {
                self.state.jumpscare_chance = self.config.escalated_chance;
                if announce {
                    let pick = self.rng.gen_range(0..IDLE_MESSAGES.len());
                    let id = self.messages.spawn(host, &self.config, IDLE_MESSAGES[pick]);
                    log::info!("[idle] escalated, message {:?}", id);
                }
            }
        }
    }

    /// Session-wide random timer: rare, and wild about a third of the time.
    pub fn ambient_tick<H: Host>(&mut self, host: &mut H) {
        if self.roll(self.config.ambient_chance) && self.state.sound.enabled {
            let intensity = if self.roll(self.config.ambient_wild_share) {
                Intensity::Wild
            } else {
                Intensity::Mild
            };
            self.trigger(host, intensity);
        }
    }

    // ---------------- Jumpscare ----------------

    /// No-op while sound is off.
    pub fn trigger<H: Host>(&mut self, host: &mut H, intensity: Intensity) {
        if !self.state.sound.enabled {
            return;
        }
        self.jumpscare.show(host, &self.config, intensity);
    }

    pub fn click_jumpscare_element<H: Host>(&mut self, host: &mut H, attr: &str) {
        self.trigger(host, Intensity::from_attr(attr));
    }

    pub fn click_easter_egg<H: Host>(&mut self, host: &mut H) {
        self.trigger(host, Intensity::Wild);
    }

    pub fn hover_download<H: Host>(&mut self, host: &mut H) {
        if self.roll(self.config.download_hover_chance) {
            self.trigger(host, Intensity::Mild);
        }
    }

    // ---------------- Sound / theme ----------------

    pub fn toggle_sound<H: Host>(&mut self, host: &mut H) {
        self.state.sound.toggle(host);
    }

    pub fn play_cue<H: Host>(&mut self, host: &mut H, cue: Cue) {
        self.state.sound.play(host, cue);
    }

    pub fn toggle_theme<H: Host>(&mut self, host: &mut H) {
        let theme = self.state.theme.toggled();
        self.state.theme = theme;
        host.apply_theme(theme);
        host.set_label(Label::ThemeIndicator, theme.indicator_text());
        host.set_label(Label::ThemeIcon, theme.icon_html());
        log::info!("[theme] {:?}", theme);

        if self.roll(self.config.theme_toggle_chance) {
            self.trigger(host, Intensity::Mild);
        }
    }

    // ---------------- Gallery / tabs ----------------

    pub fn navigate_gallery<H: Host>(&mut self, host: &mut H, direction: Direction, slide_count: usize) {
        self.state.gallery_index = step_index(self.state.gallery_index, direction, slide_count);
        if slide_count > 0 {
            host.show_slide(self.state.gallery_index);
        }
        log::debug!("[gallery] {:?} -> {}", direction, self.state.gallery_index);

        if self.roll(self.state.jumpscare_chance) {
            self.trigger(host, Intensity::Mild);
        }
    }

    pub fn switch_tab<H: Host>(&mut self, host: &mut H, tab: Tab) {
        self.state.active_tab = tab;
        host.show_tab(tab);
    }

    // ---------------- Form / summon ----------------

    pub fn submit_contact<H: Host>(&mut self, host: &mut H) {
        host.set_visible(Surface::FormMessage, true);
        self.trigger(host, Intensity::Mild);
    }

    pub fn summon<H: Host>(&mut self, host: &mut H) {
        self.play_cue(host, Cue::Jumpscare);
        self.summon_active = true;
        host.set_visible(Surface::SummonOverlay, true);
        host.schedule(self.config.summon_scream, Task::SummonScream);
        log::info!("[summon] started");
    }

    // ---------------- Typewriter ----------------

    /// Begin re-typing `text`. Only the first call has any effect.
    pub fn start_typewriter<H: Host>(&mut self, host: &mut H, text: &str) {
        let tw = self.typewriter.get_or_insert_with(|| Typewriter::new(text));
        if tw.start() {
            self.type_next_char(host);
        }
    }

    pub fn typewriter(&self) -> Option<&Typewriter> {
        self.typewriter.as_ref()
    }

    fn type_next_char<H: Host>(&mut self, host: &mut H) {
        let Some(tw) = self.typewriter.as_mut() else {
            return;
        };
        let Some((ch, pos)) = tw.advance() else {
            return;
        };
        let done = tw.is_done();
        host.append_typed(ch);
        if self.config.type_cue_every > 0 && pos % self.config.type_cue_every == 0 {
            self.play_cue(host, Cue::Typing);
        }
        if !done {
            let ms = self.rng.gen_range(self.config.type_min_ms..self.config.type_max_ms);
            host.schedule(Duration::from_secs_f64(ms / 1000.0), Task::TypeNextChar);
        }
    }

    // ---------------- Deferred tasks ----------------

    pub fn run<H: Host>(&mut self, host: &mut H, task: Task) {
        match task {
            Task::HideJumpscare { generation } => self.jumpscare.hide(host, generation),
            Task::EndShake { generation } => self.jumpscare.end_shake(host, generation),
            Task::RevealMessage(id) => self.messages.reveal(host, id),
            Task::FadeMessage(id) => self.messages.fade(host, &self.config, id),
            Task::RemoveMessage(id) => self.messages.remove(host, id),
            Task::TypeNextChar => self.type_next_char(host),
            Task::FadeLoadingScreen => {
                host.fade_out(Surface::LoadingScreen);
                host.schedule(self.config.loading_hide, Task::HideLoadingScreen);
            }
            Task::HideLoadingScreen => host.set_visible(Surface::LoadingScreen, false),
            Task::SummonScream => {
                self.play_cue(host, Cue::Jumpscare);
                host.schedule(self.config.summon_hold, Task::EndSummon);
            }
            Task::EndSummon => {
                self.summon_active = false;
                host.set_visible(Surface::SummonOverlay, false);
                log::info!("[summon] ended");
            }
        }
    }
}
