//! Jumpscare surface: `Hidden -> Visible -> Hidden`, reversed by a deferred
//! task. Each trigger bumps a generation counter so a reversal scheduled by
//! an older trigger is ignored instead of cutting the newer window short.

use super::config::SiteConfig;
use super::constants::{MEDIUM_IMAGE, MILD_IMAGE, WILD_IMAGE};
use super::host::{Cue, Host, Surface, Task};
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Intensity {
    #[default]
    Mild,
    Medium,
    Wild,
}

impl Intensity {
    /// Parse a `data-jumpscare` value. Anything unrecognised is `Mild`.
    pub fn from_attr(value: &str) -> Intensity {
        match value {
            "medium" => Intensity::Medium,
            "wild" => Intensity::Wild,
            _ => Intensity::Mild,
        }
    }

    pub fn image_url(self) -> &'static str {
        match self {
            Intensity::Mild => MILD_IMAGE,
            Intensity::Medium => MEDIUM_IMAGE,
            Intensity::Wild => WILD_IMAGE,
        }
    }

    pub fn visible_for(self, config: &SiteConfig) -> Duration {
        match self {
            Intensity::Wild => config.jumpscare_wild,
            _ => config.jumpscare,
        }
    }

    pub fn shakes(self) -> bool {
        self == Intensity::Wild
    }
}

#[derive(Clone, Debug, Default)]
pub struct JumpscareState {
    pub visible: bool,
    pub shaking: bool,
    generation: u64,
    shake_generation: u64,
    pub triggered: u64,
}

impl JumpscareState {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Show the surface for `intensity`. Callers gate on sound beforehand.
    pub fn show<H: Host>(&mut self, host: &mut H, config: &SiteConfig, intensity: Intensity) {
        host.set_jumpscare_image(intensity.image_url());
        host.play_cue(Cue::Jumpscare);

        self.generation += 1;
        self.triggered += 1;
        self.visible = true;
        host.set_visible(Surface::Jumpscare, true);
        host.schedule(
            intensity.visible_for(config),
            Task::HideJumpscare {
                generation: self.generation,
            },
        );

        if intensity.shakes() {
            self.shake_generation += 1;
            self.shaking = true;
            host.set_visible(Surface::PageShake, true);
            host.schedule(
                config.shake,
                Task::EndShake {
                    generation: self.shake_generation,
                },
            );
        }
        log::info!(
            "[jumpscare] {:?} generation={}",
            intensity,
            self.generation
        );
    }

    pub fn hide<H: Host>(&mut self, host: &mut H, generation: u64) {
        if generation != self.generation {
            log::debug!(
                "[jumpscare] stale hide {} (current {})",
                generation,
                self.generation
            );
            return;
        }
        self.visible = false;
        host.set_visible(Surface::Jumpscare, false);
    }

    pub fn end_shake<H: Host>(&mut self, host: &mut H, generation: u64) {
        if generation != self.shake_generation {
            return;
        }
        self.shaking = false;
        host.set_visible(Surface::PageShake, false);
    }
}
