use super::host::{Cue, Host, Label};

/// Master sound switch. Off until the visitor opts in.
#[derive(Clone, Debug, Default)]
pub struct Sound {
    pub enabled: bool,
}

impl Sound {
    pub fn indicator_text(&self) -> &'static str {
        if self.enabled {
            "Sons Ativos"
        } else {
            "Ativar Sons"
        }
    }

    pub fn toggle<H: Host>(&mut self, host: &mut H) {
        self.enabled = !self.enabled;
        host.set_label(Label::SoundIndicator, self.indicator_text());
        host.set_ambient(self.enabled);
        log::info!("[sound] enabled={}", self.enabled);
    }

    /// Play `cue` if sound is on.
    pub fn play<H: Host>(&self, host: &mut H, cue: Cue) {
        if self.enabled {
            host.play_cue(cue);
        }
    }
}
