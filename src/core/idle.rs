use super::config::{IdleMode, SiteConfig};
use super::host::{Host, MessageId, Task};
use std::time::Duration;

/// Outcome of one idle poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdlePoll {
    Active,
    /// Past the threshold; `announce` says whether to emit a message.
    Idle { announce: bool },
}

#[derive(Clone, Debug, Default)]
pub struct IdleTracker {
    pub last_interaction: Duration,
    /// Set once the current idle episode has been announced.
    announced: bool,
}

impl IdleTracker {
    pub fn new(now: Duration) -> Self {
        Self {
            last_interaction: now,
            announced: false,
        }
    }

    pub fn touch(&mut self, now: Duration) {
        self.last_interaction = now;
        self.announced = false;
    }

    pub fn is_announced(&self) -> bool {
        self.announced
    }

    pub fn poll(&mut self, now: Duration, config: &SiteConfig) -> IdlePoll {
        let elapsed = now.saturating_sub(self.last_interaction);
        if elapsed <= config.idle_threshold {
            return IdlePoll::Active;
        }
        let announce = match config.idle_mode {
            IdleMode::Level => true,
            IdleMode::Edge => !self.announced,
        };
        self.announced = true;
        IdlePoll::Idle { announce }
    }
}

/// Allocates ids for transient messages and drives their fade lifecycle.
#[derive(Clone, Debug, Default)]
pub struct MessageBoard {
    next_id: u32,
    live: Vec<MessageId>,
}

impl MessageBoard {
    pub fn live(&self) -> &[MessageId] {
        &self.live
    }

    pub fn spawn<H: Host>(&mut self, host: &mut H, config: &SiteConfig, text: &str) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.live.push(id);
        host.spawn_message(id, text);
        host.schedule(config.message_reveal, Task::RevealMessage(id));
        host.schedule(config.message_hold, Task::FadeMessage(id));
        id
    }

    pub fn reveal<H: Host>(&mut self, host: &mut H, id: MessageId) {
        if self.live.contains(&id) {
            host.set_message_shown(id, true);
        }
    }

    pub fn fade<H: Host>(&mut self, host: &mut H, config: &SiteConfig, id: MessageId) {
        if self.live.contains(&id) {
            host.set_message_shown(id, false);
            host.schedule(config.message_remove, Task::RemoveMessage(id));
        }
    }

    pub fn remove<H: Host>(&mut self, host: &mut H, id: MessageId) {
        if let Some(pos) = self.live.iter().position(|m| *m == id) {
            self.live.remove(pos);
            host.remove_message(id);
        }
    }
}
