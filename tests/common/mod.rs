// Recording Host with a virtual clock, shared by the integration tests.

#![allow(dead_code)]

use curupira_web::core::{Cue, Host, Label, MessageId, Site, Surface, Tab, Task, Theme};
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Every Bernoulli draw succeeds.
pub fn always() -> StepRng {
    StepRng::new(0, 0)
}

/// Every Bernoulli draw below 1.0 fails. Do not use where the site picks
/// from a range (idle messages, typewriter delays).
pub fn never() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

pub fn seeded() -> StdRng {
    StdRng::seed_from_u64(7)
}

pub fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

pub fn secs(v: u64) -> Duration {
    Duration::from_secs(v)
}

#[derive(Default)]
pub struct FakeHost {
    pub now: Duration,
    seq: u64,
    pending: Vec<(Duration, u64, Task)>,

    pub visible: HashMap<Surface, bool>,
    pub transitions: Vec<(Duration, Surface, bool)>,
    pub faded: Vec<Surface>,
    pub cues: Vec<Cue>,
    pub ambient: Option<bool>,
    pub image: Option<String>,
    pub labels: HashMap<Label, String>,
    pub theme: Option<Theme>,
    pub slides: Vec<usize>,
    pub tab: Option<Tab>,
    pub typed: String,
    /// id -> (text, shown)
    pub messages: BTreeMap<MessageId, (String, bool)>,
    pub spawned: Vec<(Duration, String)>,
    pub removed: Vec<MessageId>,
}

impl FakeHost {
    pub fn is_visible(&self, surface: Surface) -> bool {
        self.visible.get(&surface).copied().unwrap_or(false)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn cue_count(&self, cue: Cue) -> usize {
        self.cues.iter().filter(|c| **c == cue).count()
    }

    /// Times at which `surface` changed to `visible`.
    pub fn changes(&self, surface: Surface, visible: bool) -> Vec<Duration> {
        self.transitions
            .iter()
            .filter(|(_, s, v)| *s == surface && *v == visible)
            .map(|(t, _, _)| *t)
            .collect()
    }
}

impl Host for FakeHost {
    fn schedule(&mut self, delay: Duration, task: Task) {
        self.seq += 1;
        self.pending.push((self.now + delay, self.seq, task));
    }

    fn set_visible(&mut self, surface: Surface, visible: bool) {
        self.visible.insert(surface, visible);
        self.transitions.push((self.now, surface, visible));
    }

    fn fade_out(&mut self, surface: Surface) {
        self.faded.push(surface);
    }

    fn play_cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    fn set_ambient(&mut self, playing: bool) {
        self.ambient = Some(playing);
    }

    fn set_jumpscare_image(&mut self, url: &str) {
        self.image = Some(url.to_string());
    }

    fn set_label(&mut self, label: Label, text: &str) {
        self.labels.insert(label, text.to_string());
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    fn show_slide(&mut self, index: usize) {
        self.slides.push(index);
    }

    fn show_tab(&mut self, tab: Tab) {
        self.tab = Some(tab);
    }

    fn append_typed(&mut self, ch: char) {
        self.typed.push(ch);
    }

    fn spawn_message(&mut self, id: MessageId, text: &str) {
        self.messages.insert(id, (text.to_string(), false));
        self.spawned.push((self.now, text.to_string()));
    }

    fn set_message_shown(&mut self, id: MessageId, shown: bool) {
        if let Some(m) = self.messages.get_mut(&id) {
            m.1 = shown;
        }
    }

    fn remove_message(&mut self, id: MessageId) {
        self.messages.remove(&id);
        self.removed.push(id);
    }
}

/// Move the virtual clock forward by `by`, running due tasks in time order
/// (ties in scheduling order).
pub fn advance<R: Rng>(site: &mut Site<R>, host: &mut FakeHost, by: Duration) {
    let target = host.now + by;
    loop {
        let next = host
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (due, _, _))| *due <= target)
            .min_by_key(|(_, (due, seq, _))| (*due, *seq))
            .map(|(i, _)| i);
        let Some(i) = next else {
            break;
        };
        let (due, _, task) = host.pending.remove(i);
        host.now = due;
        site.run(host, task);
    }
    host.now = target;
}

/// Drop everything scheduled so far without running it.
pub fn clear_pending(host: &mut FakeHost) {
    host.pending.clear();
}
