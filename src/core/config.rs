use super::constants::*;
use super::error::SiteError;
use std::str::FromStr;
use std::time::Duration;

/// How the idle escalator announces itself while the visitor stays idle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdleMode {
    /// Emit a message on every poll past the threshold.
    #[default]
    Level,
    /// Emit one message per idle episode.
    Edge,
}

impl FromStr for IdleMode {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "level" => Ok(IdleMode::Level),
            "edge" => Ok(IdleMode::Edge),
            other => Err(SiteError::UnknownIdleMode(other.to_string())),
        }
    }
}

/// Every tunable the page effects read. `Default` uses `constants.rs`.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub baseline_chance: f64,
    pub escalated_chance: f64,
    pub idle_threshold: Duration,
    pub idle_poll: Duration,
    pub idle_mode: IdleMode,

    pub ambient_period: Duration,
    pub ambient_chance: f64,
    pub ambient_wild_share: f64,

    pub theme_toggle_chance: f64,
    pub download_hover_chance: f64,

    pub jumpscare: Duration,
    pub jumpscare_wild: Duration,
    pub shake: Duration,

    pub message_reveal: Duration,
    pub message_hold: Duration,
    pub message_remove: Duration,

    pub type_min_ms: f64,
    pub type_max_ms: f64,
    pub type_cue_every: usize,

    pub loading_fade: Duration,
    pub loading_hide: Duration,

    pub summon_scream: Duration,
    pub summon_hold: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            baseline_chance: BASELINE_CHANCE,
            escalated_chance: ESCALATED_CHANCE,
            idle_threshold: Duration::from_millis(IDLE_THRESHOLD_MS),
            idle_poll: Duration::from_millis(IDLE_POLL_MS),
            idle_mode: IdleMode::default(),
            ambient_period: Duration::from_millis(AMBIENT_PERIOD_MS),
            ambient_chance: AMBIENT_CHANCE,
            ambient_wild_share: AMBIENT_WILD_SHARE,
            theme_toggle_chance: THEME_TOGGLE_CHANCE,
            download_hover_chance: DOWNLOAD_HOVER_CHANCE,
            jumpscare: Duration::from_millis(JUMPSCARE_MS),
            jumpscare_wild: Duration::from_millis(JUMPSCARE_WILD_MS),
            shake: Duration::from_millis(SHAKE_MS),
            message_reveal: Duration::from_millis(MESSAGE_REVEAL_MS),
            message_hold: Duration::from_millis(MESSAGE_HOLD_MS),
            message_remove: Duration::from_millis(MESSAGE_REMOVE_MS),
            type_min_ms: TYPE_MIN_MS,
            type_max_ms: TYPE_MAX_MS,
            type_cue_every: TYPE_CUE_EVERY,
            loading_fade: Duration::from_millis(LOADING_FADE_MS),
            loading_hide: Duration::from_millis(LOADING_HIDE_MS),
            summon_scream: Duration::from_millis(SUMMON_SCREAM_MS),
            summon_hold: Duration::from_millis(SUMMON_HOLD_MS),
        }
    }
}

impl SiteConfig {
    pub fn with_idle_mode(mut self, mode: IdleMode) -> Self {
        self.idle_mode = mode;
        self
    }
}
