//! Default tuning for the page effects.
//!
//! Durations are in milliseconds, chances are per-draw probabilities in [0, 1].

// Jumpscare chance per qualifying action
pub const BASELINE_CHANCE: f64 = 0.03;
pub const ESCALATED_CHANCE: f64 = 0.15; // while idle

// Idle detection
pub const IDLE_THRESHOLD_MS: u64 = 30_000;
pub const IDLE_POLL_MS: u64 = 10_000;

// Session-wide ambient jumpscare timer
pub const AMBIENT_PERIOD_MS: u64 = 30_000;
pub const AMBIENT_CHANCE: f64 = 0.01;
pub const AMBIENT_WILD_SHARE: f64 = 0.3;

// Per-action chances
pub const THEME_TOGGLE_CHANCE: f64 = 0.15;
pub const DOWNLOAD_HOVER_CHANCE: f64 = 0.20;

// Jumpscare surface and page shake
pub const JUMPSCARE_MS: u64 = 400;
pub const JUMPSCARE_WILD_MS: u64 = 800;
pub const SHAKE_MS: u64 = 1_000;

// Idle message lifecycle
pub const MESSAGE_REVEAL_MS: u64 = 100;
pub const MESSAGE_HOLD_MS: u64 = 3_000;
pub const MESSAGE_REMOVE_MS: u64 = 500;

// Typewriter
pub const TYPE_MIN_MS: f64 = 50.0;
pub const TYPE_MAX_MS: f64 = 150.0;
pub const TYPE_CUE_EVERY: usize = 3;

// Loading screen
pub const LOADING_FADE_MS: u64 = 2_000;
pub const LOADING_HIDE_MS: u64 = 1_000;

// Summon flow
pub const SUMMON_SCREAM_MS: u64 = 1_000;
pub const SUMMON_HOLD_MS: u64 = 4_000;

// Layout
pub const CURSOR_MIN_VIEWPORT_PX: f64 = 768.0;
pub const CURSOR_TRAIL_MS: i32 = 50;
pub const NAV_SCROLLED_PX: f64 = 50.0;
pub const PARALLAX_SPEED: f64 = 0.3;
pub const ANCHOR_HEADER_OFFSET_PX: f64 = 80.0;

// Ambient loop volume
pub const AMBIENT_VOLUME: f64 = 0.3;

pub const IDLE_MESSAGES: [&str; 5] = [
    "Ele está observando você agora...",
    "Sente os olhos nas suas costas?",
    "Não se afaste da tela...",
    "Olhe para trás...",
    "Algo se aproxima...",
];

// Jumpscare images keyed by intensity
pub const MILD_IMAGE: &str =
    "https://i.pinimg.com/originals/7a/4f/fd/7a4ffd51a6b5503e3490c570cdac61d5.jpg";
pub const MEDIUM_IMAGE: &str = "https://tinyurl.com/2p8s9a5z";
pub const WILD_IMAGE: &str =
    "https://comicvine.gamespot.com/a/uploads/scale_medium/11/117763/3279195-sacizinho.jpg";

// Sound cues
pub const AMBIENT_URL: &str = "https://www.soundjay.com/ambient/sounds/forest-ambient-1.mp3";
pub const HOVER_URL: &str = "https://www.soundjay.com/button/sounds/button-26.mp3";
pub const CLICK_URL: &str = "https://www.soundjay.com/button/sounds/button-14.mp3";
pub const JUMPSCARE_URL: &str = "https://www.soundjay.com/human/sounds/scream-01.mp3";
pub const TYPING_URL: &str = "https://www.soundjay.com/mechanical/sounds/typewriter-1.mp3";
