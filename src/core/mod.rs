pub mod config;
pub mod constants;
pub mod error;
pub mod gallery;
pub mod host;
pub mod idle;
pub mod jumpscare;
pub mod layout;
pub mod site;
pub mod sound;
pub mod state;
pub mod theme;
pub mod typewriter;

pub use config::{IdleMode, SiteConfig};
pub use error::SiteError;
pub use gallery::{Direction, Tab};
pub use host::{Cue, Host, Label, MessageId, Surface, Task};
pub use jumpscare::Intensity;
pub use site::Site;
pub use state::{InputKind, SiteState};
pub use theme::Theme;
