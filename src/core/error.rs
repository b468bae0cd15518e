use thiserror::Error;

/// Errors raised while reading attribute values off the page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("unknown gallery direction `{0}`")]
    UnknownDirection(String),
    #[error("unknown tab `{0}`")]
    UnknownTab(String),
    #[error("unknown idle mode `{0}` (expected `level` or `edge`)")]
    UnknownIdleMode(String),
}
