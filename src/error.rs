use std::path::PathBuf;

use thiserror::Error;

use crate::contact::SubmissionStatus;

/// Failures of the animated background adapter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EffectError {
    #[error("background effect was already disposed")]
    Disposed,

    #[error("invalid background options: {0}")]
    InvalidOptions(String),
}

/// Failures of the outbound contact relay. Only the binary outcome is shown to
/// the user; the detail goes to the log.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Transport(String),

    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl From<reqwest::Error> for RelayError {
    fn from(e: reqwest::Error) -> Self {
        RelayError::Transport(e.to_string())
    }
}

/// Reasons a contact submission is refused before anything is sent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("a submission is already {0:?}")]
    NotIdle(SubmissionStatus),

    #[error("please fill in the {0} field")]
    MissingField(&'static str),

    #[error("please enter a valid email address")]
    InvalidEmail,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    #[error("cannot read {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    #[error("cannot decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("no download directory available")]
    NoDownloadDir,
}

impl AssetError {
    pub fn io(path: impl Into<PathBuf>, e: std::io::Error) -> Self {
        AssetError::Io { path: path.into(), reason: e.to_string() }
    }
}
