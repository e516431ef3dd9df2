//! Conference-list error types.

use thiserror::Error;

/// Failure reported by the call engine when joining a conference.
#[derive(Debug, Error)]
pub enum CallInitiationError {
    #[error("provider does not support telephony")]
    Unsupported,

    #[error("conference is not joinable: {0}")]
    NotJoinable(String),

    #[error("call setup failed: {0}")]
    Setup(String),
}

#[derive(Debug, Error)]
pub enum ConferenceError {
    #[error("conference description has no call uri")]
    InvalidDescription,

    #[error("index {index} out of bounds for conference list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("call initiation failed: {0}")]
    CallInitiation(#[from] CallInitiationError),
}
