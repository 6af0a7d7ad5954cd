//! Error types for the playback control core

use thiserror::Error;

/// Result type alias for controller operations
pub type Result<T> = std::result::Result<T, Error>;

/// Control-layer error types
///
/// Playlist-boundary navigation is reported as a plain `bool`, empty state
/// yields empty/zero values, and decode or codec failures surface through the
/// engine's own event channel. These variants cover the engine calls that can
/// refuse outright.
#[derive(Error, Debug)]
pub enum Error {
    /// The engine could not bind its video output to the given drawable
    #[error("failed to attach video output to window: {0}")]
    WindowAttach(String),

    /// The engine refused to start a metadata parse for the current item
    #[error("metadata parse could not be started: {0}")]
    MetadataParse(String),

    /// Rejected configuration value
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns true if retrying the operation can succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::MetadataParse(_))
    }
}
