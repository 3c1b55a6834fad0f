//! Error types for the toolbar crate.
//!
//! Every variant signals a programming error on the caller's side. None of
//! them are transient: callers propagate them with `?` and never retry.

use rounded_toolbar_core::CoreError;
use thiserror::Error;

/// Errors returned by [`RoundedToolbar`](crate::RoundedToolbar) entry points.
#[derive(Error, Debug)]
pub enum ToolbarError {
    /// A required argument was missing or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The toolbar was used from a thread other than its UI thread.
    #[error("toolbar accessed off its UI thread: {0}")]
    WrongThread(#[source] CoreError),

    /// The toolbar, or the surface that owns it, has been disposed.
    #[error("toolbar has been disposed")]
    Disposed,

    /// Toolbar configuration text could not be parsed.
    #[error("invalid toolbar configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl ToolbarError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type for toolbar operations.
pub type ToolbarResult<T> = Result<T, ToolbarError>;
