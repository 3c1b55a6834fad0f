//! Error types for the core crate.

use std::thread::ThreadId;

use thiserror::Error;

/// Errors raised by the core systems.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An object with thread affinity was accessed from a foreign thread.
    #[error("object owned by thread {owner:?} accessed from thread {current:?}")]
    WrongThread {
        /// Thread the object is bound to.
        owner: ThreadId,
        /// Thread that attempted the access.
        current: ThreadId,
    },

    /// The connection ID is invalid or has already been disconnected.
    #[error("invalid or disconnected connection ID")]
    InvalidConnection,
}

/// A specialized Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
