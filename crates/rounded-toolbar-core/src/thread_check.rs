//! Thread affinity verification.
//!
//! Widgets must only be touched from the thread that owns the UI event loop.
//! [`ThreadAffinity`] records that thread when an owner (usually a host
//! surface) is created, and every entry point of a widget checks it before
//! doing any work.
//!
//! [`ThreadAffinity::check`] returns a [`CoreError::WrongThread`] that the
//! caller propagates with `?`.
//!
//! # Example
//!
//! ```
//! use rounded_toolbar_core::thread_check::ThreadAffinity;
//!
//! struct Counter {
//!     affinity: ThreadAffinity,
//!     value: std::cell::Cell<i32>,
//! }
//!
//! impl Counter {
//!     fn increment(&self) -> rounded_toolbar_core::Result<()> {
//!         self.affinity.check()?;
//!         self.value.set(self.value.get() + 1);
//!         Ok(())
//!     }
//! }
//!
//! let counter = Counter {
//!     affinity: ThreadAffinity::current(),
//!     value: std::cell::Cell::new(0),
//! };
//! counter.increment().unwrap();
//! assert_eq!(counter.value.get(), 1);
//! ```

use std::thread::ThreadId;

use crate::error::{CoreError, Result};

/// Thread affinity tracker for objects.
///
/// Records the thread on which an object was created and verifies that
/// subsequent operations occur on the same thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadAffinity {
    thread_id: ThreadId,
}

impl Default for ThreadAffinity {
    fn default() -> Self {
        Self::current()
    }
}

impl ThreadAffinity {
    /// Create a new thread affinity tracker for the current thread.
    #[inline]
    pub fn current() -> Self {
        Self {
            thread_id: std::thread::current().id(),
        }
    }

    /// Get the thread ID this affinity is bound to.
    #[inline]
    pub fn thread_id(&self) -> ThreadId {
        self.thread_id
    }

    /// Check if the current thread matches this affinity.
    #[inline]
    pub fn is_same_thread(&self) -> bool {
        std::thread::current().id() == self.thread_id
    }

    /// Verify that we are on the owning thread.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::WrongThread`] when called from any other thread.
    #[inline]
    pub fn check(&self) -> Result<()> {
        let current = std::thread::current().id();
        if current == self.thread_id {
            Ok(())
        } else {
            tracing::error!(
                target: crate::logging::targets::THREAD,
                owner = ?self.thread_id,
                current = ?current,
                "thread affinity violation"
            );
            Err(CoreError::WrongThread {
                owner: self.thread_id,
                current,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_thread_affinity_same_thread() {
        let affinity = ThreadAffinity::current();
        assert!(affinity.is_same_thread());
        assert!(affinity.check().is_ok());
    }

    #[test]
    fn test_thread_affinity_different_thread() {
        let affinity = ThreadAffinity::current();
        let result = Arc::new(AtomicBool::new(false));
        let result_clone = result.clone();

        std::thread::spawn(move || {
            result_clone.store(!affinity.is_same_thread(), Ordering::SeqCst);
        })
        .join()
        .unwrap();

        assert!(result.load(Ordering::SeqCst));
    }

    #[test]
    fn test_check_reports_both_threads() {
        let affinity = ThreadAffinity::current();
        let owner = affinity.thread_id();

        let err = std::thread::spawn(move || affinity.check().unwrap_err())
            .join()
            .unwrap();

        match err {
            CoreError::WrongThread { owner: o, current } => {
                assert_eq!(o, owner);
                assert_ne!(current, owner);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_thread_affinity_default() {
        assert!(ThreadAffinity::default().is_same_thread());
    }
}
