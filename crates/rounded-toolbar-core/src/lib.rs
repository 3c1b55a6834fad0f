//! Core systems for Rounded Toolbar.
//!
//! - **Signal/Slot System**: type-safe notifications ([`Signal`])
//! - **Thread Affinity**: UI-thread ownership checks ([`thread_check::ThreadAffinity`])
//! - **Logging**: `tracing` target names ([`logging::targets`])
//!
//! # Signal/Slot Example
//!
//! ```
//! use rounded_toolbar_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;
pub mod thread_check;

pub use error::{CoreError, Result};
pub use signal::{ConnectionId, Signal};
pub use thread_check::ThreadAffinity;
