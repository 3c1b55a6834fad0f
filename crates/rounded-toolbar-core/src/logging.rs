//! Logging facilities.
//!
//! The workspace is instrumented with the `tracing` crate. Nothing is printed
//! unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("rounded_toolbar=debug")
//!         .init();
//! }
//! ```
//!
//! Use the constants in [`targets`] to filter individual subsystems.

/// Target names for log filtering.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "rounded_toolbar_core::signal";
    /// Thread affinity checks.
    pub const THREAD: &str = "rounded_toolbar_core::thread";
    /// Item registry (attach, dispose, lookups).
    pub const REGISTRY: &str = "rounded_toolbar::registry";
    /// Pointer routing and selection changes.
    pub const INPUT: &str = "rounded_toolbar::input";
    /// Paint pipeline.
    pub const PAINT: &str = "rounded_toolbar::paint";
    /// Toolbar lifecycle and configuration.
    pub const TOOLBAR: &str = "rounded_toolbar::toolbar";
}

