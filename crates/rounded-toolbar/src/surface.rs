//! The parent surface a toolbar lives on.
//!
//! A [`HostSurface`] stands in for the platform window or composite that
//! owns the toolbar. It pins the UI thread, collects redraw requests for the
//! platform to drain, and tears its children down when disposed.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use rounded_toolbar_core::logging::targets;
use rounded_toolbar_core::ThreadAffinity;

#[derive(Debug)]
struct SurfaceState {
    affinity: ThreadAffinity,
    disposed: AtomicBool,
    pending_redraws: AtomicUsize,
}

/// Handle to a parent surface. Cloning yields another handle to the same surface.
#[derive(Debug, Clone)]
pub struct HostSurface {
    state: Arc<SurfaceState>,
}

impl Default for HostSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl HostSurface {
    /// Create a surface owned by the calling thread.
    pub fn new() -> Self {
        Self {
            state: Arc::new(SurfaceState {
                affinity: ThreadAffinity::current(),
                disposed: AtomicBool::new(false),
                pending_redraws: AtomicUsize::new(0),
            }),
        }
    }

    /// The UI thread this surface belongs to.
    pub fn affinity(&self) -> ThreadAffinity {
        self.state.affinity
    }

    /// Ask the platform to repaint this surface.
    pub fn request_redraw(&self) {
        self.state.pending_redraws.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of redraw requests not yet drained.
    pub fn pending_redraws(&self) -> usize {
        self.state.pending_redraws.load(Ordering::SeqCst)
    }

    /// Drain pending redraw requests, returning how many were coalesced.
    ///
    /// The platform calls this once per frame and paints at most once.
    pub fn take_redraw_requests(&self) -> usize {
        self.state.pending_redraws.swap(0, Ordering::SeqCst)
    }

    /// Tear the surface down. Toolbars created on it become unusable.
    pub fn dispose(&self) {
        if !self.state.disposed.swap(true, Ordering::SeqCst) {
            tracing::debug!(target: targets::TOOLBAR, "host surface disposed");
        }
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.state.disposed.load(Ordering::SeqCst)
    }
}
