//! Directional virtual-desktop navigation with wraparound.

use crate::traits::{WindowHandle, WorkspaceBackend};

use tracing::{debug, info};

/// Wraps a [`WorkspaceBackend`] with the navigation policy:
///
/// - a single desktop makes both directions a no-op (never an error),
/// - at either edge the switch wraps to the opposite end. Wraparound is a
///   deliberate UX contract, not a fallback.
///
/// Counts and the active index are re-read from the backend on every call;
/// nothing is cached across switches.
pub struct WorkspaceSwitcher<W: WorkspaceBackend> {
    backend: W,
}

impl<W: WorkspaceBackend> WorkspaceSwitcher<W> {
    /// Create a switcher over `backend`.
    pub fn new(backend: W) -> Self {
        Self { backend }
    }

    /// Switch one desktop to the left. Returns whether a switch happened.
    pub fn switch_left(&mut self) -> bool {
        self.step(-1)
    }

    /// Switch one desktop to the right. Returns whether a switch happened.
    pub fn switch_right(&mut self) -> bool {
        self.step(1)
    }

    fn step(&mut self, delta: isize) -> bool {
        let count = self.backend.desktop_count();
        if count <= 1 {
            debug!(count, "Single desktop, switch is a no-op");
            return false;
        }

        let current = self.backend.active_desktop();
        let target = (current as isize + delta).rem_euclid(count as isize) as usize;
        info!(current, target, "Switching desktop");
        self.backend.switch_to(target);
        true
    }

    /// Whether `window` lives on the active desktop (re-queried, never
    /// cached).
    pub fn is_on_active_desktop(&self, window: WindowHandle) -> bool {
        self.backend.is_on_active_desktop(window)
    }

    /// Flip `window`'s pinned-to-all-desktops status.
    ///
    /// Pin status is owned by the OS; this queries it and writes back the
    /// opposite, keeping no state of its own.
    pub fn toggle_pin(&mut self, window: WindowHandle) {
        let pinned = self.backend.is_pinned(window);
        self.backend.set_pinned(window, !pinned);
        info!(?window, pinned = !pinned, "Toggled window pin");
    }
}
