//! Companion-window synchronization.
//!
//! The companion is an external helper application ("GridSetter") that may
//! run several instances, each owning one full-screen grid window. After
//! every hotkey-driven desktop switch, each companion window is forced to
//! Maximized when it lives on the now-active desktop and Minimized
//! otherwise, so exactly the relevant grid is visible.
//!
//! When at least one window was maximized, the overlay window is shown (or
//! moved to the active desktop if already visible) and given input focus.
//! Stealing focus away from the freshly maximized companion avoids an
//! expensive redraw/focus churn in the companion. This is a long-standing
//! perceived-performance hack carried over as a black-box side effect; do
//! not rationalize it away.

use crate::{
    placement::ShowState,
    traits::{
        OverlayBackend, ProcessBackend, ProcessInfo, WindowBackend, WindowHandle,
        WorkspaceBackend,
    },
    workspace::WorkspaceSwitcher,
};

use tracing::{debug, trace};

/// Default companion process-name prefix.
pub const DEFAULT_PROCESS_PREFIX: &str = "gridsetter";

/// Default companion main-window title.
pub const DEFAULT_WINDOW_TITLE: &str = "grid";

/// How companion processes are recognized: the process name must start
/// with `process_prefix` AND the main-window title must equal
/// `window_title`, both case-insensitively.
///
/// Historical builds of the companion matched on the prefix alone, which
/// also caught its crash-reporter child process. The conjunctive rule is
/// the one this crate implements; both halves are configurable.
#[derive(Debug, Clone)]
pub struct CompanionRule {
    process_prefix: String,
    window_title: String,
}

impl CompanionRule {
    /// Build a rule; both parts are compared case-insensitively.
    pub fn new(process_prefix: impl Into<String>, window_title: impl Into<String>) -> Self {
        Self {
            process_prefix: process_prefix.into().to_lowercase(),
            window_title: window_title.into().to_lowercase(),
        }
    }

    /// Whether `process` is a companion instance.
    pub fn matches(&self, process: &ProcessInfo) -> bool {
        process.name.to_lowercase().starts_with(&self.process_prefix)
            && process.window_title.to_lowercase() == self.window_title
    }
}

impl Default for CompanionRule {
    fn default() -> Self {
        Self::new(DEFAULT_PROCESS_PREFIX, DEFAULT_WINDOW_TITLE)
    }
}

/// What a synchronization pass did, for logging and tests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    /// Companion windows forced to Maximized (on the active desktop).
    pub maximized: usize,
    /// Companion windows forced to Minimized (elsewhere).
    pub minimized: usize,
    /// Matching processes skipped for not having a window yet.
    pub skipped: usize,
}

/// Runs companion synchronization passes under a [`CompanionRule`].
#[derive(Debug, Default, Clone)]
pub struct CompanionSync {
    rule: CompanionRule,
}

impl CompanionSync {
    /// Create a synchronizer with `rule`.
    pub fn new(rule: CompanionRule) -> Self {
        Self { rule }
    }

    /// One synchronization pass.
    ///
    /// Enumerates processes fresh (instances start and stop between
    /// switches), show-commands every companion window according to its
    /// desktop, and triggers the overlay focus steal when anything was
    /// maximized. A matching process whose window handle is absent is
    /// skipped silently — it may not have finished creating its window.
    pub fn sync<P, W, N, V>(
        &self,
        processes: &P,
        workspace: &WorkspaceSwitcher<W>,
        windows: &mut N,
        overlay: &mut V,
    ) -> SyncReport
    where
        P: ProcessBackend,
        W: WorkspaceBackend,
        N: WindowBackend,
        V: OverlayBackend,
    {
        let mut report = SyncReport::default();

        for process in processes.processes() {
            if !self.rule.matches(&process) {
                continue;
            }
            let Some(window) = process.window else {
                trace!(name = %process.name, "Companion has no window yet, skipping");
                report.skipped += 1;
                continue;
            };

            if workspace.is_on_active_desktop(window) {
                windows.show_window(window, ShowState::Maximize);
                report.maximized += 1;
            } else {
                windows.show_window(window, ShowState::Minimize);
                report.minimized += 1;
            }
        }

        if report.maximized > 0 {
            if overlay.is_visible() {
                overlay.move_to_active_desktop();
            } else {
                overlay.show();
            }
        }

        debug!(?report, "Companion sync pass complete");
        report
    }

    /// Window handles of every currently matching companion instance.
    ///
    /// Used by the surrounding UI's "terminate companions" entry; not part
    /// of the synchronization pass itself.
    pub fn companion_windows<P: ProcessBackend>(&self, processes: &P) -> Vec<WindowHandle> {
        processes
            .processes()
            .iter()
            .filter(|p| self.rule.matches(p))
            .filter_map(|p| p.window)
            .collect()
    }
}
