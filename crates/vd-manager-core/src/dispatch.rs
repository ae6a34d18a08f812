//! The hotkey dispatch state machine.
//!
//! Single coordination point: receives raw hotkey notifications, resolves
//! them to [`Action`]s, and sequences registry, workspace, window, and
//! companion calls while owning the one mutable [`SessionState`].
//!
//! Everything runs on the thread that owns the native event loop; a
//! notification is handled to completion (including the blocking process
//! enumeration of a companion pass) before the next one is looked at.

use crate::{
    Action, CoreResult,
    companion::CompanionSync,
    keys::{GroupSelection, HotkeyBinding, control_binding},
    placement::ShowState,
    registry::HotkeyRegistry,
    session::{HiddenWindow, SessionState},
    traits::{
        HotkeyBackend, OverlayBackend, ProcessBackend, WindowBackend, WindowHandle,
        WorkspaceBackend,
    },
    workspace::WorkspaceSwitcher,
};

use tracing::{debug, info, instrument, warn};

/// What a hotkey notification amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyOutcome {
    /// The id mapped to a live binding and its action was dispatched.
    Handled,
    /// The id is not ours (stale notification, foreign binding).
    Ignored,
}

enum Direction {
    Left,
    Right,
}

/// The dispatch state machine. Generic over the five OS capabilities so
/// the whole machine runs against fakes in tests.
pub struct Dispatcher<H, W, N, P, V>
where
    H: HotkeyBackend,
    W: WorkspaceBackend,
    N: WindowBackend,
    P: ProcessBackend,
    V: OverlayBackend,
{
    registry: HotkeyRegistry<H>,
    workspace: WorkspaceSwitcher<W>,
    windows: N,
    processes: P,
    overlay: V,
    companion: CompanionSync,
    session: SessionState,
    own_pid: u32,
}

impl<H, W, N, P, V> Dispatcher<H, W, N, P, V>
where
    H: HotkeyBackend,
    W: WorkspaceBackend,
    N: WindowBackend,
    P: ProcessBackend,
    V: OverlayBackend,
{
    /// Assemble a dispatcher. No hotkeys are registered until
    /// [`Dispatcher::enable`] is called.
    ///
    /// `own_pid` is this process's id; the foreground window is never
    /// hidden or pinned when it belongs to us.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        hotkeys: H,
        workspace: W,
        windows: N,
        processes: P,
        overlay: V,
        companion: CompanionSync,
        groups: GroupSelection,
        own_pid: u32,
    ) -> Self {
        Self {
            registry: HotkeyRegistry::new(hotkeys),
            workspace: WorkspaceSwitcher::new(workspace),
            windows,
            processes,
            overlay,
            companion,
            session: SessionState::new(groups),
            own_pid,
        }
    }

    /// The current session state.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Whether hotkeys are currently registered.
    pub fn is_running(&self) -> bool {
        self.session.running
    }

    /// Ids of every live binding (sorted). Test and shutdown support.
    pub fn live_ids(&self) -> Vec<u32> {
        self.registry.live_ids()
    }

    /// Register the control binding plus every selected group.
    ///
    /// All-or-nothing: when any single registration fails, everything
    /// registered in this batch is unregistered again and the error is
    /// returned — partial enablement is not a valid observable state.
    #[instrument(skip(self))]
    pub fn enable(&mut self) -> CoreResult<()> {
        if self.session.running {
            warn!("Enable requested while already running, ignoring");
            return Ok(());
        }

        self.register_batch()?;
        self.session.running = true;
        info!(groups = ?self.session.groups, "Hotkey service enabled");
        Ok(())
    }

    /// Unregister everything. Always succeeds; the group selection is kept
    /// so a later enable restores the same keys.
    #[instrument(skip(self))]
    pub fn disable(&mut self) {
        self.registry.unregister_all();
        self.session.running = false;
        info!("Hotkey service disabled");
    }

    /// Change the group selection.
    ///
    /// When running, every binding is unregistered and exactly the new
    /// selection re-registered — never an incremental diff; hotkey churn is
    /// user-driven and rare. A conflict mid-batch rolls the batch back and
    /// leaves the service disabled.
    #[instrument(skip(self))]
    pub fn set_groups(&mut self, groups: GroupSelection) -> CoreResult<()> {
        self.session.groups = groups;
        if !self.session.running {
            return Ok(());
        }

        self.registry.unregister_all();
        if let Err(e) = self.register_batch() {
            self.session.running = false;
            warn!("Group change failed, service now disabled");
            return Err(e);
        }
        info!(?groups, "Hotkey groups re-registered");
        Ok(())
    }

    /// Handle a raw hotkey notification.
    pub fn handle_hotkey(&mut self, id: u32) -> CoreResult<HotkeyOutcome> {
        let Some(action) = self.registry.action_for(id) else {
            debug!(id, "Notification for unknown hotkey id, ignoring");
            return Ok(HotkeyOutcome::Ignored);
        };
        self.dispatch(action)?;
        Ok(HotkeyOutcome::Handled)
    }

    /// Dispatch a logical action. Also the entry point for the tray menu,
    /// which drives the same actions as the hotkeys.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> CoreResult<()> {
        match action {
            Action::SwitchLeft => self.switch(Direction::Left),
            Action::SwitchRight => self.switch(Direction::Right),
            Action::ShowOverlay => self.overlay.show(),
            Action::HideOverlay => self.overlay.hide(),
            Action::ToggleHideForeground => self.toggle_hide_foreground(),
            Action::TogglePin => self.toggle_pin_foreground(),
            Action::ToggleRunning => {
                if self.session.running {
                    self.disable();
                } else {
                    self.enable()?;
                }
            }
        }
        Ok(())
    }

    /// Window handles of every currently matching companion instance.
    pub fn companion_windows(&self) -> Vec<WindowHandle> {
        self.companion.companion_windows(&self.processes)
    }

    // Switch first, then synchronize companions — sync must observe the
    // new active desktop, never the old one.
    fn switch(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.workspace.switch_left(),
            Direction::Right => self.workspace.switch_right(),
        };

        let report = self.companion.sync(
            &self.processes,
            &self.workspace,
            &mut self.windows,
            &mut self.overlay,
        );
        debug!(?report, "Post-switch companion sync");
    }

    fn toggle_hide_foreground(&mut self) {
        if let Some(hidden) = self.session.hidden.take() {
            self.windows.show_window(hidden.window, hidden.prior);
            info!(window = ?hidden.window, state = ?hidden.prior, "Restored hidden window");
            return;
        }

        let Some(target) = self.actionable_foreground() else {
            return;
        };
        let prior = self.windows.placement(target);
        self.windows.show_window(target, ShowState::Minimize);
        self.session.hidden = Some(HiddenWindow {
            window: target,
            prior,
        });
        info!(window = ?target, ?prior, "Minimized foreground window");
    }

    fn toggle_pin_foreground(&mut self) {
        if let Some(target) = self.actionable_foreground() {
            self.workspace.toggle_pin(target);
        }
    }

    /// The foreground window, unless it is the desktop shell or ourselves —
    /// those two are never hidden or pinned.
    fn actionable_foreground(&self) -> Option<WindowHandle> {
        let foreground = self.windows.foreground_window()?;
        if foreground.is_shell {
            debug!("Foreground is the shell, refusing to act on it");
            return None;
        }
        if foreground.process_id == self.own_pid {
            debug!("Foreground is our own window, refusing to act on it");
            return None;
        }
        Some(foreground.window)
    }

    fn register_batch(&mut self) -> CoreResult<()> {
        let mut batch: Vec<HotkeyBinding> = vec![control_binding()];
        for group in self.session.groups.selected() {
            batch.extend(group.bindings());
        }

        let mut registered: Vec<u32> = Vec::with_capacity(batch.len());
        for binding in batch {
            match self.registry.register(binding) {
                Ok(()) => registered.push(binding.id()),
                Err(e) => {
                    warn!(error = %e, "Registration failed, rolling back batch");
                    for id in registered {
                        self.registry.unregister(id);
                    }
                    return Err(e);
                }
            }
        }
        Ok(())
    }
}
