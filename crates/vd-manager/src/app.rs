use crate::{
    AppEvent, AppResult, GlobalHotkeys, Overlay, TrayIconState, TrayManager, config::Config,
    config::HotkeyConfig,
    platform::{self, NativeProcesses, NativeWindows, NativeWorkspace},
};

use tao::event_loop::{ControlFlow, EventLoopWindowTarget};
use tracing::{error, info, instrument, warn};
use tray_icon::menu::MenuId;
use vd_manager_core::{Action, CompanionSync, Dispatcher, HotkeyOutcome};

type NativeDispatcher =
    Dispatcher<GlobalHotkeys, NativeWorkspace, NativeWindows, NativeProcesses, Overlay>;

/// Main application state.
///
/// Lives entirely on the event-loop thread: hotkey and menu events are
/// forwarded onto that thread and handled here to completion, one at a
/// time. The dispatcher owns all session state; this struct only wires OS
/// events into it and mirrors its running state onto the tray.
pub struct App {
    dispatcher: NativeDispatcher,
    tray: TrayManager,
    config: Config,
}

impl App {
    /// Build every backend, register the configured hotkeys, and hand the
    /// tray over to the app.
    ///
    /// Called from the event loop's `Init` event: hotkey registration and
    /// overlay creation both need the running loop (tao pumps the messages
    /// `WM_HOTKEY` delivery needs on Windows).
    #[instrument(skip_all)]
    pub fn bootstrap(
        target: &EventLoopWindowTarget<AppEvent>,
        tray: TrayManager,
        config: Config,
    ) -> AppResult<Self> {
        let hotkeys = GlobalHotkeys::new()?;
        let overlay = Overlay::new(target, config.overlay.enabled)?;

        let mut dispatcher = Dispatcher::new(
            hotkeys,
            NativeWorkspace,
            NativeWindows,
            NativeProcesses,
            overlay,
            CompanionSync::new(config.companion.rule()),
            config.hotkeys.selection(),
            std::process::id(),
        );
        dispatcher.enable()?;

        info!("VD Manager started");

        Ok(Self {
            dispatcher,
            tray,
            config,
        })
    }

    /// Handle a forwarded global hotkey press.
    pub fn on_hotkey(&mut self, id: u32) {
        match self.dispatcher.handle_hotkey(id) {
            // The press may have been the pause toggle; keep the tray honest.
            Ok(HotkeyOutcome::Handled) => self.refresh_tray(),
            Ok(HotkeyOutcome::Ignored) => {}
            Err(e) => {
                error!(error = ?e, "Hotkey dispatch failed");
                self.refresh_tray();
            }
        }
    }

    /// Handle a forwarded tray menu click.
    #[instrument(skip(self, control_flow))]
    pub fn on_menu(&mut self, id: &MenuId, control_flow: &mut ControlFlow) {
        if *id == *self.tray.toggle_item_id() {
            if let Err(e) = self.dispatcher.dispatch(Action::ToggleRunning) {
                error!(error = ?e, "Toggling the service failed");
            }
            self.refresh_tray();
        } else if self.tray.is_group_item(id) {
            self.apply_group_selection();
        } else if *id == *self.tray.refresh_item_id() {
            platform::refresh_taskbar();
        } else if *id == *self.tray.terminate_item_id() {
            self.close_companions();
        } else if *id == *self.tray.exit_item_id() {
            info!("Exit requested from tray menu");
            self.shutdown();
            *control_flow = ControlFlow::ExitWithCode(0);
        }
    }

    /// Unregister everything before the event loop (and with it the hotkey
    /// manager's thread) goes away.
    pub fn shutdown(&mut self) {
        self.dispatcher.disable();
        info!("VD Manager shut down");
    }

    fn apply_group_selection(&mut self) {
        let selection = self.tray.selection();
        if let Err(e) = self.dispatcher.set_groups(selection) {
            // A mid-batch conflict leaves the service disabled; surface it.
            error!(error = ?e, "Changing hotkey groups failed");
            self.refresh_tray();
        }

        self.config.hotkeys = HotkeyConfig::from(selection);
        if let Err(e) = self.config.save() {
            warn!(error = ?e, "Persisting hotkey selection failed");
        }
    }

    fn close_companions(&mut self) {
        let windows = self.dispatcher.companion_windows();
        info!(count = windows.len(), "Closing companion windows");
        for window in windows {
            platform::close_window(window);
        }
    }

    fn refresh_tray(&mut self) {
        let state = if self.dispatcher.is_running() {
            TrayIconState::Running
        } else {
            TrayIconState::Paused
        };
        if let Err(e) = self.tray.update_state(state) {
            error!(error = ?e, "Failed to update tray icon");
        }
    }
}
