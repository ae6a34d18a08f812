//! `global-hotkey` backed implementation of the core hotkey capability.

use crate::{AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use global_hotkey::{GlobalHotKeyManager, hotkey::HotKey};
use tracing::{info, warn};
use vd_manager_core::{CoreResult, Error, HotkeyBackend};

/// Owns the OS-level hotkey manager.
///
/// Must be created on a thread with a message pump (the main thread running
/// the `tao` event loop) so that `WM_HOTKEY` messages are dispatched on
/// Windows, and must stay on that thread for the bindings' lifetime.
pub struct GlobalHotkeys {
    manager: GlobalHotKeyManager,
}

impl GlobalHotkeys {
    /// Create the manager. No hotkeys are bound yet.
    #[track_caller]
    pub fn new() -> AppResult<Self> {
        let manager = GlobalHotKeyManager::new().map_err(|e| AppError::HotkeyManagerFailed {
            reason: format!("Failed to create manager: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!("Global hotkey manager created");

        Ok(Self { manager })
    }
}

impl HotkeyBackend for GlobalHotkeys {
    fn register(&mut self, hotkey: HotKey) -> CoreResult<()> {
        self.manager.register(hotkey).map_err(|e| match e {
            global_hotkey::Error::AlreadyRegistered(_) => Error::conflict(format!("{hotkey:?}")),
            other => Error::registration(other.to_string()),
        })
    }

    fn unregister(&mut self, hotkey: HotKey) {
        // Idempotency contract: unregistering something that is not bound
        // must stay quiet. The OS-level failure is logged and absorbed.
        if let Err(e) = self.manager.unregister(hotkey) {
            warn!(?hotkey, error = %e, "Unregister failed");
        }
    }
}
