//! The focus-stealing overlay window.
//!
//! A transparent, undecorated, topmost, click-through, maximized window
//! with no purpose except taking input focus away from freshly maximized
//! companion windows (see `vd_manager_core::CompanionSync`). It never
//! receives mouse events and draws nothing.

use crate::{AppError, AppEvent, AppResult, platform};

use std::panic::Location;

use error_location::ErrorLocation;
use tao::{
    event_loop::EventLoopWindowTarget,
    window::{Window, WindowBuilder},
};
use tracing::{debug, warn};
use vd_manager_core::{OverlayBackend, WindowHandle};

/// Overlay window wrapper implementing [`OverlayBackend`].
pub struct Overlay {
    window: Window,
    enabled: bool,
}

impl Overlay {
    /// Create the (initially hidden) overlay window on the event-loop
    /// thread. When `enabled` is false every operation is a no-op and the
    /// window stays hidden forever.
    #[track_caller]
    pub fn new(target: &EventLoopWindowTarget<AppEvent>, enabled: bool) -> AppResult<Self> {
        let window = WindowBuilder::new()
            .with_title("vd-manager overlay")
            .with_decorations(false)
            .with_transparent(true)
            .with_always_on_top(true)
            .with_maximized(true)
            .with_visible(false)
            .build(target)
            .map_err(|e| AppError::OverlayError {
                reason: format!("Failed to create overlay window: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        // Click-through: the overlay steals keyboard focus, never the mouse.
        if let Err(e) = window.set_ignore_cursor_events(true) {
            warn!(error = %e, "Overlay will not be click-through");
        }

        debug!(enabled, "Overlay window created");

        Ok(Self { window, enabled })
    }

    fn native_handle(&self) -> WindowHandle {
        platform::window_handle(&self.window)
    }
}

impl OverlayBackend for Overlay {
    fn is_visible(&self) -> bool {
        self.enabled && self.window.is_visible()
    }

    fn show(&mut self) {
        if !self.enabled {
            return;
        }
        self.window.set_visible(true);
        self.window.set_focus();
    }

    fn hide(&mut self) {
        self.window.set_visible(false);
    }

    fn move_to_active_desktop(&mut self) {
        if !self.enabled {
            return;
        }
        platform::move_window_to_active_desktop(self.native_handle());
        self.window.set_focus();
    }
}
