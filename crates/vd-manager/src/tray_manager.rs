//! System tray icon with state-based updates.
//!
//! Manages a system tray icon with two states (Running, Paused), one
//! checkbox per hotkey group, and entries for taskbar refresh, companion
//! termination, and exit. The tray is thin glue: every entry funnels into
//! the same dispatch paths the hotkeys use.

use crate::{AppError, AppResult, TrayIconState};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{info, instrument};
use tray_icon::menu::{CheckMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};
use vd_manager_core::GroupSelection;

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    toggle_item: MenuItem,
    arrows_item: CheckMenuItem,
    function_keys_item: CheckMenuItem,
    numpad_item: CheckMenuItem,
    macros_item: CheckMenuItem,
    refresh_item_id: MenuId,
    terminate_item_id: MenuId,
    exit_item_id: MenuId,
}

impl TrayManager {
    /// Create a tray manager with the group checkboxes preset to
    /// `selection`.
    #[track_caller]
    #[instrument]
    pub fn new(selection: GroupSelection) -> AppResult<Self> {
        let menu = Menu::new();

        let toggle_item = MenuItem::new("Pause hotkeys", true, None);
        let arrows_item = CheckMenuItem::new("Arrow keys", true, selection.arrows, None);
        let function_keys_item =
            CheckMenuItem::new("Function keys", true, selection.function_keys, None);
        let numpad_item = CheckMenuItem::new("Numpad keys", true, selection.numpad, None);
        let macros_item = CheckMenuItem::new("Macro chords", true, selection.macros, None);
        let refresh_item = MenuItem::new("Refresh taskbar", true, None);
        let terminate_item = MenuItem::new("Close companions", true, None);
        let exit_item = MenuItem::new("Exit", true, None);

        let refresh_id = refresh_item.id().clone();
        let terminate_id = terminate_item.id().clone();
        let exit_id = exit_item.id().clone();

        let entries: [&dyn tray_icon::menu::IsMenuItem; 11] = [
            &toggle_item,
            &PredefinedMenuItem::separator(),
            &arrows_item,
            &function_keys_item,
            &numpad_item,
            &macros_item,
            &PredefinedMenuItem::separator(),
            &refresh_item,
            &terminate_item,
            &PredefinedMenuItem::separator(),
            &exit_item,
        ];
        for entry in entries {
            menu.append(entry).map_err(|e| AppError::TrayError {
                reason: format!("Failed to build tray menu: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        }

        let icon = Self::load_icon(TrayIconState::Running)?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip("VD Manager - Running")
            .with_menu(Box::new(menu))
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            toggle_item,
            arrows_item,
            function_keys_item,
            numpad_item,
            macros_item,
            refresh_item_id: refresh_id,
            terminate_item_id: terminate_id,
            exit_item_id: exit_id,
        })
    }

    /// Update the tray icon, tooltip, and toggle label for `state`.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn update_state(&mut self, state: TrayIconState) -> AppResult<()> {
        let (icon, tooltip, toggle_label) = match state {
            TrayIconState::Running => {
                (Self::load_icon(state)?, "VD Manager - Running", "Pause hotkeys")
            }
            TrayIconState::Paused => {
                (Self::load_icon(state)?, "VD Manager - Paused", "Resume hotkeys")
            }
        };

        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.tray_icon
            .set_tooltip(Some(tooltip))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.toggle_item.set_text(toggle_label);

        Ok(())
    }

    /// The group selection currently shown by the checkboxes.
    ///
    /// `CheckMenuItem` flips its own checked state on click, so this reads
    /// the post-click state when called from a menu event handler.
    pub fn selection(&self) -> GroupSelection {
        GroupSelection {
            arrows: self.arrows_item.is_checked(),
            function_keys: self.function_keys_item.is_checked(),
            numpad: self.numpad_item.is_checked(),
            macros: self.macros_item.is_checked(),
        }
    }

    /// Whether `id` belongs to one of the group checkboxes.
    pub fn is_group_item(&self, id: &MenuId) -> bool {
        *id == *self.arrows_item.id()
            || *id == *self.function_keys_item.id()
            || *id == *self.numpad_item.id()
            || *id == *self.macros_item.id()
    }

    /// Load icon from compile-time embedded PNG bytes.
    ///
    /// Icons are embedded via include_bytes! so they work regardless of
    /// install location — no hardcoded filesystem paths.
    #[track_caller]
    fn load_icon(state: TrayIconState) -> AppResult<Icon> {
        let png_bytes: &[u8] = match state {
            TrayIconState::Running => include_bytes!("../resources/icons/running.png"),
            TrayIconState::Paused => include_bytes!("../resources/icons/paused.png"),
        };

        let img = image::load_from_memory(png_bytes).map_err(|e| AppError::TrayError {
            reason: format!("Failed to decode embedded icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Get the pause/resume menu item ID.
    pub fn toggle_item_id(&self) -> &MenuId {
        self.toggle_item.id()
    }

    /// Get the taskbar-refresh menu item ID.
    pub fn refresh_item_id(&self) -> &MenuId {
        &self.refresh_item_id
    }

    /// Get the close-companions menu item ID.
    pub fn terminate_item_id(&self) -> &MenuId {
        &self.terminate_item_id
    }

    /// Get the exit menu item ID.
    pub fn exit_item_id(&self) -> &MenuId {
        &self.exit_item_id
    }
}
