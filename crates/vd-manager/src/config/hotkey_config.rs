use crate::config::{default_off, default_on};

use serde::{Deserialize, Serialize};
use vd_manager_core::GroupSelection;

/// Which hotkey groups are enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotkeyConfig {
    /// Unmodified arrow keys.
    #[serde(default = "default_on")]
    pub arrows: bool,
    /// F1..F3.
    #[serde(default = "default_on")]
    pub function_keys: bool,
    /// Numpad 1..3.
    #[serde(default = "default_off")]
    pub numpad: bool,
    /// Ctrl+Shift+Win macro chords.
    #[serde(default = "default_on")]
    pub macros: bool,
}

impl HotkeyConfig {
    /// The core-side selection value for this config.
    pub fn selection(&self) -> GroupSelection {
        GroupSelection {
            arrows: self.arrows,
            function_keys: self.function_keys,
            numpad: self.numpad,
            macros: self.macros,
        }
    }
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            arrows: true,
            function_keys: true,
            numpad: false,
            macros: true,
        }
    }
}

impl From<GroupSelection> for HotkeyConfig {
    fn from(selection: GroupSelection) -> Self {
        Self {
            arrows: selection.arrows,
            function_keys: selection.function_keys,
            numpad: selection.numpad,
            macros: selection.macros,
        }
    }
}
