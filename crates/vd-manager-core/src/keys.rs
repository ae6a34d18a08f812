//! Key tables: which combinations belong to which toggleable group, and
//! which [`Action`] each one fires.

use crate::Action;

use global_hotkey::hotkey::{Code, HotKey, Modifiers};

/// A key combination bound to a logical action.
///
/// The `HotKey` id (a `u32` derived from modifiers + code) doubles as the
/// opaque per-binding identifier carried by hotkey notifications.
#[derive(Debug, Clone, Copy)]
pub struct HotkeyBinding {
    /// The OS-level key combination.
    pub hotkey: HotKey,
    /// The action fired when the combination is pressed.
    pub action: Action,
}

impl HotkeyBinding {
    /// Build a binding from modifiers, key code, and action.
    pub fn new(modifiers: Option<Modifiers>, code: Code, action: Action) -> Self {
        Self {
            hotkey: HotKey::new(modifiers, code),
            action,
        }
    }

    /// The opaque identifier the OS reports for this combination.
    pub fn id(&self) -> u32 {
        self.hotkey.id()
    }
}

/// A toggleable group of key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyGroup {
    /// Unmodified arrow keys. Aggressive on purpose: arrows become
    /// desktop-navigation keys system-wide while the service runs.
    Arrows,
    /// F1..F3.
    FunctionKeys,
    /// Numpad 1..3.
    NumpadKeys,
    /// Ctrl+Shift+Win chords on F5..F7, safe to leave always-on.
    Macros,
}

impl KeyGroup {
    /// Every group, in a stable order.
    pub const ALL: [KeyGroup; 4] = [
        KeyGroup::Arrows,
        KeyGroup::FunctionKeys,
        KeyGroup::NumpadKeys,
        KeyGroup::Macros,
    ];

    /// The bindings this group contributes to an enable batch.
    pub fn bindings(self) -> Vec<HotkeyBinding> {
        match self {
            KeyGroup::Arrows => vec![
                HotkeyBinding::new(None, Code::ArrowLeft, Action::SwitchLeft),
                HotkeyBinding::new(None, Code::ArrowRight, Action::SwitchRight),
                HotkeyBinding::new(None, Code::ArrowUp, Action::ShowOverlay),
                HotkeyBinding::new(None, Code::ArrowDown, Action::HideOverlay),
            ],
            KeyGroup::FunctionKeys => vec![
                HotkeyBinding::new(None, Code::F1, Action::SwitchLeft),
                HotkeyBinding::new(None, Code::F2, Action::TogglePin),
                HotkeyBinding::new(None, Code::F3, Action::SwitchRight),
            ],
            KeyGroup::NumpadKeys => vec![
                HotkeyBinding::new(None, Code::Numpad1, Action::SwitchLeft),
                HotkeyBinding::new(None, Code::Numpad2, Action::ToggleHideForeground),
                HotkeyBinding::new(None, Code::Numpad3, Action::SwitchRight),
            ],
            KeyGroup::Macros => {
                let chord = Modifiers::CONTROL | Modifiers::SHIFT | Modifiers::SUPER;
                vec![
                    HotkeyBinding::new(Some(chord), Code::F5, Action::SwitchLeft),
                    HotkeyBinding::new(Some(chord), Code::F6, Action::ShowOverlay),
                    HotkeyBinding::new(Some(chord), Code::F7, Action::SwitchRight),
                ]
            }
        }
    }
}

/// The binding registered with every enable batch regardless of group
/// selection: Insert pauses the service. Resuming is tray-only, since a
/// paused service has no live bindings at all.
pub fn control_binding() -> HotkeyBinding {
    HotkeyBinding::new(None, Code::Insert, Action::ToggleRunning)
}

/// Which key groups the user has switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSelection {
    /// Unmodified arrow keys.
    pub arrows: bool,
    /// F1..F3.
    pub function_keys: bool,
    /// Numpad 1..3.
    pub numpad: bool,
    /// Ctrl+Shift+Win macro chords.
    pub macros: bool,
}

impl GroupSelection {
    /// Selection with every group off.
    pub const fn none() -> Self {
        Self {
            arrows: false,
            function_keys: false,
            numpad: false,
            macros: false,
        }
    }

    /// Whether `group` is selected.
    pub fn contains(&self, group: KeyGroup) -> bool {
        match group {
            KeyGroup::Arrows => self.arrows,
            KeyGroup::FunctionKeys => self.function_keys,
            KeyGroup::NumpadKeys => self.numpad,
            KeyGroup::Macros => self.macros,
        }
    }

    /// The selected groups, in [`KeyGroup::ALL`] order.
    pub fn selected(&self) -> impl Iterator<Item = KeyGroup> + '_ {
        KeyGroup::ALL.into_iter().filter(|g| self.contains(*g))
    }
}

impl Default for GroupSelection {
    /// The original defaults: arrows and function keys on, numpad off,
    /// macros on.
    fn default() -> Self {
        Self {
            arrows: true,
            function_keys: true,
            numpad: false,
            macros: true,
        }
    }
}
