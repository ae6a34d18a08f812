use crate::{keys::GroupSelection, placement::ShowState, traits::WindowHandle};

/// The window currently hidden by the hide toggle, with the show state to
/// restore it to. At most one window is tracked system-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenWindow {
    /// The minimized window.
    pub window: WindowHandle,
    /// Its show state immediately before it was minimized.
    pub prior: ShowState,
}

/// Cross-cutting session state. One instance per application lifetime,
/// owned and mutated only by the dispatcher.
#[derive(Debug, Clone, Copy)]
pub struct SessionState {
    /// Whether hotkeys are currently registered.
    pub running: bool,
    /// Group selection; preserved across pause/resume so re-enabling
    /// restores the same keys.
    pub groups: GroupSelection,
    /// The hide toggle's tracked window, if any.
    pub hidden: Option<HiddenWindow>,
}

impl SessionState {
    /// Fresh session: not running, nothing hidden.
    pub fn new(groups: GroupSelection) -> Self {
        Self {
            running: false,
            groups,
            hidden: None,
        }
    }
}
