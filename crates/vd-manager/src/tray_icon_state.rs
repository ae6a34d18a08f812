/// Tray icon states corresponding to the hotkey service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIconState {
    /// Hotkeys are registered and active.
    Running,
    /// The service is paused; no hotkeys are live.
    Paused,
}
