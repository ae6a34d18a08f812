/// Logical actions a hotkey press can trigger.
///
/// Pure dispatch tags: the mapping from key combination to action lives in
/// [`crate::keys`], the behavior lives in [`crate::Dispatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Switch to the previous virtual desktop (wraps at the left edge).
    SwitchLeft,
    /// Switch to the next virtual desktop (wraps at the right edge).
    SwitchRight,
    /// Show the focus-stealing overlay window.
    ShowOverlay,
    /// Hide the focus-stealing overlay window.
    HideOverlay,
    /// Minimize the foreground window, or restore the previously hidden one.
    ToggleHideForeground,
    /// Pause or resume the whole hotkey service.
    ToggleRunning,
    /// Flip the foreground window's pinned-to-all-desktops status.
    TogglePin,
}
