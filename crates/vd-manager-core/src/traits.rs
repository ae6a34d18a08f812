//! Narrow OS-capability traits the coordination logic is written against.
//!
//! Each concrete backend (Win32 + the virtual-desktop API, a test fake, …)
//! implements one of these. The traits absorb OS-level failures: a handle
//! that stopped being valid between enumeration and use is reported as
//! hidden/absent, never as an error, because windows and processes come and
//! go asynchronously relative to this crate's view of them.

use crate::{CoreResult, placement::ShowState};

use global_hotkey::hotkey::HotKey;

/// Opaque top-level window handle (HWND-shaped, platform-neutral).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

/// The window currently holding input focus, with enough context to decide
/// whether it may be acted on.
#[derive(Debug, Clone, Copy)]
pub struct ForegroundWindow {
    /// The focused top-level window.
    pub window: WindowHandle,
    /// Id of the process owning the window.
    pub process_id: u32,
    /// Whether the window belongs to the desktop shell (desktop, taskbar).
    /// Shell windows are never hidden or pinned.
    pub is_shell: bool,
}

/// One row of a process snapshot, as consumed by the companion
/// synchronizer. Re-derived on every pass, never cached.
#[derive(Debug, Clone)]
pub struct ProcessInfo {
    /// Executable name without extension, as reported by the OS.
    pub name: String,
    /// The process's main window, if it has created one yet.
    pub window: Option<WindowHandle>,
    /// Title of the main window (empty when `window` is `None`).
    pub window_title: String,
}

/// Registers and unregisters system-wide hotkeys.
pub trait HotkeyBackend {
    /// Bind `hotkey` globally. Fails with [`crate::Error::HotkeyConflict`]
    /// when the combination is already owned (by anyone, including us).
    fn register(&mut self, hotkey: HotKey) -> CoreResult<()>;

    /// Release a binding. Unknown hotkeys are a no-op: shutdown paths may
    /// race with dynamic toggling and must not fail for it.
    fn unregister(&mut self, hotkey: HotKey);
}

/// Virtual-desktop navigation, membership, and window pinning.
pub trait WorkspaceBackend {
    /// Number of virtual desktops. Implementations report 1 when the
    /// desktop API is unavailable, which turns every switch into a no-op.
    fn desktop_count(&self) -> usize;

    /// Zero-based index of the active desktop.
    fn active_desktop(&self) -> usize;

    /// Make `index` the active desktop. By the time this returns,
    /// membership queries reflect the new desktop.
    fn switch_to(&mut self, index: usize);

    /// Whether `window` lives on the active desktop. Must be re-queried
    /// after every switch; results are never cached across switches.
    fn is_on_active_desktop(&self, window: WindowHandle) -> bool;

    /// Whether `window` is pinned to all desktops.
    fn is_pinned(&self, window: WindowHandle) -> bool;

    /// Pin or unpin `window`.
    fn set_pinned(&mut self, window: WindowHandle, pinned: bool);
}

/// Show-state queries and commands for top-level windows.
pub trait WindowBackend {
    /// Current show state of `window`. Invalid or closed handles report
    /// [`ShowState::Hide`].
    fn placement(&self, window: WindowHandle) -> ShowState;

    /// Force `window` into `state`.
    fn show_window(&mut self, window: WindowHandle, state: ShowState);

    /// The window currently holding input focus, or `None` when the OS
    /// reports no foreground window.
    fn foreground_window(&self) -> Option<ForegroundWindow>;
}

/// Fresh process snapshots for companion matching.
pub trait ProcessBackend {
    /// Enumerate running processes. Taken fresh on every call — companion
    /// processes start and stop between desktop switches.
    fn processes(&self) -> Vec<ProcessInfo>;
}

/// The transparent, click-through, topmost overlay window owned by the
/// surrounding UI. Only its visibility and desktop placement are driven
/// from here; showing and moving both steal input focus by contract.
pub trait OverlayBackend {
    /// Whether the overlay is currently shown.
    fn is_visible(&self) -> bool;

    /// Show the overlay and give it input focus.
    fn show(&mut self);

    /// Hide the overlay.
    fn hide(&mut self);

    /// Move the overlay to the active desktop and give it input focus.
    fn move_to_active_desktop(&mut self);
}
