//! Inert backends for platforms without a virtual-desktop API binding.
//!
//! `desktop_count() == 1` makes every switch a no-op, an empty process
//! snapshot makes companion sync a no-op, and a `None` foreground disarms
//! the hide/pin toggles. The binary still runs and shows its tray.

use tao::window::Window;
use tracing::debug;
use vd_manager_core::{
    ForegroundWindow, ProcessBackend, ProcessInfo, ShowState, WindowBackend, WindowHandle,
    WorkspaceBackend,
};

/// No-op virtual-desktop backend.
pub(crate) struct NativeWorkspace;

impl WorkspaceBackend for NativeWorkspace {
    fn desktop_count(&self) -> usize {
        1
    }

    fn active_desktop(&self) -> usize {
        0
    }

    fn switch_to(&mut self, index: usize) {
        debug!(index, "Desktop switching is unsupported on this platform");
    }

    fn is_on_active_desktop(&self, _window: WindowHandle) -> bool {
        false
    }

    fn is_pinned(&self, _window: WindowHandle) -> bool {
        false
    }

    fn set_pinned(&mut self, _window: WindowHandle, _pinned: bool) {
        debug!("Window pinning is unsupported on this platform");
    }
}

/// No-op window backend.
pub(crate) struct NativeWindows;

impl WindowBackend for NativeWindows {
    fn placement(&self, _window: WindowHandle) -> ShowState {
        ShowState::Hide
    }

    fn show_window(&mut self, _window: WindowHandle, _state: ShowState) {}

    fn foreground_window(&self) -> Option<ForegroundWindow> {
        None
    }
}

/// Empty process snapshot source.
pub(crate) struct NativeProcesses;

impl ProcessBackend for NativeProcesses {
    fn processes(&self) -> Vec<ProcessInfo> {
        Vec::new()
    }
}

pub(crate) fn window_handle(_window: &Window) -> WindowHandle {
    WindowHandle(0)
}

pub(crate) fn move_window_to_active_desktop(_window: WindowHandle) {}

pub(crate) fn close_window(_window: WindowHandle) {}

pub(crate) fn refresh_taskbar() {
    debug!("Taskbar refresh is unsupported on this platform");
}
