//! OS backends behind the core capability traits.
//!
//! Windows gets the real implementations (Win32 + the virtual-desktop
//! API). Every other platform gets inert stubs so the workspace builds and
//! the binary degrades to a tray icon that does nothing, rather than
//! failing to compile.

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
pub(crate) use windows::{
    NativeProcesses, NativeWindows, NativeWorkspace, close_window, move_window_to_active_desktop,
    refresh_taskbar, window_handle,
};

#[cfg(not(target_os = "windows"))]
mod unsupported;
#[cfg(not(target_os = "windows"))]
pub(crate) use unsupported::{
    NativeProcesses, NativeWindows, NativeWorkspace, close_window, move_window_to_active_desktop,
    refresh_taskbar, window_handle,
};
