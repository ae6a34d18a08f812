//! Win32 + virtual-desktop backends.
//!
//! Window enumeration, placement queries, and show commands go through
//! Win32 directly; desktop membership, switching, and pinning go through
//! the `winvd` virtual-desktop bindings (the same COM surface the original
//! C# VirtualDesktop library wraps). Every OS failure here is absorbed
//! into a harmless default — a vanished window or an unavailable desktop
//! API must never take the process down.

use std::{collections::HashMap, ffi::c_void};

use tao::window::Window;
use tracing::{debug, warn};
use vd_manager_core::{
    ForegroundWindow, ProcessBackend, ProcessInfo, ShowState, WindowBackend, WindowHandle,
    WorkspaceBackend,
};
use windows::Win32::Foundation::{BOOL, CloseHandle, HWND, LPARAM, TRUE, WPARAM};
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION,
    QueryFullProcessImageNameW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetClassNameW, GetForegroundWindow, GetShellWindow, GetWindowPlacement,
    GetWindowTextLengthW, GetWindowTextW, GetWindowThreadProcessId, HWND_BROADCAST, IsWindow,
    IsWindowVisible, PostMessageW, SendMessageTimeoutW, SHOW_WINDOW_CMD, SMTO_ABORTIFHUNG,
    ShowWindow, WINDOWPLACEMENT, WM_CLOSE, WM_SETTINGCHANGE,
};
use windows::core::PWSTR;

fn hwnd(window: WindowHandle) -> HWND {
    HWND(window.0 as *mut c_void)
}

fn handle(raw: HWND) -> WindowHandle {
    WindowHandle(raw.0 as isize)
}

//  Workspace

/// Virtual-desktop backend over `winvd`.
pub(crate) struct NativeWorkspace;

impl WorkspaceBackend for NativeWorkspace {
    fn desktop_count(&self) -> usize {
        match winvd::get_desktop_count() {
            Ok(count) => count as usize,
            Err(e) => {
                // One desktop turns every switch into a no-op, the safest
                // behavior when the desktop API is unreachable.
                warn!(error = ?e, "Desktop count unavailable, assuming 1");
                1
            }
        }
    }

    fn active_desktop(&self) -> usize {
        winvd::get_current_desktop()
            .and_then(|desktop| desktop.get_index())
            .map(|index| index as usize)
            .unwrap_or_else(|e| {
                warn!(error = ?e, "Active desktop unavailable, assuming 0");
                0
            })
    }

    fn switch_to(&mut self, index: usize) {
        if let Err(e) = winvd::switch_desktop(index as u32) {
            warn!(error = ?e, index, "Desktop switch failed");
        }
    }

    fn is_on_active_desktop(&self, window: WindowHandle) -> bool {
        winvd::is_window_on_current_desktop(hwnd(window)).unwrap_or(false)
    }

    fn is_pinned(&self, window: WindowHandle) -> bool {
        winvd::is_pinned_window(hwnd(window)).unwrap_or(false)
    }

    fn set_pinned(&mut self, window: WindowHandle, pinned: bool) {
        let result = if pinned {
            winvd::pin_window(hwnd(window))
        } else {
            winvd::unpin_window(hwnd(window))
        };
        if let Err(e) = result {
            warn!(error = ?e, ?window, pinned, "Pin change failed");
        }
    }
}

//  Windows

/// Win32 window backend.
pub(crate) struct NativeWindows;

impl WindowBackend for NativeWindows {
    fn placement(&self, window: WindowHandle) -> ShowState {
        let raw = hwnd(window);
        // SAFETY: plain Win32 queries on a handle that may be stale; both
        // calls tolerate invalid handles by failing, which we map to Hide.
        unsafe {
            if !IsWindow(Some(raw)).as_bool() {
                return ShowState::Hide;
            }
            let mut placement = WINDOWPLACEMENT {
                length: size_of::<WINDOWPLACEMENT>() as u32,
                ..Default::default()
            };
            match GetWindowPlacement(raw, &mut placement) {
                Ok(()) => ShowState::from_raw(placement.showCmd.0 as u32),
                Err(_) => ShowState::Hide,
            }
        }
    }

    fn show_window(&mut self, window: WindowHandle, state: ShowState) {
        // SAFETY: ShowWindow on a stale handle is a no-op.
        unsafe {
            let _ = ShowWindow(hwnd(window), SHOW_WINDOW_CMD(state.as_raw() as i32));
        }
    }

    fn foreground_window(&self) -> Option<ForegroundWindow> {
        // SAFETY: foreground queries have no preconditions.
        unsafe {
            let raw = GetForegroundWindow();
            if raw.is_invalid() {
                return None;
            }

            let mut process_id = 0u32;
            GetWindowThreadProcessId(raw, Some(&mut process_id));
            if process_id == 0 {
                return None;
            }

            let is_shell = raw == GetShellWindow() || is_shell_class(raw);

            Some(ForegroundWindow {
                window: handle(raw),
                process_id,
                is_shell,
            })
        }
    }
}

/// Whether the window's class marks it as part of the desktop shell
/// (desktop background or taskbar).
unsafe fn is_shell_class(raw: HWND) -> bool {
    let mut class = [0u16; 64];
    // SAFETY: buffer length is passed implicitly via the slice.
    let len = unsafe { GetClassNameW(raw, &mut class) };
    if len <= 0 {
        return false;
    }
    let name = String::from_utf16_lossy(&class[..len as usize]);
    matches!(name.as_str(), "Progman" | "WorkerW" | "Shell_TrayWnd")
}

//  Processes

/// One enumerated top-level window, pre-name-resolution.
struct WindowRow {
    window: HWND,
    process_id: u32,
    title: String,
}

/// Win32 process snapshot source.
///
/// Enumerates visible top-level windows and resolves each owner process's
/// executable name, yielding one row per window. Processes that have not
/// created a window yet simply do not appear — the core treats absent
/// windows as skippable either way.
pub(crate) struct NativeProcesses;

impl ProcessBackend for NativeProcesses {
    fn processes(&self) -> Vec<ProcessInfo> {
        let mut rows: Vec<WindowRow> = Vec::new();

        // SAFETY: the callback receives a raw pointer to `rows`, valid for
        // the duration of the EnumWindows call.
        unsafe {
            if let Err(e) = EnumWindows(
                Some(collect_windows),
                LPARAM(&mut rows as *mut Vec<WindowRow> as isize),
            ) {
                warn!(error = ?e, "Window enumeration failed");
                return Vec::new();
            }
        }

        let mut names: HashMap<u32, String> = HashMap::new();
        rows.into_iter()
            .map(|row| {
                let name = names
                    .entry(row.process_id)
                    .or_insert_with(|| process_name(row.process_id).unwrap_or_default())
                    .clone();
                ProcessInfo {
                    name,
                    window: Some(handle(row.window)),
                    window_title: row.title,
                }
            })
            .collect()
    }
}

unsafe extern "system" fn collect_windows(raw: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is the `rows` pointer passed by `processes` above.
    let rows = unsafe { &mut *(lparam.0 as *mut Vec<WindowRow>) };

    // SAFETY: read-only queries on the enumerated handle.
    unsafe {
        if !IsWindowVisible(raw).as_bool() {
            return TRUE;
        }

        let mut title = String::new();
        let length = GetWindowTextLengthW(raw);
        if length > 0 {
            let mut buffer = vec![0u16; length as usize + 1];
            let copied = GetWindowTextW(raw, &mut buffer);
            if copied > 0 {
                title = String::from_utf16_lossy(&buffer[..copied as usize]);
            }
        }

        let mut process_id = 0u32;
        GetWindowThreadProcessId(raw, Some(&mut process_id));
        if process_id != 0 {
            rows.push(WindowRow {
                window: raw,
                process_id,
                title,
            });
        }
    }

    TRUE
}

/// Executable name (without extension) of `process_id`, or `None` when the
/// process is gone or inaccessible.
fn process_name(process_id: u32) -> Option<String> {
    // SAFETY: the handle is closed on every path after the query.
    unsafe {
        let process = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, process_id).ok()?;

        let mut buffer = [0u16; 1024];
        let mut length = buffer.len() as u32;
        let result = QueryFullProcessImageNameW(
            process,
            PROCESS_NAME_WIN32,
            PWSTR(buffer.as_mut_ptr()),
            &mut length,
        );
        let _ = CloseHandle(process);
        result.ok()?;

        let path = String::from_utf16_lossy(&buffer[..length as usize]);
        Some(
            std::path::Path::new(&path)
                .file_stem()?
                .to_string_lossy()
                .into_owned(),
        )
    }
}

//  Free helpers

/// Native handle of a tao window.
pub(crate) fn window_handle(window: &Window) -> WindowHandle {
    use tao::platform::windows::WindowExtWindows;
    WindowHandle(window.hwnd() as _)
}

/// Move `window` to the currently active virtual desktop.
pub(crate) fn move_window_to_active_desktop(window: WindowHandle) {
    let result = winvd::get_current_desktop()
        .and_then(|desktop| winvd::move_window_to_desktop(desktop, &hwnd(window)));
    if let Err(e) = result {
        warn!(error = ?e, ?window, "Moving window to active desktop failed");
    }
}

/// Ask `window` to close (WM_CLOSE, the polite form).
pub(crate) fn close_window(window: WindowHandle) {
    // SAFETY: posting to a stale handle fails harmlessly.
    unsafe {
        if let Err(e) = PostMessageW(Some(hwnd(window)), WM_CLOSE, WPARAM(0), LPARAM(0)) {
            debug!(error = ?e, ?window, "WM_CLOSE post failed");
        }
    }
}

/// Nudge the shell into rebuilding tray state, picking up windows whose
/// taskbar entries went stale after heavy show/hide churn.
pub(crate) fn refresh_taskbar() {
    let setting: Vec<u16> = "TraySettings\0".encode_utf16().collect();
    // SAFETY: the broadcast copies the string during the call; `setting`
    // outlives it.
    unsafe {
        let _ = SendMessageTimeoutW(
            HWND_BROADCAST,
            WM_SETTINGCHANGE,
            WPARAM(0),
            LPARAM(setting.as_ptr() as isize),
            SMTO_ABORTIFHUNG,
            5000,
            None,
        );
    }
    debug!("Taskbar refresh broadcast sent");
}
