//! Record-keeping fake backends.
//!
//! Every fake hands out a shared handle to its interior state so a test
//! can keep observing (and mutating) the fake after moving it into a
//! dispatcher. `CallLog` is shared across fakes when a test needs to
//! assert cross-component call ordering.

use crate::{
    CoreResult, Error, ForegroundWindow, HotkeyBackend, OverlayBackend, ProcessBackend,
    ProcessInfo, ShowState, WindowBackend, WindowHandle, WorkspaceBackend,
};

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use global_hotkey::hotkey::HotKey;

/// Shared chronological record of backend calls.
pub(crate) type CallLog = Rc<RefCell<Vec<String>>>;

pub(crate) fn new_call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

//  Hotkeys

#[derive(Default)]
pub(crate) struct HotkeyState {
    /// Combinations currently registered through this backend.
    pub registered: Vec<HotKey>,
    /// Combinations "owned by another application".
    pub taken_elsewhere: Vec<HotKey>,
}

/// Fake OS hotkey table.
#[derive(Clone, Default)]
pub(crate) struct FakeHotkeys {
    state: Rc<RefCell<HotkeyState>>,
}

impl FakeHotkeys {
    pub fn handle(&self) -> Rc<RefCell<HotkeyState>> {
        Rc::clone(&self.state)
    }

    /// Pretend another application already owns `hotkey`.
    pub fn occupy(&self, hotkey: HotKey) {
        self.state.borrow_mut().taken_elsewhere.push(hotkey);
    }
}

impl HotkeyBackend for FakeHotkeys {
    fn register(&mut self, hotkey: HotKey) -> CoreResult<()> {
        let mut state = self.state.borrow_mut();
        let conflicts = |list: &[HotKey]| list.iter().any(|h| h.id() == hotkey.id());
        if conflicts(&state.taken_elsewhere) || conflicts(&state.registered) {
            return Err(Error::conflict(format!("{hotkey:?}")));
        }
        state.registered.push(hotkey);
        Ok(())
    }

    fn unregister(&mut self, hotkey: HotKey) {
        self.state
            .borrow_mut()
            .registered
            .retain(|h| h.id() != hotkey.id());
    }
}

//  Workspace

pub(crate) struct DesktopState {
    pub count: usize,
    pub active: usize,
    /// Which desktop each known window lives on.
    pub window_desktops: HashMap<WindowHandle, usize>,
    /// Windows pinned to all desktops.
    pub pinned: Vec<WindowHandle>,
    pub switch_calls: Vec<usize>,
}

/// Fake virtual-desktop API.
#[derive(Clone)]
pub(crate) struct FakeDesktops {
    state: Rc<RefCell<DesktopState>>,
    log: Option<CallLog>,
}

impl FakeDesktops {
    pub fn with_count(count: usize) -> Self {
        Self {
            state: Rc::new(RefCell::new(DesktopState {
                count,
                active: 0,
                window_desktops: HashMap::new(),
                pinned: Vec::new(),
                switch_calls: Vec::new(),
            })),
            log: None,
        }
    }

    pub fn with_log(mut self, log: &CallLog) -> Self {
        self.log = Some(Rc::clone(log));
        self
    }

    pub fn handle(&self) -> Rc<RefCell<DesktopState>> {
        Rc::clone(&self.state)
    }

    /// Place `window` on `desktop`.
    pub fn put_window(&self, window: WindowHandle, desktop: usize) {
        self.state
            .borrow_mut()
            .window_desktops
            .insert(window, desktop);
    }
}

impl WorkspaceBackend for FakeDesktops {
    fn desktop_count(&self) -> usize {
        self.state.borrow().count
    }

    fn active_desktop(&self) -> usize {
        self.state.borrow().active
    }

    fn switch_to(&mut self, index: usize) {
        let mut state = self.state.borrow_mut();
        state.active = index;
        state.switch_calls.push(index);
        if let Some(log) = &self.log {
            log.borrow_mut().push(format!("switch_to({index})"));
        }
    }

    fn is_on_active_desktop(&self, window: WindowHandle) -> bool {
        let state = self.state.borrow();
        if state.pinned.contains(&window) {
            return true;
        }
        state.window_desktops.get(&window) == Some(&state.active)
    }

    fn is_pinned(&self, window: WindowHandle) -> bool {
        self.state.borrow().pinned.contains(&window)
    }

    fn set_pinned(&mut self, window: WindowHandle, pinned: bool) {
        let mut state = self.state.borrow_mut();
        if pinned {
            if !state.pinned.contains(&window) {
                state.pinned.push(window);
            }
        } else {
            state.pinned.retain(|w| *w != window);
        }
    }
}

//  Windows

#[derive(Default)]
pub(crate) struct WindowState {
    pub placements: HashMap<WindowHandle, ShowState>,
    pub foreground: Option<ForegroundWindow>,
    /// Every show_window call, in order.
    pub show_calls: Vec<(WindowHandle, ShowState)>,
}

/// Fake top-level window table.
#[derive(Clone, Default)]
pub(crate) struct FakeWindows {
    state: Rc<RefCell<WindowState>>,
    log: Option<CallLog>,
}

impl FakeWindows {
    pub fn with_log(mut self, log: &CallLog) -> Self {
        self.log = Some(Rc::clone(log));
        self
    }

    pub fn handle(&self) -> Rc<RefCell<WindowState>> {
        Rc::clone(&self.state)
    }

    pub fn put_window(&self, window: WindowHandle, state: ShowState) {
        self.state.borrow_mut().placements.insert(window, state);
    }

    pub fn set_foreground(&self, foreground: ForegroundWindow) {
        self.state.borrow_mut().foreground = Some(foreground);
    }
}

impl WindowBackend for FakeWindows {
    fn placement(&self, window: WindowHandle) -> ShowState {
        // Unknown handle == closed window: report Hide, never fail.
        self.state
            .borrow()
            .placements
            .get(&window)
            .copied()
            .unwrap_or(ShowState::Hide)
    }

    fn show_window(&mut self, window: WindowHandle, state: ShowState) {
        let mut inner = self.state.borrow_mut();
        inner.placements.insert(window, state);
        inner.show_calls.push((window, state));
        if let Some(log) = &self.log {
            log.borrow_mut()
                .push(format!("show_window({}, {state:?})", window.0));
        }
    }

    fn foreground_window(&self) -> Option<ForegroundWindow> {
        self.state.borrow().foreground
    }
}

//  Processes

/// Fake process snapshot source.
#[derive(Clone, Default)]
pub(crate) struct FakeProcesses {
    rows: Rc<RefCell<Vec<ProcessInfo>>>,
}

impl FakeProcesses {
    pub fn push(&self, name: &str, window: Option<WindowHandle>, title: &str) {
        self.rows.borrow_mut().push(ProcessInfo {
            name: name.to_string(),
            window,
            window_title: title.to_string(),
        });
    }
}

impl ProcessBackend for FakeProcesses {
    fn processes(&self) -> Vec<ProcessInfo> {
        self.rows.borrow().clone()
    }
}

//  Overlay

#[derive(Default)]
pub(crate) struct OverlayState {
    pub visible: bool,
    pub shows: usize,
    pub hides: usize,
    pub moves: usize,
}

/// Fake overlay window.
#[derive(Clone, Default)]
pub(crate) struct FakeOverlay {
    state: Rc<RefCell<OverlayState>>,
}

impl FakeOverlay {
    pub fn handle(&self) -> Rc<RefCell<OverlayState>> {
        Rc::clone(&self.state)
    }
}

impl OverlayBackend for FakeOverlay {
    fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    fn show(&mut self) {
        let mut state = self.state.borrow_mut();
        state.visible = true;
        state.shows += 1;
    }

    fn hide(&mut self) {
        let mut state = self.state.borrow_mut();
        state.visible = false;
        state.hides += 1;
    }

    fn move_to_active_desktop(&mut self) {
        self.state.borrow_mut().moves += 1;
    }
}
