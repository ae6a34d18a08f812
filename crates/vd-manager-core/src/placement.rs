/// Window show states, mirroring the Win32 `SW_*` show commands.
///
/// Values are only ever read back from the OS (see
/// [`crate::WindowBackend::placement`]), with one exception: the dispatcher
/// caches a window's current state as its "prior state" right before
/// forcing it to [`ShowState::Minimize`], so the hide toggle can restore it
/// exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowState {
    /// The window is hidden. Also what an invalid handle reports.
    Hide,
    /// Activated and shown at its original size and position.
    Normal,
    /// Activated and shown minimized.
    ShowMinimized,
    /// Maximized.
    Maximize,
    /// Shown at its most recent size and position, without activation.
    ShowNoActivate,
    /// Activated and shown at its current size and position.
    Show,
    /// Minimized; the next top-level window in the Z order is activated.
    Minimize,
    /// Shown minimized, without activation.
    ShowMinNoActive,
    /// Shown at its current size and position, without activation.
    ShowNa,
    /// Activated and restored from a minimized or maximized state.
    Restore,
    /// Show state taken from the process startup information.
    ShowDefault,
    /// Minimized even if the owning thread is not responding.
    ForceMinimize,
}

impl ShowState {
    /// Decode a raw Win32 show command.
    ///
    /// Out-of-range values (the OS only produces 0..=11) fall back to
    /// [`ShowState::Normal`].
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => ShowState::Hide,
            1 => ShowState::Normal,
            2 => ShowState::ShowMinimized,
            3 => ShowState::Maximize,
            4 => ShowState::ShowNoActivate,
            5 => ShowState::Show,
            6 => ShowState::Minimize,
            7 => ShowState::ShowMinNoActive,
            8 => ShowState::ShowNa,
            9 => ShowState::Restore,
            10 => ShowState::ShowDefault,
            11 => ShowState::ForceMinimize,
            _ => ShowState::Normal,
        }
    }

    /// The raw Win32 show command for this state.
    pub fn as_raw(self) -> u32 {
        match self {
            ShowState::Hide => 0,
            ShowState::Normal => 1,
            ShowState::ShowMinimized => 2,
            ShowState::Maximize => 3,
            ShowState::ShowNoActivate => 4,
            ShowState::Show => 5,
            ShowState::Minimize => 6,
            ShowState::ShowMinNoActive => 7,
            ShowState::ShowNa => 8,
            ShowState::Restore => 9,
            ShowState::ShowDefault => 10,
            ShowState::ForceMinimize => 11,
        }
    }
}
