use tray_icon::menu::MenuId;

/// Events forwarded from OS channels onto the main event-loop thread.
///
/// All dispatch happens on that one thread; forwarder threads only move
/// events across, they never act on them.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A global hotkey press, by binding id.
    Hotkey(u32),
    /// A tray menu click.
    Menu(MenuId),
}
