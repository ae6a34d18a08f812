//! VD Manager: virtual-desktop switching, companion-window sync, and
//! window hide/pin toggles under global hotkey control.

mod app;
mod app_event;
mod config;
mod error;
mod hotkeys;
mod overlay;
mod platform;
#[cfg(test)]
mod tests;
mod tray_icon_state;
mod tray_manager;

pub(crate) use {
    app::App,
    app_event::AppEvent,
    error::{AppError, Result as AppResult},
    hotkeys::GlobalHotkeys,
    overlay::Overlay,
    tray_icon_state::TrayIconState,
    tray_manager::TrayManager,
};

use crate::config::Config;

use global_hotkey::{GlobalHotKeyEvent, HotKeyState};
use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy},
};
use tracing::{debug, error};
use tray_icon::menu::MenuEvent;

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("vd_manager=debug")
        .init();

    let event_loop = EventLoopBuilder::<AppEvent>::with_user_event().build();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let tray_manager = match TrayManager::new(config.hotkeys.selection()) {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    spawn_hotkey_forwarder(event_loop.create_proxy());
    spawn_menu_forwarder(event_loop.create_proxy());

    // Handed to App at Init; the event loop owns the app from then on.
    let mut boot = Some((tray_manager, config));
    let mut app: Option<App> = None;

    event_loop.run(move |event, target, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => {
                let Some((tray_manager, config)) = boot.take() else {
                    return;
                };
                // Hotkey registration happens here, not before run(): tao's
                // event loop pumps the messages WM_HOTKEY delivery needs.
                match App::bootstrap(target, tray_manager, config) {
                    Ok(a) => app = Some(a),
                    Err(e) => {
                        error!("Failed to start: {:?}", e);
                        std::process::exit(1);
                    }
                }
            }
            Event::UserEvent(AppEvent::Hotkey(id)) => {
                if let Some(app) = app.as_mut() {
                    app.on_hotkey(id);
                }
            }
            Event::UserEvent(AppEvent::Menu(id)) => {
                if let Some(app) = app.as_mut() {
                    app.on_menu(&id, control_flow);
                }
            }
            Event::LoopDestroyed => {
                // Bindings must not outlive the loop that pumps them.
                if let Some(app) = app.as_mut() {
                    app.shutdown();
                }
            }
            _ => {}
        }
    });
}

/// Forward global hotkey presses onto the event-loop thread.
///
/// GlobalHotKeyEvent::receiver() returns a crossbeam_channel::Receiver
/// which has blocking recv() -- zero polling, instant response, one thread.
/// The thread ends when the event loop (and with it the proxy's target)
/// goes away and send_event starts failing.
fn spawn_hotkey_forwarder(proxy: EventLoopProxy<AppEvent>) {
    std::thread::spawn(move || {
        let receiver = GlobalHotKeyEvent::receiver();
        while let Ok(event) = receiver.recv() {
            // Key-up notifications also arrive here; only presses dispatch.
            if event.state != HotKeyState::Pressed {
                continue;
            }
            if proxy.send_event(AppEvent::Hotkey(event.id)).is_err() {
                break;
            }
        }
        debug!("Hotkey event forwarder stopped");
    });
}

/// Forward tray menu clicks onto the event-loop thread.
fn spawn_menu_forwarder(proxy: EventLoopProxy<AppEvent>) {
    std::thread::spawn(move || {
        let receiver = MenuEvent::receiver();
        while let Ok(event) = receiver.recv() {
            if proxy.send_event(AppEvent::Menu(event.id)).is_err() {
                break;
            }
        }
        debug!("Menu event forwarder stopped");
    });
}
