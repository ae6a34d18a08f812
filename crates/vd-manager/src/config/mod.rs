mod companion_config;
#[allow(clippy::module_inception)]
mod config;
mod hotkey_config;
mod overlay_config;

pub(crate) use {
    companion_config::CompanionConfig, config::Config, hotkey_config::HotkeyConfig,
    overlay_config::OverlayConfig,
};

pub(crate) fn default_on() -> bool {
    true
}

pub(crate) fn default_off() -> bool {
    false
}

pub(crate) fn default_process_prefix() -> String {
    vd_manager_core::DEFAULT_PROCESS_PREFIX.to_string()
}

pub(crate) fn default_window_title() -> String {
    vd_manager_core::DEFAULT_WINDOW_TITLE.to_string()
}
