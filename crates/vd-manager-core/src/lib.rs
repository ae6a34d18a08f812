//! Virtual Desktop Manager Core Library
//!
//! Coordination logic for global hotkeys, virtual-desktop switching, and
//! companion-window synchronization. Everything in this crate is written
//! against the narrow OS-capability traits in [`traits`], so the whole
//! state machine runs unmodified against in-memory fakes in tests.
//!
//! # Example
//!
//! ```
//! use vd_manager_core::GroupSelection;
//!
//! let groups = GroupSelection::default();
//! for group in groups.selected() {
//!     println!("{group:?}: {} bindings", group.bindings().len());
//! }
//! ```

mod action;
mod companion;
mod dispatch;
mod error;
mod keys;
mod placement;
mod registry;
mod session;
mod traits;
mod workspace;

pub use {
    action::Action,
    companion::{CompanionRule, CompanionSync, DEFAULT_PROCESS_PREFIX, DEFAULT_WINDOW_TITLE, SyncReport},
    dispatch::{Dispatcher, HotkeyOutcome},
    error::{Error, Result as CoreResult},
    keys::{GroupSelection, HotkeyBinding, KeyGroup, control_binding},
    placement::ShowState,
    registry::HotkeyRegistry,
    session::{HiddenWindow, SessionState},
    traits::{
        ForegroundWindow, HotkeyBackend, OverlayBackend, ProcessBackend, ProcessInfo,
        WindowBackend, WindowHandle, WorkspaceBackend,
    },
    workspace::WorkspaceSwitcher,
};

#[cfg(test)]
mod tests;
