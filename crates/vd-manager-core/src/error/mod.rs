use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Coordination errors with source location tracking.
///
/// Only hotkey registration can fail loudly: a key combination that is
/// already owned somewhere else must surface to whoever attempted the
/// enable batch. Everything else in this crate (dead window handles,
/// degenerate desktop counts, vanished processes) degrades to a no-op
/// instead of erroring, because those races are routine on a live desktop.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested key combination is already bound system-wide.
    #[error("Hotkey already in use: {hotkey} {location}")]
    HotkeyConflict {
        /// Human-readable description of the conflicting combination.
        hotkey: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The OS refused a hotkey registration for a reason other than a
    /// conflict (invalid key, no event target, ...).
    #[error("Hotkey registration failed: {reason} {location}")]
    HotkeyRegistration {
        /// Description of the underlying failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl Error {
    /// Build a [`Error::HotkeyConflict`] at the caller's location.
    #[track_caller]
    pub fn conflict(hotkey: impl Into<String>) -> Self {
        Error::HotkeyConflict {
            hotkey: hotkey.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Build a [`Error::HotkeyRegistration`] at the caller's location.
    #[track_caller]
    pub fn registration(reason: impl Into<String>) -> Self {
        Error::HotkeyRegistration {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
