//! The live hotkey binding table.

use crate::{Action, CoreResult, Error, keys::HotkeyBinding, traits::HotkeyBackend};

use std::{collections::HashMap, panic::Location};

use error_location::ErrorLocation;
use tracing::{debug, info};

/// Thin binding table over a [`HotkeyBackend`].
///
/// Owns every live [`HotkeyBinding`] and the id → action map used to
/// resolve incoming notifications. Provides no group-level deduplication:
/// the dispatcher is responsible for unregistering before re-registering.
pub struct HotkeyRegistry<B: HotkeyBackend> {
    backend: B,
    live: HashMap<u32, HotkeyBinding>,
}

impl<B: HotkeyBackend> HotkeyRegistry<B> {
    /// Create an empty registry over `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            live: HashMap::new(),
        }
    }

    /// Bind `binding` system-wide.
    ///
    /// Fails with [`Error::HotkeyConflict`] when the combination is already
    /// live — whether held by this registry or by another application. A
    /// conflict is not retried; the caller rolls back its batch and reports
    /// a configuration error, since silently missing keys are worse than a
    /// failed enable.
    #[track_caller]
    pub fn register(&mut self, binding: HotkeyBinding) -> CoreResult<()> {
        let id = binding.id();
        if self.live.contains_key(&id) {
            return Err(Error::HotkeyConflict {
                hotkey: format!("{:?}", binding.hotkey),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.backend.register(binding.hotkey)?;
        debug!(id, action = ?binding.action, "Hotkey registered");
        self.live.insert(id, binding);
        Ok(())
    }

    /// Release the binding with `id`. Unknown ids are a no-op.
    pub fn unregister(&mut self, id: u32) {
        if let Some(binding) = self.live.remove(&id) {
            self.backend.unregister(binding.hotkey);
            debug!(id, action = ?binding.action, "Hotkey unregistered");
        }
    }

    /// Release every live binding. Idempotent.
    pub fn unregister_all(&mut self) {
        if self.live.is_empty() {
            return;
        }
        for (_, binding) in self.live.drain() {
            self.backend.unregister(binding.hotkey);
        }
        info!("All hotkeys unregistered");
    }

    /// Resolve a notification id to its action, if the binding is live.
    pub fn action_for(&self, id: u32) -> Option<Action> {
        self.live.get(&id).map(|b| b.action)
    }

    /// Ids of every live binding, sorted for deterministic assertions.
    pub fn live_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.live.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Whether no bindings are live.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

// Bindings must never outlive the native event target they were registered
// against, so a registry going away takes its OS registrations with it.
impl<B: HotkeyBackend> Drop for HotkeyRegistry<B> {
    fn drop(&mut self) {
        self.unregister_all();
    }
}
