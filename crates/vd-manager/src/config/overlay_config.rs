use crate::config::default_on;

use serde::{Deserialize, Serialize};

/// Focus-stealing overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Whether the overlay participates in companion synchronization.
    #[serde(default = "default_on")]
    pub enabled: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
