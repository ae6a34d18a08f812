use crate::config::{default_process_prefix, default_window_title};

use serde::{Deserialize, Serialize};
use vd_manager_core::CompanionRule;

/// How companion ("GridSetter") processes are recognized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanionConfig {
    /// Case-insensitive process-name prefix.
    #[serde(default = "default_process_prefix")]
    pub process_prefix: String,
    /// Case-insensitive main-window title the companion must carry.
    #[serde(default = "default_window_title")]
    pub window_title: String,
}

impl CompanionConfig {
    /// The core-side matching rule for this config.
    pub fn rule(&self) -> CompanionRule {
        CompanionRule::new(self.process_prefix.as_str(), self.window_title.as_str())
    }
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            process_prefix: default_process_prefix(),
            window_title: default_window_title(),
        }
    }
}
