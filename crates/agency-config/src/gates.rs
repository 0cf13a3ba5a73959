//! Gate recompute policy configuration.

use serde::{Deserialize, Serialize};

const fn default_preserve_manual_status() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatesConfig {
    /// Keep a manually set `failed`/`blocked` gate status through automatic
    /// recomputes and when judging whether a module may advance.
    #[serde(default = "default_preserve_manual_status")]
    pub preserve_manual_status: bool,
}

impl Default for GatesConfig {
    fn default() -> Self {
        Self {
            preserve_manual_status: default_preserve_manual_status(),
        }
    }
}
