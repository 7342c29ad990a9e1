//! Injector options

use serde::{Deserialize, Serialize};
use tang_domain::constants::DEFAULT_MAX_RESOLUTION_DEPTH;

/// Tunables for a resolution session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectorOptions {
    /// Longest dependency chain a single resolution may follow
    pub max_resolution_depth: usize,
}

impl Default for InjectorOptions {
    fn default() -> Self {
        Self {
            max_resolution_depth: DEFAULT_MAX_RESOLUTION_DEPTH,
        }
    }
}
