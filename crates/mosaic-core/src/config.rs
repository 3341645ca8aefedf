//! Registry configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default coalescing window for extension change notifications, in
/// milliseconds. Long enough to absorb a burst of activation-time
/// registrations landing in the same event-loop turn.
pub const DEFAULT_DEBOUNCE_MS: u64 = 1;

/// Tunables for the registries, loadable from application config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Coalescing window for extension change notifications.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl RegistryConfig {
    /// The debounce window as a [`Duration`].
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}
