//! Application context built once at process start.

use crate::confetti::ConfettiEngine;
use crate::config::AppConfig;

/// Process-wide settings handed to the window that owns the UI
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    pub config: AppConfig,
    /// Fixed seed for reproducible confetti, entropy when `None`
    pub seed: Option<u64>,
}

impl AppContext {
    pub fn new(config: AppConfig, seed: Option<u64>) -> Self {
        Self { config, seed }
    }

    pub fn confetti_engine(&self) -> ConfettiEngine {
        let config = self.config.confetti.clone();
        match self.seed {
            Some(seed) => ConfettiEngine::seeded(config, seed),
            None => ConfettiEngine::from_entropy(config),
        }
    }
}
