//! Application State

use crate::config::AppConfig;

/// Application state
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub running: bool,
    pub count: i64,
    pub initial: i64,
    pub step: i64,
    pub floor: i64,
    /// Labels of reduced actions, oldest first
    pub history: Vec<String>,
    pub history_len: usize,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            running: true,
            count: config.initial,
            initial: config.initial,
            step: config.step,
            floor: config.floor,
            history: Vec::new(),
            history_len: config.history_len,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}
