use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{domain::theme::Theme, sim::timeline::SimPacing};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub theme: ThemeConfig,
    pub sim: SimConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Theme active at startup: "dark" or "light".
    pub start: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            start: "dark".to_owned(),
        }
    }
}

impl ThemeConfig {
    pub fn start_theme(&self) -> Theme {
        Theme::from_config_value(&self.start)
    }
}

/// Delays of the simulated delivery-and-reply chain, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimConfig {
    pub sent_after_ms: u64,
    pub delivered_after_ms: u64,
    pub read_after_ms: u64,
    pub typing_after_ms: u64,
    pub reply_after_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        let pacing = SimPacing::default();
        Self {
            sent_after_ms: pacing.sent_after_ms,
            delivered_after_ms: pacing.delivered_after_ms,
            read_after_ms: pacing.read_after_ms,
            typing_after_ms: pacing.typing_after_ms,
            reply_after_ms: pacing.reply_after_ms,
        }
    }
}

impl SimConfig {
    pub fn pacing(&self) -> SimPacing {
        SimPacing {
            sent_after_ms: self.sent_after_ms,
            delivered_after_ms: self.delivered_after_ms,
            read_after_ms: self.read_after_ms,
            typing_after_ms: self.typing_after_ms,
            reply_after_ms: self.reply_after_ms,
        }
    }
}
