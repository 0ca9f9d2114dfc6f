use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, LogConfig, SimConfig, ThemeConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub theme: Option<FileThemeConfig>,
    pub sim: Option<FileSimConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(theme) = self.theme {
            theme.merge_into(&mut config.theme);
        }

        if let Some(sim) = self.sim {
            sim.merge_into(&mut config.sim);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub dir: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(dir) = self.dir {
            config.dir = Some(dir);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileThemeConfig {
    pub start: Option<String>,
}

impl FileThemeConfig {
    fn merge_into(self, config: &mut ThemeConfig) {
        if let Some(start) = self.start {
            config.start = start;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileSimConfig {
    pub sent_after_ms: Option<u64>,
    pub delivered_after_ms: Option<u64>,
    pub read_after_ms: Option<u64>,
    pub typing_after_ms: Option<u64>,
    pub reply_after_ms: Option<u64>,
}

impl FileSimConfig {
    fn merge_into(self, config: &mut SimConfig) {
        if let Some(value) = self.sent_after_ms {
            config.sent_after_ms = value;
        }

        if let Some(value) = self.delivered_after_ms {
            config.delivered_after_ms = value;
        }

        if let Some(value) = self.read_after_ms {
            config.read_after_ms = value;
        }

        if let Some(value) = self.typing_after_ms {
            config.typing_after_ms = value;
        }

        if let Some(value) = self.reply_after_ms {
            config.reply_after_ms = value;
        }
    }
}
