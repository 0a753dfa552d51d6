use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::prefs::DEFAULT_STORE_NAME;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the preferences file lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// File stem of the store (default: "app_preferences").
    #[serde(default = "default_store_name")]
    pub name: String,
    /// Directory of the store. Platform data dir when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// UI pacing and the simulated login delay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Splash delay before the auth status is read (default: 2000).
    #[serde(default = "default_splash_delay_ms")]
    pub splash_delay_ms: u64,
    /// Delay between a navigation decision and the screen switch (default: 500).
    #[serde(default = "default_navigation_delay_ms")]
    pub navigation_delay_ms: u64,
    /// Simulated authentication delay (default: 1000).
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Logs go to stderr when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_store_name() -> String {
    DEFAULT_STORE_NAME.to_string()
}

fn default_splash_delay_ms() -> u64 {
    2000
}

fn default_navigation_delay_ms() -> u64 {
    500
}

fn default_login_delay_ms() -> u64 {
    1000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            dir: None,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: default_splash_delay_ms(),
            navigation_delay_ms: default_navigation_delay_ms(),
            login_delay_ms: default_login_delay_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl TimingConfig {
    /// All delays zero. Used by tests and scripted runs.
    pub fn immediate() -> Self {
        Self {
            splash_delay_ms: 0,
            navigation_delay_ms: 0,
            login_delay_ms: 0,
        }
    }

    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    pub fn navigation_delay(&self) -> Duration {
        Duration::from_millis(self.navigation_delay_ms)
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}

impl StoreConfig {
    /// Configured directory, or the platform default.
    pub fn resolved_dir(&self) -> PathBuf {
        self.dir
            .clone()
            .unwrap_or_else(crate::prefs::PreferencesStore::default_dir)
    }
}
