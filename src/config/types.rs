use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub presenter: PresenterConfig,
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Presentation stack settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresenterConfig {
    /// Transitions kept for `Presenter::history` (default: 64, 0 disables).
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

/// Render-side projection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Deepest level a `LevelHost` chain probes (default: 16).
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

/// Async hand-off channel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Bounded queue length between clients and the server (default: 16).
    #[serde(default = "default_dispatch_buffer")]
    pub buffer: usize,
    /// How long a client waits for acknowledgement, in milliseconds (default: 1000).
    #[serde(default = "default_dispatch_timeout_ms")]
    pub timeout_ms: u64,
}

impl DispatchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive; `SHEETSTACK_LOG` overrides it (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Write logs to this file instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_history_limit() -> usize {
    64
}

fn default_max_depth() -> usize {
    16
}

fn default_dispatch_buffer() -> usize {
    16
}

fn default_dispatch_timeout_ms() -> u64 {
    1000
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            buffer: default_dispatch_buffer(),
            timeout_ms: default_dispatch_timeout_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}
