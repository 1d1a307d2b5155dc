//! TOML configuration for a presentation session.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, DispatchConfig, HostConfig, LoggingConfig, PresenterConfig};
