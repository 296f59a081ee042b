//! Configuration system for Mycel.
//!
//! Provides startup settings that persist to disk as RON files: world
//! generation parameters, data-driven attribute definitions, and debug
//! options. Supports CLI overrides via clap, hot-reload detection, and
//! forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    AttributeConfig, Config, DebugConfig, WorldGenConfig, config_file, default_config_dir,
};
pub use error::ConfigError;
