//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Mycel command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "mycel", about = "Mycel attribute bootstrap and mushroom population")]
pub struct CliArgs {
    /// World seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chunks populated along each axis.
    #[arg(long)]
    pub chunks_per_axis: Option<u32>,

    /// Mushroom block to grow (e.g. red_mushroom_block).
    #[arg(long)]
    pub mushroom_type: Option<String>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.worldgen.seed = seed;
        }
        if let Some(count) = args.chunks_per_axis {
            self.worldgen.chunks_per_axis = count;
        }
        if let Some(ref mushroom) = args.mushroom_type {
            self.worldgen.mushroom_type = Some(mushroom.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            seed: Some(12),
            mushroom_type: Some("brown_mushroom_block".to_string()),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.worldgen.seed, 12);
        assert_eq!(
            config.worldgen.mushroom_type.as_deref(),
            Some("brown_mushroom_block")
        );
        // Non-overridden fields retain defaults
        assert_eq!(config.worldgen.chunks_per_axis, 4);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "mycel",
            "--seed",
            "99",
            "--chunks-per-axis",
            "2",
            "--log-level",
            "debug",
            "--config",
            "/tmp/mycel",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(99));
        assert_eq!(args.chunks_per_axis, Some(2));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/mycel")));
        assert!(args.mushroom_type.is_none());
    }
}
