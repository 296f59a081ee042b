//! Mycel settings: world generation, attribute bootstrap and debug
//! options, persisted as `config.ron`.

use std::path::{Path, PathBuf};

use mycel_attribute::AttributeDef;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// World generation settings.
    pub worldgen: WorldGenConfig,
    /// Attribute registry bootstrap settings.
    pub attributes: AttributeConfig,
    /// Logging settings.
    pub debug: DebugConfig,
}

/// World generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldGenConfig {
    /// World seed; every chunk RNG derives from it.
    pub seed: u64,
    /// Chunks populated along each horizontal axis, starting at chunk (0, 0).
    pub chunks_per_axis: u32,
    /// Big mushroom placement attempts per chunk.
    pub mushroom_attempts_per_chunk: u32,
    /// Registry name of the mushroom block to grow; `None` picks per mushroom.
    pub mushroom_type: Option<String>,
    /// Height of the flat terrain surface.
    pub surface_height: i32,
}

/// Attribute registry bootstrap configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AttributeConfig {
    /// Register the standard shared attribute set before `definitions`.
    pub include_shared: bool,
    /// Additional attribute definitions, registered in order.
    pub definitions: Vec<AttributeDef>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// `EnvFilter` directives, e.g. `"debug,mycel_worldgen=trace"`.
    pub log_level: String,
    /// Write a JSON log file next to the config in debug builds.
    pub log_to_file: bool,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            seed: 0x4D59_4345_4C00_0001,
            chunks_per_axis: 4,
            mushroom_attempts_per_chunk: 1,
            mushroom_type: None,
            surface_height: 63,
        }
    }
}

impl Default for AttributeConfig {
    fn default() -> Self {
        Self {
            include_shared: true,
            definitions: Vec::new(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

/// Platform config directory for Mycel (e.g. `~/.config/mycel`).
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("mycel"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Location of `config.ron` inside `config_dir`.
pub fn config_file(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE)
}

impl Config {
    /// Read `config.ron` from `config_dir`; a missing file is replaced by
    /// the defaults, which are written back so the user has a template.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_file(config_dir);
        if !path.exists() {
            let defaults = Self::default();
            defaults.save(config_dir)?;
            log::info!("Wrote default Mycel config to {}", path.display());
            return Ok(defaults);
        }

        let config = Self::read(&path)?;
        log::info!(
            "Mycel config read from {} (seed {:#x})",
            path.display(),
            config.worldgen.seed
        );
        Ok(config)
    }

    /// Write this config as pretty RON, creating `config_dir` if needed.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let write_error = |path: &Path| {
            let path = path.to_path_buf();
            move |source| ConfigError::WriteError { path, source }
        };
        std::fs::create_dir_all(config_dir).map_err(write_error(config_dir))?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let text = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        let path = config_file(config_dir);
        std::fs::write(&path, text).map_err(write_error(&path))
    }

    /// Re-read the file; `Some` only when its contents differ from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let on_disk = Self::read(&config_file(config_dir))?;
        if on_disk == *self {
            return Ok(None);
        }
        log::info!("Mycel config changed on disk");
        Ok(Some(on_disk))
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&text).map_err(ConfigError::ParseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_render_as_ron() {
        let pretty = ron::ser::PrettyConfig::new().depth_limit(4);
        let text = ron::ser::to_string_pretty(&Config::default(), pretty).unwrap();
        assert!(text.contains("surface_height: 63"));
        assert!(text.contains("include_shared: true"));
    }

    #[test]
    fn test_definitions_survive_ron() {
        let mut config = Config::default();
        config.attributes.definitions.push(AttributeDef {
            description: Some("Jump Strength".into()),
            ..AttributeDef::ranged("horse.jumpStrength", 0.7, 0.0, 2.0)
        });
        config.worldgen.mushroom_type = Some("red_mushroom_block".into());
        let parsed: Config = ron::from_str(&ron::to_string(&config).unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let config: Config = ron::from_str("(worldgen: (seed: 5))").unwrap();
        assert_eq!(config.worldgen.seed, 5);
        assert_eq!(config.worldgen.surface_height, 63);
        assert_eq!(config.attributes, AttributeConfig::default());
        assert_eq!(config.debug, DebugConfig::default());
    }

    #[test]
    fn test_definitions_parse_from_ron() {
        let src = r#"(
            attributes: (
                include_shared: false,
                definitions: [
                    (name: "zombie.spawnReinforcements", default: 0.0, range: Some((0.0, 1.0))),
                ],
            ),
        )"#;
        let config: Config = ron::from_str(src).unwrap();
        assert!(!config.attributes.include_shared);
        assert_eq!(config.attributes.definitions.len(), 1);
        assert_eq!(config.attributes.definitions[0].range, Some((0.0, 1.0)));
    }

    #[test]
    fn test_saved_config_loads_back() {
        let tmp = tempfile::tempdir().unwrap();
        let mut saved = Config::default();
        saved.worldgen.seed = 77;
        saved.worldgen.mushroom_attempts_per_chunk = 3;
        saved.debug.log_level = "debug".into();
        saved.save(tmp.path()).unwrap();

        assert_eq!(Config::load_or_create(tmp.path()).unwrap(), saved);
    }

    #[test]
    fn test_first_load_writes_template() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(Config::load_or_create(tmp.path()).unwrap(), Config::default());
        assert!(config_file(tmp.path()).exists());
    }

    #[test]
    fn test_save_creates_nested_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        Config::default().save(&nested).unwrap();
        assert!(config_file(&nested).exists());
    }

    #[test]
    fn test_reload_sees_edit() {
        let tmp = tempfile::tempdir().unwrap();
        let current = Config::default();
        current.save(tmp.path()).unwrap();

        let mut edited = current.clone();
        edited.worldgen.chunks_per_axis = 9;
        edited.save(tmp.path()).unwrap();

        let reloaded = current.reload(tmp.path()).unwrap();
        assert_eq!(reloaded.map(|c| c.worldgen.chunks_per_axis), Some(9));
    }

    #[test]
    fn test_reload_unchanged_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let current = Config::default();
        current.save(tmp.path()).unwrap();
        assert_eq!(current.reload(tmp.path()).unwrap(), None);
    }

    #[test]
    fn test_reload_missing_file_is_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = Config::default().reload(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn test_invalid_ron_produces_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(config_file(tmp.path()), "{{not valid}}").unwrap();
        let err = Config::load_or_create(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
