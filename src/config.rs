use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::name_gen::{RequestDefaults, SynthesisOptions};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generation: GenerationConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

/// Defaults for name generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Names produced when no count is given.
    pub default_count: usize,
    /// Preset used when none is given.
    pub default_preset: String,
    /// Attach meanings unless told otherwise.
    pub with_meaning: bool,
    /// Chance that a name receives a prefix, in [0, 1].
    pub prefix_probability: f64,
}

/// Data directory configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Override the default data directory.
    pub data_dir: Option<PathBuf>,
    /// File name of the custom profile store, relative to the data directory.
    pub custom_profiles_file: String,
    /// File name of the generated-name history, relative to the data directory.
    pub history_file: String,
    /// Append every generated batch to the history.
    pub record_history: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write JSON logs to `<data_dir>/logs`.
    pub file_logging: bool,
    /// Filter used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_count: 5,
            default_preset: "noble".to_string(),
            with_meaning: false,
            prefix_probability: 0.3,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            custom_profiles_file: "custom_profiles.json".to_string(),
            history_file: "history.json".to_string(),
            record_history: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file_logging: false,
            level: "info".to_string(),
        }
    }
}

/// Where a loaded [`AppConfig`] came from.
///
/// Returned by [`AppConfig::load_with_source`] so the outcome can be logged
/// after the logger (which itself depends on the config) is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file.
    File(PathBuf),
    /// No readable file at this path; defaults used.
    Missing(PathBuf),
    /// The file exists but does not parse; defaults used.
    Invalid { path: PathBuf, reason: String },
}

impl ConfigSource {
    /// Emit the load outcome through `log`.
    pub fn log(&self) {
        match self {
            Self::File(path) => log::info!("Loaded config from {}", path.display()),
            Self::Missing(path) => {
                log::debug!("No config file at {}, using defaults", path.display())
            }
            Self::Invalid { path, reason } => log::warn!(
                "Failed to parse config at {}: {reason}, using defaults",
                path.display()
            ),
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/aetheria/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, with the same fallback.
    pub fn load_from(config_path: &Path) -> Self {
        let (config, source) = Self::load_with_source(config_path);
        source.log();
        config
    }

    /// Load without logging, reporting where the configuration came from.
    pub fn load_with_source(config_path: &Path) -> (Self, ConfigSource) {
        let path = config_path.to_path_buf();
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => (config, ConfigSource::File(path)),
                Err(e) => (
                    Self::default(),
                    ConfigSource::Invalid {
                        path,
                        reason: e.to_string(),
                    },
                ),
            },
            Err(_) => (Self::default(), ConfigSource::Missing(path)),
        }
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Resolved data directory (override or XDG default).
    pub fn data_dir(&self) -> PathBuf {
        self.data.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("aetheria"))
                .unwrap_or_else(|| PathBuf::from("data"))
        })
    }

    /// Where custom profiles are persisted.
    pub fn custom_profiles_path(&self) -> PathBuf {
        self.data_dir().join(&self.data.custom_profiles_file)
    }

    /// Where generated names are recorded.
    pub fn history_path(&self) -> PathBuf {
        self.data_dir().join(&self.data.history_file)
    }

    /// Log directory, when file logging is enabled.
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.logging
            .file_logging
            .then(|| self.data_dir().join("logs"))
    }

    /// Synthesizer options, with the prefix probability clamped to [0, 1].
    pub fn synthesis_options(&self) -> SynthesisOptions {
        let p = self.generation.prefix_probability;
        let clamped = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        if clamped != p {
            log::warn!("prefix_probability {p} outside [0, 1], using {clamped}");
        }
        SynthesisOptions {
            prefix_probability: clamped,
        }
    }

    /// Request fallbacks derived from the generation section.
    pub fn request_defaults(&self) -> RequestDefaults {
        RequestDefaults {
            count: self.generation.default_count.max(1),
            with_meaning: self.generation.with_meaning,
        }
    }

    /// Default config file location.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("aetheria").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
