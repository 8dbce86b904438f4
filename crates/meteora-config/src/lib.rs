//! Configuration for the meteora home page.
//!
//! Settings live in a TOML file under the platform config directory
//! (`~/.config/meteora/config.toml` on Linux). The `METEORA_CONFIG`
//! environment variable points at an alternative file.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use meteora_core::{AnimationSpeed, Rgb};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "METEORA_CONFIG";

/// Errors raised while reading or writing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no home directory available to locate the config file")]
    NoConfigDir,

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// User configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Animation frame rate preset.
    pub speed: AnimationSpeed,
    /// Below this hero width (virtual pixels) the shower stops animating.
    pub min_width_px: f64,
    /// One meteorite is spawned per this many pixels of hero width.
    pub meteorite_spacing_px: f64,
    /// Meteorite colours, picked uniformly.
    pub palette: Vec<Rgb>,
    /// Page background the meteorites are blended against.
    pub background: Rgb,
    /// Hero title.
    pub title: String,
    /// Hero tagline under the title.
    pub tagline: String,
    /// Fixed RNG seed for a reproducible shower.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed: AnimationSpeed::default(),
            min_width_px: 800.0,
            meteorite_spacing_px: 25.0,
            palette: vec![Rgb::new(0x6e, 0xce, 0xb2), Rgb::new(0x27, 0x23, 0x61)],
            background: Rgb::new(0x0d, 0x0c, 0x1d),
            title: "meteora".to_string(),
            tagline: "A tiny home page with a meteorite shower".to_string(),
            seed: None,
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", "meteora").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load the config from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load the config from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config = Self::parse(&contents).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse and validate TOML contents.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?)
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_err)?;
        tracing::info!(path = %path.display(), "config saved");
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(ConfigError::Invalid("palette must not be empty".into()));
        }
        if !(self.meteorite_spacing_px.is_finite() && self.meteorite_spacing_px > 0.0) {
            return Err(ConfigError::Invalid(
                "meteorite_spacing_px must be a positive number".into(),
            ));
        }
        if !(self.min_width_px.is_finite() && self.min_width_px >= 0.0) {
            return Err(ConfigError::Invalid(
                "min_width_px must be a non-negative number".into(),
            ));
        }
        Ok(())
    }
}
