//! Configuration file support for the mesocycle planner.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/mesocycle/config.toml`.
//! Every planner field is optional; command-line arguments win over the file
//! and recommended defaults fill whatever is still unset.

use crate::export::{ExportDetail, ExportOptions, Orientation, PaperSize, PdfMode};
use crate::types::{Focus, Level, StrengthProfile};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub planner: PlannerConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

/// Default planner inputs
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct PlannerConfig {
    pub focus: Option<Focus>,
    pub level: Option<Level>,
    pub weeks: Option<u32>,
    pub sessions: Option<u32>,
    pub mixed_bias: Option<u8>,
    pub profile: Option<StrengthProfile>,
}

/// Default export settings
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub detail: ExportDetail,

    #[serde(default)]
    pub pdf_mode: PdfMode,

    #[serde(default)]
    pub paper_size: PaperSize,

    #[serde(default)]
    pub orientation: Orientation,

    #[serde(default)]
    pub grayscale: bool,

    #[serde(default)]
    pub ink_saver: bool,

    #[serde(default = "default_true")]
    pub include_legend: bool,

    #[serde(default = "default_true")]
    pub include_progression_chart: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            detail: ExportDetail::default(),
            pdf_mode: PdfMode::default(),
            paper_size: PaperSize::default(),
            orientation: Orientation::default(),
            grayscale: false,
            ink_saver: false,
            include_legend: true,
            include_progression_chart: true,
        }
    }
}

impl ExportConfig {
    /// Export options seeded from the configured defaults, exporting all weeks
    pub fn to_options(&self) -> ExportOptions {
        ExportOptions {
            detail: self.detail,
            pdf_mode: self.pdf_mode,
            paper_size: self.paper_size,
            orientation: self.orientation,
            grayscale: self.grayscale,
            ink_saver: self.ink_saver,
            include_legend: self.include_legend,
            include_progression_chart: self.include_progression_chart,
            ..ExportOptions::default()
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => {
                let home = std::env::var("HOME").map_err(|_| {
                    Error::Config("Neither XDG_CONFIG_HOME nor HOME is set".to_string())
                })?;
                PathBuf::from(home).join(".config")
            }
        };
        Ok(base.join("mesocycle").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reject values that normalization would silently clamp
    fn validate(&self) -> Result<()> {
        let planner = &self.planner;
        if let Some(weeks) = planner.weeks {
            if !(4..=12).contains(&weeks) {
                return Err(Error::Config(format!(
                    "planner.weeks must be between 4 and 12, got {}",
                    weeks
                )));
            }
        }
        if let Some(sessions) = planner.sessions {
            if !(2..=6).contains(&sessions) {
                return Err(Error::Config(format!(
                    "planner.sessions must be between 2 and 6, got {}",
                    sessions
                )));
            }
        }
        if let Some(bias) = planner.mixed_bias {
            if bias > 100 {
                return Err(Error::Config(format!(
                    "planner.mixed_bias must be a percentage, got {}",
                    bias
                )));
            }
        }
        Ok(())
    }
}
