//! Configuration file support for Liftplan.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/liftplan/config.toml` and
//! carries the user's default generation parameters so the CLI can be run
//! without repeating flags.

use crate::types::{ExperienceLevel, GenerationParameters, TrainingFocus};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub equipment: EquipmentConfig,

    #[serde(default)]
    pub dislikes: DislikesConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Default generation parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_experience")]
    pub experience: ExperienceLevel,

    #[serde(default = "default_focus")]
    pub focus: TrainingFocus,

    #[serde(default = "default_weekly_availability")]
    pub weekly_availability: u32,

    #[serde(default = "default_duration_minutes")]
    pub preferred_duration_minutes: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            experience: default_experience(),
            focus: default_focus(),
            weekly_availability: default_weekly_availability(),
            preferred_duration_minutes: default_duration_minutes(),
        }
    }
}

/// Equipment availability configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EquipmentConfig {
    #[serde(default = "default_equipment")]
    pub available: Vec<String>,
}

impl Default for EquipmentConfig {
    fn default() -> Self {
        Self {
            available: default_equipment(),
        }
    }
}

/// Exercises the user never wants to see
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct DislikesConfig {
    #[serde(default)]
    pub exercises: Vec<String>,
}

/// Custom exercise catalog configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Path to a JSON catalog that replaces the built-in one
    #[serde(default)]
    pub path: Option<PathBuf>,
}

// Default value functions
fn default_experience() -> ExperienceLevel {
    ExperienceLevel::Beginner
}

fn default_focus() -> TrainingFocus {
    TrainingFocus::GeneralFitness
}

fn default_weekly_availability() -> u32 {
    3
}

fn default_duration_minutes() -> u32 {
    45
}

fn default_equipment() -> Vec<String> {
    vec!["bodyweight".into()]
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("liftplan").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Generation parameters built from the configured defaults
    pub fn params(&self) -> GenerationParameters {
        GenerationParameters {
            experience: self.defaults.experience,
            focus: self.defaults.focus,
            weekly_availability: self.defaults.weekly_availability,
            available_equipment: self.equipment.available.iter().cloned().collect(),
            disliked_exercises: self.dislikes.exercises.iter().cloned().collect(),
            preferred_duration_minutes: self.defaults.preferred_duration_minutes,
        }
    }
}
