//! User profile and application configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// User profile with physiological data used by the strategy prompts and
/// the fitness view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Functional Threshold Power in watts (50-600)
    pub ftp: u16,
    /// Weight in kilograms
    pub weight_kg: f32,
    /// Profile creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Default for UserProfile {
    fn default() -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            name: "Rider One".to_string(),
            ftp: 265,
            weight_kg: 68.0,
            created_at: now,
            updated_at: now,
        }
    }
}

impl UserProfile {
    /// Create a new user profile with the given name.
    pub fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// Update FTP.
    pub fn set_ftp(&mut self, ftp: u16) -> Result<(), &'static str> {
        if !Self::validate_ftp(ftp) {
            return Err("FTP must be between 50 and 600 watts");
        }

        self.ftp = ftp;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Update weight.
    pub fn set_weight(&mut self, weight_kg: f32) -> Result<(), &'static str> {
        if !Self::validate_weight(weight_kg) {
            return Err("Weight must be between 30 and 200 kg");
        }

        self.weight_kg = weight_kg;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Validate FTP value (50-600 watts).
    pub fn validate_ftp(ftp: u16) -> bool {
        (50..=600).contains(&ftp)
    }

    /// Validate weight value (30-200 kg).
    pub fn validate_weight(weight: f32) -> bool {
        (30.0..=200.0).contains(&weight)
    }

    /// Power-to-weight ratio in W/kg.
    pub fn watts_per_kg(&self) -> f32 {
        if self.weight_kg <= 0.0 {
            return 0.0;
        }
        self.ftp as f32 / self.weight_kg
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// UI settings
    pub ui: UiSettings,
    /// Strategy API settings
    pub strategy: StrategySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            ui: UiSettings::default(),
            strategy: StrategySettings::default(),
        }
    }
}

/// UI-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font scale multiplier
    pub font_scale: f32,
    /// Show the simulated analysis overlay on the aero screen
    pub show_aero_overlay: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_scale: 1.0,
            show_aero_overlay: true,
        }
    }
}

/// Strategy API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategySettings {
    /// Model identifier used for text generation
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for StrategySettings {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "ttpro", "TT-Pro")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from file.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from a specific path.
pub fn load_config_from(path: &std::path::Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        let config = AppConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        };
        return Ok(config);
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = get_data_dir();

    Ok(config)
}

/// Save application configuration to file.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save application configuration to a specific path.
pub fn save_config_to(config: &AppConfig, path: &std::path::Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults() {
        let profile = UserProfile::default();
        assert_eq!(profile.ftp, 265);
        assert!((profile.watts_per_kg() - 3.897).abs() < 0.01);
    }

    #[test]
    fn test_ftp_validation() {
        let mut profile = UserProfile::default();
        assert!(profile.set_ftp(30).is_err());
        assert!(profile.set_ftp(700).is_err());
        assert!(profile.set_ftp(280).is_ok());
        assert_eq!(profile.ftp, 280);
    }

    #[test]
    fn test_weight_validation() {
        let mut profile = UserProfile::default();
        assert!(profile.set_weight(10.0).is_err());
        assert!(profile.set_weight(67.5).is_ok());
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.ui.font_scale = 1.25;
        config.strategy.model = "gemini-2.5-pro".to_string();

        save_config_to(&config, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();

        assert_eq!(loaded.ui.font_scale, 1.25);
        assert_eq!(loaded.strategy.model, "gemini-2.5-pro");
        assert!(loaded.ui.show_aero_overlay);
    }

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.strategy.api_key_env, "GEMINI_API_KEY");
    }
}
