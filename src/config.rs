use std::path::Path;

use crate::error::ConfigError;

/// Whether the computer takes Blue's turns. Read once per match; changing
/// it mid-match is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    SinglePlayer,
    Multiplayer,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::SinglePlayer => "1 Player",
            GameMode::Multiplayer => "2 Players",
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub mode: GameMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            mode: GameMode::SinglePlayer,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if
    /// the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
