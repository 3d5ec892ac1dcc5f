use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use super::types::{Difficulty, GridSize};

pub const CONFIG_FILE_NAME: &str = "tictactoe_settings.yaml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Player preferences that survive between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub theme: Theme,
    pub sound_enabled: bool,
    pub ai_difficulty: Difficulty,
    pub grid_size: u8,
}

impl GameSettings {
    pub fn grid_size(&self) -> Result<GridSize, String> {
        GridSize::try_from(self.grid_size)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            sound_enabled: true,
            ai_difficulty: Difficulty::Medium,
            grid_size: GridSize::Three.into(),
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        self.grid_size().map(|_| ())
    }
}

pub type SettingsManager =
    ConfigManager<FileContentConfigProvider, GameSettings, YamlConfigSerializer>;

/// Settings file next to the executable, or in the working directory when the
/// executable path is unavailable.
pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(path: impl Into<PathBuf>) -> SettingsManager {
    ConfigManager::from_yaml_file(path)
}
