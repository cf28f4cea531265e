use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use snake_common::config::{ConfigStore, FileConfigSource, Validate};
use snake_common::SnakeGameConfig;

use super::WindowConfig;

const CONFIG_FILE_NAME: &str = "snake_config.yaml";

pub type ConfigFileStore = ConfigStore<FileConfigSource, Config>;

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Opens the config next to the executable unless a path is given.
pub fn get_config_store(path: Option<PathBuf>) -> ConfigFileStore {
    ConfigStore::from_yaml_file(path.unwrap_or_else(default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: SnakeGameConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.window.validate()?;
        Ok(())
    }
}
