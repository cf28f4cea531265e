use std::path::PathBuf;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ConfigSource, FileConfigSource, Validate};

pub fn to_yaml<TConfig: Serialize>(config: &TConfig) -> Result<String, String> {
    serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
}

pub fn from_yaml<TConfig: DeserializeOwned>(content: &str) -> Result<TConfig, String> {
    serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
}

/// YAML config backed by a [`ConfigSource`], validated on every load and
/// save and cached after the first successful load.
pub struct ConfigStore<TSource, TConfig>
where
    TSource: ConfigSource,
    TConfig: Clone + DeserializeOwned + Serialize + Validate + Default,
{
    source: TSource,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigStore<FileConfigSource, TConfig>
where
    TConfig: Clone + DeserializeOwned + Serialize + Validate + Default,
{
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileConfigSource::new(path))
    }
}

impl<TSource, TConfig> ConfigStore<TSource, TConfig>
where
    TSource: ConfigSource,
    TConfig: Clone + DeserializeOwned + Serialize + Validate + Default,
{
    pub fn new(source: TSource) -> Self {
        Self {
            source,
            cached: Mutex::new(None),
        }
    }

    pub fn source(&self) -> &TSource {
        &self.source
    }

    /// Loads the config, falling back to `TConfig::default()` when the
    /// source is empty.
    pub fn load(&self) -> Result<TConfig, String> {
        let mut cached = self
            .cached
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.source.read()? else {
            return Ok(TConfig::default());
        };

        let config: TConfig = from_yaml(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn save(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        self.source.write(&to_yaml(config)?)?;

        let mut cached = self
            .cached
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *cached = Some(config.clone());
        Ok(())
    }
}
