use crate::error::Result;
use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// User configuration, stored as `config.json` in the platform config directory.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TarotConfig {
    /// Card data file used when neither `--data` nor `TAROT_DATA` is given.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// `Some(false)` turns styled output off.
    #[serde(default)]
    pub color: Option<bool>,
}

/// Where the card catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Builtin,
}

impl TarotConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TarotConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Like [`TarotConfig::load`], but a broken file only costs a warning.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        let config_dir = config_dir.as_ref();
        Self::load(config_dir).unwrap_or_else(|e| {
            warn!("Ignoring config in {}: {}", config_dir.display(), e);
            Self::default()
        })
    }

    /// Picks the catalog source: an explicit path (flag or environment) wins over
    /// the configured file, which wins over the bundled data.
    pub fn data_source(&self, explicit: Option<&Path>) -> DataSource {
        match explicit.or(self.data_file.as_deref()) {
            Some(path) => DataSource::File(path.to_path_buf()),
            None => DataSource::Builtin,
        }
    }

    pub fn color_enabled(&self) -> bool {
        self.color.unwrap_or(true)
    }
}
