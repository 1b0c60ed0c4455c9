use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub animation: AnimationSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnimationSettings {
    pub layers: Option<usize>,
    pub interval_ms: Option<u64>,
    pub resolution: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DisplaySettings {
    pub show_table: Option<bool>,
}

impl Settings {
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                log::warn!("ignoring {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                log::warn!("cannot read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rainpuddle")
            .join("config.toml")
    }
}
