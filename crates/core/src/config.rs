use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::paths;

pub const HUGGINGFACE_BASE: &str = "https://huggingface.co";
pub const SILERO_URL: &str =
    "https://raw.githubusercontent.com/snakers4/silero-vad/master/src/silero_vad/data/silero_vad.onnx";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Where models are installed
    #[serde(default)]
    pub models: ModelsConfig,

    /// Remote hosts files are fetched from
    #[serde(default)]
    pub sources: SourcesConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelsConfig {
    /// Base models directory (default: platform-specific Dictum models dir)
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_huggingface_base")]
    pub huggingface_base: String,

    #[serde(default = "default_silero_url")]
    pub silero_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Connect and idle-read timeout. Total transfer time is unbounded since
    /// model files run to hundreds of megabytes.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_huggingface_base() -> String {
    HUGGINGFACE_BASE.to_string()
}

fn default_silero_url() -> String {
    SILERO_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_user_agent() -> String {
    concat!("dictum-models/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            huggingface_base: default_huggingface_base(),
            silero_url: default_silero_url(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load config from an explicit TOML file. The file must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the base models directory: explicit override, then config, then platform default.
    pub fn models_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.models.directory.clone())
            .unwrap_or_else(paths::default_models_dir)
    }
}
