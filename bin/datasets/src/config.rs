use derive_more::derive::From;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use foundation_datasets::{DEFAULT_SAMPLE_HIGH, DEFAULT_SAMPLE_LOW};

#[derive(Debug, From)]
pub enum ConfigError {
    #[from(ignore)]
    IOError(std::io::Error),

    #[from(ignore)]
    DeserializationFailed(toml::de::Error),

    InvalidPath(std::path::PathBuf),

    #[from(ignore)]
    UnknownLogLevel(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::DeserializationFailed(value)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::IOError(value)
    }
}

impl std::error::Error for ConfigError {}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub size: usize,
    /// Unset means a fresh seed from the operating system per run.
    pub seed: Option<u64>,
    pub low: i64,
    pub high: i64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            size: 3,
            seed: None,
            low: DEFAULT_SAMPLE_LOW,
            high: DEFAULT_SAMPLE_HIGH,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// `DatasetsConfig` is the optional `datasets.toml` the CLI reads through
/// `--config`. Every section and key may be omitted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatasetsConfig {
    pub log_level: String,
    pub sampling: SamplingConfig,
    pub output: OutputConfig,
}

impl Default for DatasetsConfig {
    fn default() -> Self {
        Self {
            log_level: String::from("warn"),
            sampling: SamplingConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl DatasetsConfig {
    pub fn tracing_level(&self) -> ConfigResult<tracing::Level> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }

    /// Loads `target` when given, otherwise falls back to defaults.
    pub fn load(target: Option<&std::path::Path>) -> ConfigResult<Self> {
        match target {
            Some(path) => from_path(path),
            None => Ok(Self::default()),
        }
    }
}

pub fn from_path<T, V>(target: V) -> ConfigResult<T>
where
    T: DeserializeOwned,
    V: Into<std::path::PathBuf>,
{
    let target_path = target.into();
    if !target_path.is_file() {
        return Err(ConfigError::InvalidPath(target_path));
    }

    let config_content = std::fs::read_to_string(&target_path)?;
    let config_obj: T = toml::from_str(&config_content)?;
    tracing::debug!(path = %target_path.display(), "loaded configuration");
    Ok(config_obj)
}
