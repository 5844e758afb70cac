use derive_more::From;

use foundation_datasets::{DatasetError, ErrorKind};

use crate::config::ConfigError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_TYPE: u8 = 3;
pub const EXIT_RANGE: u8 = 4;
pub const EXIT_EMPTY_STATE: u8 = 5;
pub const EXIT_FORMAT: u8 = 6;

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(From, Debug)]
pub enum CliError {
    Dataset(DatasetError),
    Config(ConfigError),

    #[from(ignore)]
    Output(serde_json::Error),

    #[from(ignore)]
    Logging(String),
}

impl CliError {
    /// Each dataset error kind gets its own exit status so scripts can tell
    /// bad input apart from an empty dataset or a malformed name.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Dataset(err) => match err.kind() {
                ErrorKind::Type => EXIT_TYPE,
                ErrorKind::Range => EXIT_RANGE,
                ErrorKind::EmptyState => EXIT_EMPTY_STATE,
                ErrorKind::Format => EXIT_FORMAT,
            },
            Self::Config(_) | Self::Output(_) | Self::Logging(_) => EXIT_FAILURE,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}

impl std::error::Error for CliError {}

impl core::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dataset(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "configuration error: {err}"),
            Self::Output(err) => write!(f, "failed to render output: {err}"),
            Self::Logging(err) => write!(f, "failed to install logger: {err}"),
        }
    }
}
