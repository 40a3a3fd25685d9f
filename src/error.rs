use thiserror::Error;

use crate::groups::GroupParseError;

#[derive(Debug, Error)]
pub enum ChaoyinError {
    #[error("Malformed group entry: {0}")]
    Parse(#[from] GroupParseError),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    ConfigValue(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
