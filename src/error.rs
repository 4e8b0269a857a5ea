use crate::interface::config::ConfigError;
use serde::{ser::Serializer, Serialize};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid declaration pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Code generation failed: {0}")]
    CodeGeneration(String),

    #[error("File type {0} not supported")]
    UnsupportedTestCase(String),
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}
