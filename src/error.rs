use std::fmt;

/// Error type for loading and remapping tile data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemapError {
    InvalidInput(String),
}

impl fmt::Display for RemapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemapError::InvalidInput(reason) => write!(f, "Invalid input: {}", reason),
        }
    }
}

impl std::error::Error for RemapError {}

impl From<serde_json::Error> for RemapError {
    fn from(err: serde_json::Error) -> Self {
        RemapError::InvalidInput(err.to_string())
    }
}
