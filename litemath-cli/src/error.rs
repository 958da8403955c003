//! CLI errors

use litemath_axis::AxisError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Axis(#[from] AxisError),
}

impl CliError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        CliError::Io { path: path.into(), source }
    }
}
