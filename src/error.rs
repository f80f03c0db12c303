use std::path::{Path, PathBuf};

/// Failures surfaced by fixture generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("fixture {path:?} already exists")]
    AlreadyExists { path: PathBuf },

    #[error("invalid configuration for {parameter}: {reason}")]
    InvalidConfiguration {
        parameter: &'static str,
        reason: String,
    },

    #[error("I/O failure on {path:?}: {operation}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
}

impl GenerateError {
    pub fn invalid(
        parameter: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        GenerateError::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }

    pub fn io(
        operation: &'static str,
        path: &Path,
        source: std::io::Error,
    ) -> Self {
        GenerateError::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Process exit code for this failure; 2 matches clap's usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            GenerateError::Io { .. } => 1,
            GenerateError::InvalidConfiguration { .. } => 2,
            GenerateError::AlreadyExists { .. } => 3,
        }
    }
}

pub type Result<T, E = GenerateError> = std::result::Result<T, E>;
