use std::path::PathBuf;

use thiserror::Error;

/// Failures of the host boundary. The annotation core itself cannot fail.
#[derive(Error, Debug)]
pub enum AnnotateError {
    #[error("Project base path not found: {}", .path.display())]
    BasePathNotFound { path: PathBuf },

    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Could not get document for file: {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File too large: {path} is {size} bytes, limit is {limit}")]
    FileTooLarge { path: String, size: u64, limit: u64 },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AnnotateResult<T> = Result<T, AnnotateError>;

impl AnnotateError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        AnnotateError::Config(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        AnnotateError::Internal(message.into())
    }

    /// Whether the file reference could not be mapped to a file at all.
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            AnnotateError::BasePathNotFound { .. } | AnnotateError::FileNotFound { .. }
        )
    }
}
