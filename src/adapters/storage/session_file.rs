//! File-based session snapshots
//!
//! Reads and writes an [`AhpSession`] as JSON or YAML, chosen by file
//! extension. Deserialization re-checks every matrix invariant, so a
//! hand-edited file cannot smuggle in a broken snapshot.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::session::AhpSession;

/// Errors from loading or saving a snapshot file
#[derive(Debug, Error)]
pub enum SessionFileError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported snapshot extension for {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("Invalid JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML snapshot: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SessionFileError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionFileError::UnsupportedFormat(_) => ErrorCode::UnsupportedFormat,
            SessionFileError::Io { .. }
            | SessionFileError::Json(_)
            | SessionFileError::Yaml(_) => ErrorCode::SnapshotUnreadable,
        }
    }
}

impl From<SessionFileError> for DomainError {
    fn from(err: SessionFileError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    fn from_path(path: &Path) -> Result<Self, SessionFileError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(SnapshotFormat::Json),
            Some("yaml") | Some("yml") => Ok(SnapshotFormat::Yaml),
            _ => Err(SessionFileError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Loads a session snapshot from `path`
pub fn load<P: AsRef<Path>>(path: P) -> Result<AhpSession, SessionFileError> {
    let path = path.as_ref();
    let format = SnapshotFormat::from_path(path)?;

    let contents = fs::read_to_string(path).map_err(|source| SessionFileError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let session = match format {
        SnapshotFormat::Json => serde_json::from_str(&contents)?,
        SnapshotFormat::Yaml => serde_yaml::from_str(&contents)?,
    };
    Ok(session)
}

/// Writes `session` to `path`, replacing any existing file
pub fn save<P: AsRef<Path>>(path: P, session: &AhpSession) -> Result<(), SessionFileError> {
    let path = path.as_ref();
    let contents = match SnapshotFormat::from_path(path)? {
        SnapshotFormat::Json => serde_json::to_string_pretty(session)?,
        SnapshotFormat::Yaml => serde_yaml::to_string(session)?,
    };

    fs::write(path, contents).map_err(|source| SessionFileError::Io {
        path: path.display().to_string(),
        source,
    })
}
