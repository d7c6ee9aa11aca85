use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FigsumError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Figma export is missing the top-level `document` field")]
    MissingDocument,

    #[error("Invalid config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FigsumError {
    pub fn config(message: impl Into<String>) -> Self {
        FigsumError::Config(message.into())
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FigsumError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FigsumError::Io(_)
            | FigsumError::Read { .. }
            | FigsumError::Serialization(_)
            | FigsumError::MissingDocument => ErrorCategory::Input,
            FigsumError::ConfigParse { .. } | FigsumError::Config(_) => {
                ErrorCategory::Config
            }
        }
    }

    pub fn remediation(&self) -> &'static str {
        match self {
            FigsumError::Io(e) | FigsumError::Read { source: e, .. }
                if e.kind() == std::io::ErrorKind::NotFound =>
            {
                "Verify the file exists; use an absolute path or run from the working directory."
            }
            FigsumError::Io(_) | FigsumError::Read { .. } => "Check file paths/permissions.",
            FigsumError::Serialization(_) => {
                "Make sure the input is a complete Figma file export (GET /v1/files/<key>) saved as JSON."
            }
            FigsumError::MissingDocument => {
                "Export the whole file rather than a node response; the root object needs a `document` key."
            }
            FigsumError::ConfigParse { .. } => {
                "Fix the TOML syntax; see [walker], [classifier] and [render] sections."
            }
            FigsumError::Config(_) => {
                "Check config values (heading_min_size >= subhead_min_size >= 0, parent_depth >= 1)."
            }
        }
    }

    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload {
            category: self.category(),
            message: self.to_string(),
            remediation: Some(self.remediation().to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, FigsumError>;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Input,
    Config,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}
