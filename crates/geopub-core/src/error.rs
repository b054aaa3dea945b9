//! Error types for the publish workflow.
//!
//! Fatal kinds (`Configuration`, `FileSystem`) abort the run before any
//! dataset is touched. Everything else is per-item: the batch driver records
//! it against the offending dataset and moves on.

use std::path::PathBuf;

use geopub_client::ClientError;

/// Publish workflow errors.
#[derive(Debug, thiserror::Error)]
pub enum GeoPubError {
    /// Required connection settings are missing or invalid.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// The dataset root (or a temp resource) is inaccessible.
    #[error("filesystem error at {}: {message}", .path.display())]
    FileSystem { path: PathBuf, message: String },

    /// A dataset lacks one or more mandatory sidecar files.
    #[error("missing mandatory component(s) {} for {}", .missing.join(", "), .primary.display())]
    MissingComponent {
        primary: PathBuf,
        missing: Vec<String>,
    },

    /// The dataset's base name sanitizes to an empty or dot-only store or
    /// layer name, which cannot address a resource of its own.
    #[error("dataset {} yields unusable name '{name}'", .primary.display())]
    InvalidName { primary: PathBuf, name: String },

    /// The archiver is unavailable or failed.
    #[error("packaging {} failed: {message}", .bundle.display())]
    Packaging { bundle: PathBuf, message: String },

    /// Store creation was rejected or could not be sent.
    #[error("upload of store '{store}' failed: {source}")]
    Upload {
        store: String,
        #[source]
        source: ClientError,
    },

    /// Feature-type create (non-409) or update failed.
    #[error("publishing layer '{layer}' failed: {source}")]
    Publish {
        layer: String,
        #[source]
        source: ClientError,
    },
}

impl GeoPubError {
    /// Whether the error aborts the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::FileSystem { .. })
    }

    /// HTTP status carried by upload/publish failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upload { source, .. } | Self::Publish { source, .. } => source.status(),
            _ => None,
        }
    }

    pub(crate) fn filesystem(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FileSystem {
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn packaging(bundle: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Packaging {
            bundle: bundle.into(),
            message: message.into(),
        }
    }
}

/// Result type for publish workflow operations.
pub type GeoPubResult<T> = Result<T, GeoPubError>;
