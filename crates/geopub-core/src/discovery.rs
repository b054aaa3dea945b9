//! Dataset discovery: recursive scan for primary (`.shp`) files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::components::PRIMARY_EXTENSION;
use crate::error::{GeoPubError, GeoPubResult};

/// One dataset on disk, anchored by its primary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Absolute (or root-joined) path of the primary file.
    pub primary: PathBuf,
    /// Primary path relative to the discovery root, for reporting.
    pub relative_path: PathBuf,
    /// File stem of the primary file.
    pub base_name: String,
}

impl Dataset {
    pub fn from_primary(root: &Path, primary: PathBuf) -> Self {
        let relative_path = primary
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| primary.clone());
        let base_name = primary
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            primary,
            relative_path,
            base_name,
        }
    }
}

/// Find every primary file below `root`, in a single sorted traversal.
pub fn discover_datasets(root: &Path) -> GeoPubResult<Vec<Dataset>> {
    let metadata = fs::metadata(root).map_err(|e| GeoPubError::filesystem(root, e.to_string()))?;
    if !metadata.is_dir() {
        return Err(GeoPubError::filesystem(root, "not a directory"));
    }
    fs::read_dir(root).map_err(|e| GeoPubError::filesystem(root, e.to_string()))?;

    let mut datasets = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_file() && is_primary(entry.path()) {
            debug!(path = %entry.path().display(), "found dataset");
            datasets.push(Dataset::from_primary(root, entry.into_path()));
        }
    }

    Ok(datasets)
}

fn is_primary(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(PRIMARY_EXTENSION))
        .unwrap_or(false)
}
