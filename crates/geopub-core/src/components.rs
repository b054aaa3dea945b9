//! Component grouping for one dataset.
//!
//! A sibling belongs to a dataset when its lowercase name is exactly
//! `<base>.<suffix>` for an allow-listed suffix. Matching stops at the
//! base-name boundary, so `lake_2.shx` is never grouped with `lake.shp`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GeoPubError, GeoPubResult};

/// Extension identifying a dataset's primary file.
pub const PRIMARY_EXTENSION: &str = "shp";

/// Components every dataset must have.
pub const MANDATORY_SUFFIXES: [&str; 3] = ["shp", "shx", "dbf"];

/// Recognized sidecar suffixes, in archive order.
pub const ALLOWED_SUFFIXES: &[&str] = &[
    "shp", "shx", "dbf", "prj", "cpg", "sbn", "sbx", "fbn", "fbx", "ain", "aih", "atx", "ixs",
    "mxs", "qix", "shp.xml", "aux.xml",
];

/// Suffix → path mapping for one directory and base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSet {
    base_name: String,
    members: BTreeMap<&'static str, PathBuf>,
}

impl ComponentSet {
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn get(&self, suffix: &str) -> Option<&Path> {
        self.members.get(suffix).map(PathBuf::as_path)
    }

    /// Member paths in allow-list order.
    pub fn paths(&self) -> Vec<PathBuf> {
        ALLOWED_SUFFIXES
            .iter()
            .filter_map(|suffix| self.members.get(suffix).cloned())
            .collect()
    }

    /// Mandatory suffixes with no member.
    pub fn missing_mandatory(&self) -> Vec<&'static str> {
        MANDATORY_SUFFIXES
            .iter()
            .copied()
            .filter(|suffix| self.get(suffix).is_none())
            .collect()
    }
}

/// Collect the components of the dataset anchored at `primary`.
///
/// Fails with `MissingComponent` if any mandatory suffix is absent.
pub fn group_components(primary: &Path) -> GeoPubResult<ComponentSet> {
    let dir = primary
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let base_name = primary
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base_lower = base_name.to_lowercase();

    let mut names: Vec<String> = fs::read_dir(&dir)
        .map_err(|e| GeoPubError::filesystem(&dir, e.to_string()))?
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().map(|t| !t.is_dir()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    // Case-only duplicates resolve to the lexicographically first name.
    names.sort();

    let mut members = BTreeMap::new();
    for name in names {
        if let Some(suffix) = match_suffix(&name.to_lowercase(), &base_lower) {
            members.entry(suffix).or_insert_with(|| dir.join(&name));
        }
    }

    let set = ComponentSet {
        base_name,
        members,
    };

    let missing = set.missing_mandatory();
    if !missing.is_empty() {
        return Err(GeoPubError::MissingComponent {
            primary: primary.to_path_buf(),
            missing: missing.into_iter().map(|s| format!(".{}", s)).collect(),
        });
    }

    Ok(set)
}

fn match_suffix(name_lower: &str, base_lower: &str) -> Option<&'static str> {
    let rest = name_lower.strip_prefix(base_lower)?.strip_prefix('.')?;
    ALLOWED_SUFFIXES.iter().copied().find(|suffix| *suffix == rest)
}
