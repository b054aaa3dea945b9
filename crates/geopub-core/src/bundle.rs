//! Bundle packaging through an external archiver.
//!
//! A [`Bundle`] owns its archive file and removes it on drop, so every exit
//! path of a dataset iteration cleans up after itself.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::components::ComponentSet;
use crate::error::{GeoPubError, GeoPubResult};

/// Produces a flat zip archive from an ordered list of files.
#[async_trait]
pub trait Archiver: Send + Sync {
    async fn archive(&self, destination: &Path, sources: &[PathBuf]) -> GeoPubResult<()>;
}

/// Runs `zip -j -q <destination> <sources...>`.
#[derive(Debug, Clone)]
pub struct ZipCommand {
    program: PathBuf,
}

impl ZipCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

}

impl Default for ZipCommand {
    fn default() -> Self {
        Self::new("zip")
    }
}

#[async_trait]
impl Archiver for ZipCommand {
    async fn archive(&self, destination: &Path, sources: &[PathBuf]) -> GeoPubResult<()> {
        let output = Command::new(&self.program)
            .arg("-j")
            .arg("-q")
            .arg(destination)
            .args(sources)
            .output()
            .await
            .map_err(|e| {
                let message = if e.kind() == ErrorKind::NotFound {
                    format!("archiver '{}' not found", self.program.display())
                } else {
                    format!("failed to run archiver '{}': {}", self.program.display(), e)
                };
                GeoPubError::packaging(destination, message)
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GeoPubError::packaging(
                destination,
                format!("archiver exited with {}: {}", output.status, stderr.trim()),
            ));
        }

        Ok(())
    }
}

/// An archive file scoped to one dataset iteration.
#[derive(Debug)]
pub struct Bundle {
    path: PathBuf,
}

impl Bundle {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the archive bytes for upload.
    pub async fn read(&self) -> GeoPubResult<Vec<u8>> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| GeoPubError::packaging(&self.path, format!("cannot read bundle: {}", e)))
    }
}

impl Drop for Bundle {
    fn drop(&mut self) {
        remove_quietly(&self.path);
    }
}

/// Package `components` into `<dest_dir>/<name>.zip`.
///
/// Any existing file at the destination is removed first. On failure no
/// partial archive is left behind.
pub async fn package_bundle(
    archiver: &dyn Archiver,
    components: &ComponentSet,
    dest_dir: &Path,
    name: &str,
) -> GeoPubResult<Bundle> {
    let destination = dest_dir.join(format!("{}.zip", name));

    match fs::remove_file(&destination) {
        Ok(()) => debug!(path = %destination.display(), "removed stale bundle"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(GeoPubError::packaging(
                &destination,
                format!("cannot remove existing file: {}", e),
            ))
        }
    }

    let sources = components.paths();
    if let Err(e) = archiver.archive(&destination, &sources).await {
        remove_quietly(&destination);
        return Err(e);
    }

    if !destination.is_file() {
        return Err(GeoPubError::packaging(
            &destination,
            "archiver reported success but produced no file",
        ));
    }

    debug!(
        dataset = components.base_name(),
        path = %destination.display(),
        files = sources.len(),
        "bundle created"
    );
    Ok(Bundle { path: destination })
}

fn remove_quietly(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => debug!(path = %path.display(), "bundle removed"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "failed to remove bundle"),
    }
}
