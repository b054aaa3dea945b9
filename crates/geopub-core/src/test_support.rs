//! In-memory doubles for the platform and the archiver.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use geopub_client::{ClientError, ClientResult, CreateOutcome, FeatureType};

use crate::bundle::Archiver;
use crate::error::{GeoPubError, GeoPubResult};
use crate::platform::Platform;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Upload { store: String, overwrite: bool },
    Create(String),
    Update(String),
}

#[derive(Default)]
pub(crate) struct FakePlatform {
    calls: Mutex<Vec<Call>>,
    existing_layers: HashSet<String>,
    failing_uploads: HashSet<String>,
    failing_creates: HashMap<String, u16>,
    failing_update: Option<u16>,
}

impl FakePlatform {
    pub(crate) fn with_existing_layer(mut self, layer: &str) -> Self {
        self.existing_layers.insert(layer.to_string());
        self
    }

    pub(crate) fn with_failing_upload(mut self, store: &str) -> Self {
        self.failing_uploads.insert(store.to_string());
        self
    }

    pub(crate) fn with_failing_create(mut self, layer: &str, status: u16) -> Self {
        self.failing_creates.insert(layer.to_string(), status);
        self
    }

    pub(crate) fn with_failing_update(mut self, status: u16) -> Self {
        self.failing_update = Some(status);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn uploads(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Upload { .. }))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn status(status: u16) -> ClientError {
    ClientError::Status {
        status,
        body: "rejected".into(),
    }
}

#[async_trait]
impl Platform for FakePlatform {
    async fn upload_store(
        &self,
        _workspace: &str,
        store: &str,
        _bundle: Vec<u8>,
        overwrite: bool,
    ) -> ClientResult<()> {
        self.record(Call::Upload {
            store: store.to_string(),
            overwrite,
        });
        if self.failing_uploads.contains(store) {
            return Err(status(500));
        }
        Ok(())
    }

    async fn create_feature_type(
        &self,
        _workspace: &str,
        _store: &str,
        feature_type: &FeatureType,
    ) -> ClientResult<CreateOutcome> {
        self.record(Call::Create(feature_type.name.clone()));
        if let Some(code) = self.failing_creates.get(&feature_type.name) {
            return Err(status(*code));
        }
        if self.existing_layers.contains(&feature_type.name) {
            Ok(CreateOutcome::Conflict)
        } else {
            Ok(CreateOutcome::Created)
        }
    }

    async fn update_feature_type(
        &self,
        _workspace: &str,
        _store: &str,
        layer: &str,
        _feature_type: &FeatureType,
    ) -> ClientResult<()> {
        self.record(Call::Update(layer.to_string()));
        match self.failing_update {
            Some(code) => Err(status(code)),
            None => Ok(()),
        }
    }
}

/// Writes the concatenated sources to the destination.
///
/// Also tracks whether earlier bundles were still on disk when the next one
/// was requested, which would mean a bundle outlived its iteration.
#[derive(Default)]
pub(crate) struct FakeArchiver {
    fail: bool,
    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    unreadable: bool,
    produced: Mutex<Vec<PathBuf>>,
    leaked: Mutex<usize>,
    existing_destination: Mutex<usize>,
    calls: Mutex<usize>,
}

impl FakeArchiver {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Produces a bundle that exists as a file but fails on read.
    #[cfg(target_os = "linux")]
    pub(crate) fn unreadable() -> Self {
        Self {
            unreadable: true,
            ..Default::default()
        }
    }

    pub(crate) fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    pub(crate) fn leaked(&self) -> usize {
        *self.leaked.lock().unwrap()
    }

    pub(crate) fn saw_existing_destination(&self) -> usize {
        *self.existing_destination.lock().unwrap()
    }

    pub(crate) fn produced(&self) -> Vec<PathBuf> {
        self.produced.lock().unwrap().clone()
    }
}

#[async_trait]
impl Archiver for FakeArchiver {
    async fn archive(&self, destination: &Path, sources: &[PathBuf]) -> GeoPubResult<()> {
        *self.calls.lock().unwrap() += 1;
        if destination.exists() {
            *self.existing_destination.lock().unwrap() += 1;
        }
        let still_present = self
            .produced
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.exists())
            .count();
        *self.leaked.lock().unwrap() += still_present;

        if self.fail {
            fs::write(destination, b"partial").ok();
            return Err(GeoPubError::Packaging {
                bundle: destination.to_path_buf(),
                message: "archiver exited with exit status: 12".into(),
            });
        }

        #[cfg(target_os = "linux")]
        if self.unreadable {
            // Reading offset 0 of the process image fails with EIO.
            std::os::unix::fs::symlink("/proc/self/mem", destination).map_err(|e| {
                GeoPubError::Packaging {
                    bundle: destination.to_path_buf(),
                    message: e.to_string(),
                }
            })?;
            self.produced.lock().unwrap().push(destination.to_path_buf());
            return Ok(());
        }

        let mut bytes = b"PK".to_vec();
        for source in sources {
            bytes.extend(fs::read(source).unwrap_or_default());
        }
        fs::write(destination, bytes).map_err(|e| GeoPubError::Packaging {
            bundle: destination.to_path_buf(),
            message: e.to_string(),
        })?;
        self.produced.lock().unwrap().push(destination.to_path_buf());
        Ok(())
    }
}
