//! Batch driver: one dataset at a time, in discovery order.
//!
//! Per dataset: group → package → upload → publish. Per-item failures are
//! recorded in the [`BatchReport`] and never stop the loop; only discovery
//! and temp-directory errors abort the run.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{info, warn};

use crate::bundle::{package_bundle, Archiver};
use crate::components::group_components;
use crate::discovery::{discover_datasets, Dataset};
use crate::error::{GeoPubError, GeoPubResult};
use crate::naming::{NamingRules, PublishTarget};
use crate::platform::Platform;
use crate::publish::{publish_layer, PublishOutcome};
use crate::upload::upload_bundle;

/// Everything a run needs besides the platform and the archiver.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub root: PathBuf,
    pub workspace: String,
    pub naming: NamingRules,
    pub overwrite: bool,
    /// Parent for the run's temp directory (system default when unset).
    pub temp_parent: Option<PathBuf>,
}

impl BatchConfig {
    pub fn new(root: impl Into<PathBuf>, workspace: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            workspace: workspace.into(),
            naming: NamingRules::default(),
            overwrite: false,
            temp_parent: None,
        }
    }

    pub fn with_store_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.naming.store_prefix = Some(prefix.into());
        self
    }

    pub fn with_layer_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.naming.layer_prefix = Some(prefix.into());
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_temp_parent(mut self, parent: impl Into<PathBuf>) -> Self {
        self.temp_parent = Some(parent.into());
        self
    }
}

/// Outcome for one dataset.
#[derive(Debug)]
pub struct DatasetReport {
    pub relative_path: PathBuf,
    pub store_name: String,
    pub layer_name: String,
    pub outcome: PublishOutcome,
}

/// Outcomes for a whole run, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub datasets: Vec<DatasetReport>,
    pub uploads_attempted: usize,
}

impl BatchReport {
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, PublishOutcome::Created))
    }

    pub fn updated(&self) -> usize {
        self.count(|o| matches!(o, PublishOutcome::Updated))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, PublishOutcome::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, PublishOutcome::Failed(_)))
    }

    /// Failures caused by a missing mandatory component; a subset of
    /// [`failed`](Self::failed).
    pub fn incomplete(&self) -> usize {
        self.count(|o| {
            matches!(
                o,
                PublishOutcome::Failed(GeoPubError::MissingComponent { .. })
            )
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = &DatasetReport> {
        self.datasets
            .iter()
            .filter(|d| matches!(d.outcome, PublishOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&PublishOutcome) -> bool) -> usize {
        self.datasets.iter().filter(|d| pred(&d.outcome)).count()
    }
}

/// Sequential publish driver.
pub struct BatchDriver<'a> {
    config: BatchConfig,
    platform: &'a dyn Platform,
    archiver: &'a dyn Archiver,
}

impl<'a> BatchDriver<'a> {
    pub fn new(config: BatchConfig, platform: &'a dyn Platform, archiver: &'a dyn Archiver) -> Self {
        Self {
            config,
            platform,
            archiver,
        }
    }

    /// Process every dataset under the configured root.
    pub async fn run(&self) -> GeoPubResult<BatchReport> {
        let datasets = discover_datasets(&self.config.root)?;
        let mut report = BatchReport::default();

        if datasets.is_empty() {
            info!(root = %self.config.root.display(), "no datasets found");
            return Ok(report);
        }
        info!(
            root = %self.config.root.display(),
            count = datasets.len(),
            "discovered datasets"
        );

        let temp_dir = self.create_temp_dir()?;

        for dataset in &datasets {
            let target =
                PublishTarget::new(&self.config.workspace, &dataset.base_name, &self.config.naming);
            let outcome = self
                .process(dataset, &target, temp_dir.path(), &mut report.uploads_attempted)
                .await
                .unwrap_or_else(PublishOutcome::Failed);

            log_outcome(dataset, &target, &outcome);
            report.datasets.push(DatasetReport {
                relative_path: dataset.relative_path.clone(),
                store_name: target.store_name,
                layer_name: target.layer_name,
                outcome,
            });
        }

        let temp_path = temp_dir.path().to_path_buf();
        if let Err(e) = temp_dir.close() {
            warn!(path = %temp_path.display(), error = %e, "failed to remove temp directory");
        }

        Ok(report)
    }

    async fn process(
        &self,
        dataset: &Dataset,
        target: &PublishTarget,
        temp_dir: &Path,
        uploads_attempted: &mut usize,
    ) -> GeoPubResult<PublishOutcome> {
        target.check(&dataset.primary)?;
        let components = group_components(&dataset.primary)?;
        let bundle =
            package_bundle(self.archiver, &components, temp_dir, &target.store_name).await?;
        let bytes = bundle.read().await?;

        *uploads_attempted += 1;
        upload_bundle(self.platform, target, bytes, self.config.overwrite).await?;

        Ok(publish_layer(self.platform, target, self.config.overwrite).await)
    }

    fn create_temp_dir(&self) -> GeoPubResult<TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("geopub-");
        let created = match &self.config.temp_parent {
            Some(parent) => builder.tempdir_in(parent),
            None => builder.tempdir(),
        };
        created.map_err(|e| {
            let location = self
                .config
                .temp_parent
                .clone()
                .unwrap_or_else(std::env::temp_dir);
            GeoPubError::filesystem(location, format!("cannot create temp directory: {}", e))
        })
    }
}

fn log_outcome(dataset: &Dataset, target: &PublishTarget, outcome: &PublishOutcome) {
    let path = dataset.relative_path.display();
    match outcome {
        PublishOutcome::Created => {
            info!(dataset = %path, layer = %target.layer_name, "layer published")
        }
        PublishOutcome::Updated => {
            info!(dataset = %path, layer = %target.layer_name, "layer updated")
        }
        PublishOutcome::Skipped => {
            info!(dataset = %path, layer = %target.layer_name, "layer skipped")
        }
        PublishOutcome::Failed(err) => warn!(dataset = %path, error = %err, "dataset failed"),
    }
}
