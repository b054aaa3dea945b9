//! Layer publishing: create, and on conflict either skip or update.
//!
//! ```text
//! POST featuretypes ──2xx──▶ Created
//!        │
//!        ├──409──▶ overwrite? ──no──▶ Skipped
//!        │                 └──yes──▶ PUT featuretypes/{layer} ──2xx──▶ Updated
//!        │                                                 └─else──▶ Failed
//!        └──else─▶ Failed
//! ```

use std::fmt;

use geopub_client::CreateOutcome;
use tracing::info;

use crate::error::GeoPubError;
use crate::naming::PublishTarget;
use crate::platform::Platform;

/// Terminal state of one dataset.
#[derive(Debug)]
pub enum PublishOutcome {
    /// The layer did not exist and was created.
    Created,
    /// The layer existed and was replaced (overwrite enabled).
    Updated,
    /// The layer existed and overwrite is disabled.
    Skipped,
    /// Any per-item failure.
    Failed(GeoPubError),
}

impl PublishOutcome {
    pub fn error(&self) -> Option<&GeoPubError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for PublishOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Updated => write!(f, "updated"),
            Self::Skipped => write!(f, "skipped"),
            Self::Failed(err) => write!(f, "failed: {}", err),
        }
    }
}

/// Ensure `target.layer_name` exists and is enabled in the target store.
pub async fn publish_layer(
    platform: &dyn Platform,
    target: &PublishTarget,
    overwrite: bool,
) -> PublishOutcome {
    let feature_type = target.feature_type();
    let publish_error = |source| GeoPubError::Publish {
        layer: target.layer_name.clone(),
        source,
    };

    let created = platform
        .create_feature_type(&target.workspace, &target.store_name, &feature_type)
        .await;

    match created {
        Ok(CreateOutcome::Created) => PublishOutcome::Created,
        Ok(CreateOutcome::Conflict) if !overwrite => {
            info!(
                layer = %target.layer_name,
                "layer already exists; skipping (overwrite disabled)"
            );
            PublishOutcome::Skipped
        }
        Ok(CreateOutcome::Conflict) => {
            info!(layer = %target.layer_name, "layer already exists; updating");
            match platform
                .update_feature_type(
                    &target.workspace,
                    &target.store_name,
                    &target.layer_name,
                    &feature_type,
                )
                .await
            {
                Ok(()) => PublishOutcome::Updated,
                Err(source) => PublishOutcome::Failed(publish_error(source)),
            }
        }
        Err(source) => PublishOutcome::Failed(publish_error(source)),
    }
}
