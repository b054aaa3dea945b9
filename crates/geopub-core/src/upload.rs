use tracing::info;

use crate::error::{GeoPubError, GeoPubResult};
use crate::naming::PublishTarget;
use crate::platform::Platform;

/// Send the archive bytes as the contents of the target store.
pub async fn upload_bundle(
    platform: &dyn Platform,
    target: &PublishTarget,
    bytes: Vec<u8>,
    overwrite: bool,
) -> GeoPubResult<()> {
    platform
        .upload_store(&target.workspace, &target.store_name, bytes, overwrite)
        .await
        .map_err(|source| GeoPubError::Upload {
            store: target.store_name.clone(),
            source,
        })?;
    info!(workspace = %target.workspace, store = %target.store_name, "store uploaded");
    Ok(())
}
