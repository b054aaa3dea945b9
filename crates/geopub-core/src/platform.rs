//! The seam between the workflow and the management API.

use async_trait::async_trait;
use geopub_client::{ClientResult, CreateOutcome, FeatureType, PlatformClient};

/// Remote operations the publish workflow needs.
#[async_trait]
pub trait Platform: Send + Sync {
    async fn upload_store(
        &self,
        workspace: &str,
        store: &str,
        bundle: Vec<u8>,
        overwrite: bool,
    ) -> ClientResult<()>;

    async fn create_feature_type(
        &self,
        workspace: &str,
        store: &str,
        feature_type: &FeatureType,
    ) -> ClientResult<CreateOutcome>;

    async fn update_feature_type(
        &self,
        workspace: &str,
        store: &str,
        layer: &str,
        feature_type: &FeatureType,
    ) -> ClientResult<()>;
}

#[async_trait]
impl Platform for PlatformClient {
    async fn upload_store(
        &self,
        workspace: &str,
        store: &str,
        bundle: Vec<u8>,
        overwrite: bool,
    ) -> ClientResult<()> {
        PlatformClient::upload_store(self, workspace, store, bundle, overwrite).await
    }

    async fn create_feature_type(
        &self,
        workspace: &str,
        store: &str,
        feature_type: &FeatureType,
    ) -> ClientResult<CreateOutcome> {
        PlatformClient::create_feature_type(self, workspace, store, feature_type).await
    }

    async fn update_feature_type(
        &self,
        workspace: &str,
        store: &str,
        layer: &str,
        feature_type: &FeatureType,
    ) -> ClientResult<()> {
        PlatformClient::update_feature_type(self, workspace, store, layer, feature_type).await
    }
}
