//! Platform client for stores and feature types.
//!
//! Public API: no status code knowledge. All HTTP/status mapping in http.rs.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::Method;
use tracing::debug;
use url::Url;

use crate::error::{ClientError, ClientResult};
use crate::types::{
    CreateOutcome, FeatureType, FeatureTypeEnvelope, FeatureTypeLink, PlatformConfig,
    DEFAULT_LIST_COUNT,
};

pub(crate) mod helpers;
mod http;

use helpers::join_segments;
use http::{HttpBackend, ListOutcome, Payload};

/// User agent sent with every request.
pub const PLATFORM_USER_AGENT: &str = concat!("geopub-client/", env!("CARGO_PKG_VERSION"));

const RECALCULATE_QUERY: &str = "recalculate=nativebbox,latlonbbox";

/// Management API client.
///
/// The authorization header is computed once here and reused for every
/// request made through this client.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    http: HttpBackend,
}

impl PlatformClient {
    pub fn new(config: PlatformConfig) -> ClientResult<Self> {
        let (base_url, credentials) = config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(PLATFORM_USER_AGENT));
        default_headers.insert(AUTHORIZATION, credentials.header_value()?);

        let client = reqwest::Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(|e| ClientError::Network {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http: HttpBackend { client, base_url },
        })
    }

    /// Upload a zipped shapefile set, creating (or overwriting) `store`.
    ///
    /// The platform is told not to configure a layer; publishing is a
    /// separate step.
    pub async fn upload_store(
        &self,
        workspace: &str,
        store: &str,
        bundle: Vec<u8>,
        overwrite: bool,
    ) -> ClientResult<()> {
        let mut url = self.endpoint(&[
            "rest",
            "workspaces",
            workspace,
            "datastores",
            store,
            "file.shp",
        ])?;
        let query = if overwrite {
            "charset=UTF-8&configure=none&update=overwrite"
        } else {
            "charset=UTF-8&configure=none"
        };
        url.set_query(Some(query));
        debug!(store, bytes = bundle.len(), overwrite, "uploading store bundle");

        self.http
            .expect_success(Method::PUT, url, Payload::Zip(bundle))
            .await?;
        Ok(())
    }

    /// Create a feature type in `store`; a pre-existing one yields
    /// [`CreateOutcome::Conflict`].
    pub async fn create_feature_type(
        &self,
        workspace: &str,
        store: &str,
        feature_type: &FeatureType,
    ) -> ClientResult<CreateOutcome> {
        let mut url = self.endpoint(&[
            "rest",
            "workspaces",
            workspace,
            "datastores",
            store,
            "featuretypes",
        ])?;
        url.set_query(Some(RECALCULATE_QUERY));

        let envelope = FeatureTypeEnvelope {
            feature_type: feature_type.clone(),
        };
        self.http.create(url, &envelope).await
    }

    /// Replace the existing feature type `layer` in `store`.
    pub async fn update_feature_type(
        &self,
        workspace: &str,
        store: &str,
        layer: &str,
        feature_type: &FeatureType,
    ) -> ClientResult<()> {
        let mut url = self.endpoint(&[
            "rest",
            "workspaces",
            workspace,
            "datastores",
            store,
            "featuretypes",
            layer,
        ])?;
        url.set_query(Some(RECALCULATE_QUERY));

        let envelope = FeatureTypeEnvelope {
            feature_type: feature_type.clone(),
        };
        self.http
            .expect_success(Method::PUT, url, Payload::Json(&envelope))
            .await?;
        Ok(())
    }

    /// List feature types published in `workspace`. A missing workspace
    /// listing is an empty list, not an error.
    pub async fn list_feature_types(&self, workspace: &str) -> ClientResult<Vec<FeatureTypeLink>> {
        let mut url = self.endpoint(&["rest", "workspaces", workspace, "featuretypes.json"])?;
        url.set_query(Some(&format!("count={}&startIndex=0", DEFAULT_LIST_COUNT)));

        match self.http.list(url).await? {
            ListOutcome::Missing => Ok(Vec::new()),
            ListOutcome::Listed(links) => Ok(links),
        }
    }

    /// Derived WFS `GetFeature` URL for a published layer.
    pub fn wfs_url(&self, workspace: &str, layer: &str, max_features: u32) -> ClientResult<Url> {
        crate::wfs::wfs_url(&self.http.base_url, workspace, layer, max_features)
    }

    pub fn base_url(&self) -> &Url {
        &self.http.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        join_segments(&self.http.base_url, segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;

    fn client(url: &str) -> PlatformClient {
        let config = PlatformConfig::default()
            .with_url(url)
            .with_credentials(Credentials::new("admin", "pw"));
        PlatformClient::new(config).expect("client")
    }

    #[test]
    fn test_new_rejects_missing_url() {
        let config = PlatformConfig::default().with_credentials(Credentials::new("a", "b"));
        assert!(matches!(
            PlatformClient::new(config),
            Err(ClientError::Config { .. })
        ));
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = client("http://localhost:8080/geoserver/");
        let url = client
            .endpoint(&["rest", "workspaces", "ws", "datastores", "My_Parcels"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/geoserver/rest/workspaces/ws/datastores/My_Parcels"
        );
    }

    #[test]
    fn test_wfs_url_uses_base() {
        let client = client("https://maps.example.com/geoserver");
        let url = client.wfs_url("ws", "roads", 5).unwrap();
        assert!(url
            .as_str()
            .starts_with("https://maps.example.com/geoserver/wfs?service=WFS"));
        assert!(url.as_str().contains("typeNames=ws:roads"));
    }
}
