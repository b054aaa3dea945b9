//! Request/response types for the management API.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::auth::Credentials;
use crate::error::{ClientError, ClientResult};

/// Page size used when listing feature types.
pub const DEFAULT_LIST_COUNT: u32 = 10_000;

/// Feature-type descriptor sent on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureType {
    /// Published layer name.
    pub name: String,

    /// Underlying table name inside the store.
    #[serde(rename = "nativeName")]
    pub native_name: String,

    /// Whether the layer is enabled.
    pub enabled: bool,
}

impl FeatureType {
    /// Enabled descriptor for `name` backed by `native_name`.
    pub fn new(name: impl Into<String>, native_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            native_name: native_name.into(),
            enabled: true,
        }
    }
}

/// Wire wrapper: `{"featureType": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureTypeEnvelope {
    #[serde(rename = "featureType")]
    pub feature_type: FeatureType,
}

/// Result of a feature-type create request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The feature type was created.
    Created,

    /// A feature type with that name already exists (409).
    Conflict,
}

/// One entry of the feature-type listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureTypeLink {
    pub name: String,

    #[serde(default)]
    pub href: Option<String>,
}

/// Response from `GET .../featuretypes.json`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FeatureTypesResponse {
    #[serde(rename = "featureTypes")]
    pub feature_types: FeatureTypesBody,
}

/// The listing body is an object when populated and an empty string when not.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum FeatureTypesBody {
    Listed {
        #[serde(rename = "featureType", default)]
        feature_type: Vec<FeatureTypeLink>,
    },
    Empty(String),
}

impl FeatureTypesResponse {
    pub(crate) fn into_links(self) -> Vec<FeatureTypeLink> {
        match self.feature_types {
            FeatureTypesBody::Listed { feature_type } => feature_type,
            FeatureTypesBody::Empty(_) => Vec::new(),
        }
    }
}

/// Platform connection configuration.
#[derive(Debug, Clone, Default)]
pub struct PlatformConfig {
    /// Base URL of the platform (e.g. `http://localhost:8080/geoserver`).
    pub url: Option<String>,

    /// Management API credentials.
    pub credentials: Option<Credentials>,
}

impl PlatformConfig {
    /// Set the base URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the credentials.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Check that the URL parses as a hierarchical http(s) URL and that
    /// credentials are present.
    pub fn validate(&self) -> ClientResult<(Url, Credentials)> {
        let raw = self
            .url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ClientError::Config {
                message: "platform URL is not set".into(),
            })?;

        let url = Url::parse(raw).map_err(|e| ClientError::Config {
            message: format!("invalid platform URL '{}': {}", raw, e),
        })?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ClientError::Config {
                message: format!("platform URL must be http(s): {}", raw),
            });
        }

        let credentials = self.credentials.clone().ok_or_else(|| ClientError::Config {
            message: "platform credentials are not set".into(),
        })?;

        Ok((url, credentials))
    }
}
