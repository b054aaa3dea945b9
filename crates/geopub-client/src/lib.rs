//! REST management API client for a map-serving platform.
//!
//! This crate implements the HTTP side of the publish workflow:
//!
//! - Basic authentication built once from a username/password pair
//! - Store upload (`PUT .../datastores/{store}/file.shp`)
//! - Feature-type create and update with bounding-box recalculation
//! - Feature-type listing and derived WFS query URLs
//!
//! # Quick Start
//!
//! ```no_run
//! use geopub_client::{Credentials, FeatureType, PlatformClient, PlatformConfig};
//!
//! # async fn example() -> Result<(), geopub_client::ClientError> {
//! let config = PlatformConfig::default()
//!     .with_url("http://localhost:8080/geoserver")
//!     .with_credentials(Credentials::new("admin", "geoserver"));
//! let client = PlatformClient::new(config)?;
//!
//! let bundle = std::fs::read("/tmp/parcels.zip").unwrap_or_default();
//! client.upload_store("topp", "parcels", bundle, false).await?;
//! client
//!     .create_feature_type("topp", "parcels", &FeatureType::new("parcels", "parcels"))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Status codes are interpreted only inside the HTTP layer; callers see
//! [`CreateOutcome`] and [`ClientError`] values.

pub mod auth;
pub mod client;
pub mod error;
pub mod types;
pub mod wfs;

pub use auth::Credentials;
pub use client::{PlatformClient, PLATFORM_USER_AGENT};
pub use error::{ClientError, ClientResult};
pub use types::{
    CreateOutcome, FeatureType, FeatureTypeEnvelope, FeatureTypeLink, PlatformConfig,
    DEFAULT_LIST_COUNT,
};
pub use wfs::{wfs_url, DEFAULT_MAX_FEATURES};
