//! Batch publish workflow for shapefile datasets.
//!
//! The pipeline, per dataset and strictly in order:
//!
//! 1. [`discovery`] finds primary `.shp` files below a root directory
//! 2. [`components`] groups each dataset's sidecars and checks the mandatory set
//! 3. [`bundle`] packages the components through an [`Archiver`]
//! 4. [`upload`] creates (or overwrites) the store on the [`Platform`]
//! 5. [`publish`] creates the layer, or skips/updates it on conflict
//!
//! [`BatchDriver`] sequences the steps, isolates per-item failures and cleans
//! up temporary bundles.
//!
//! # Example
//!
//! ```no_run
//! use geopub_client::{Credentials, PlatformClient, PlatformConfig};
//! use geopub_core::{BatchConfig, BatchDriver, ZipCommand};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = PlatformClient::new(
//!     PlatformConfig::default()
//!         .with_url("http://localhost:8080/geoserver")
//!         .with_credentials(Credentials::new("admin", "geoserver")),
//! )?;
//! let archiver = ZipCommand::default();
//! let config = BatchConfig::new("/data/shapefiles", "topp").with_overwrite(true);
//!
//! let report = BatchDriver::new(config, &client, &archiver).run().await?;
//! println!("{} created, {} failed", report.created(), report.failed());
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod bundle;
pub mod components;
pub mod discovery;
pub mod error;
pub mod naming;
pub mod platform;
pub mod publish;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_support;

pub use batch::{BatchConfig, BatchDriver, BatchReport, DatasetReport};
pub use bundle::{package_bundle, Archiver, Bundle, ZipCommand};
pub use components::{
    group_components, ComponentSet, ALLOWED_SUFFIXES, MANDATORY_SUFFIXES, PRIMARY_EXTENSION,
};
pub use discovery::{discover_datasets, Dataset};
pub use error::{GeoPubError, GeoPubResult};
pub use naming::{sanitize_name, NamingRules, PublishTarget};
pub use platform::Platform;
pub use publish::{publish_layer, PublishOutcome};
pub use upload::upload_bundle;
