//! Derived WFS query endpoints for published layers.

use url::Url;

use crate::client::helpers::{encode_query_value, join_segments};
use crate::error::ClientResult;

/// Default `maxFeatures` for derived query URLs.
pub const DEFAULT_MAX_FEATURES: u32 = 50;

/// GeoJSON `GetFeature` URL for `{workspace}:{layer}`.
///
/// The query service is read-only and unauthenticated from this tool's
/// point of view; the URL is only derived, never requested.
pub fn wfs_url(base: &Url, workspace: &str, layer: &str, max_features: u32) -> ClientResult<Url> {
    let mut url = join_segments(base, &["wfs"])?;
    let query = format!(
        "service=WFS&version=2.0.0&request=GetFeature&typeNames={}:{}&outputFormat=application/json&maxFeatures={}",
        encode_query_value(workspace),
        encode_query_value(layer),
        max_features
    );
    url.set_query(Some(&query));
    Ok(url)
}
