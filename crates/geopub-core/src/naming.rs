//! Store/layer naming and publish targets.

use std::path::Path;

use geopub_client::FeatureType;

use crate::error::{GeoPubError, GeoPubResult};

/// Collapse whitespace runs to single underscores and trim the ends.
pub fn sanitize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Optional prefixes applied before sanitizing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingRules {
    pub store_prefix: Option<String>,
    pub layer_prefix: Option<String>,
}

impl NamingRules {
    pub fn store_name(&self, base_name: &str) -> String {
        prefixed(self.store_prefix.as_deref(), base_name)
    }

    pub fn layer_name(&self, base_name: &str) -> String {
        prefixed(self.layer_prefix.as_deref(), base_name)
    }
}

fn prefixed(prefix: Option<&str>, base_name: &str) -> String {
    match prefix {
        Some(prefix) => sanitize_name(&format!("{}{}", prefix, base_name)),
        None => sanitize_name(base_name),
    }
}

/// Where a dataset ends up on the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishTarget {
    pub workspace: String,
    pub store_name: String,
    pub layer_name: String,
    /// Trimmed but unsanitized base name; the table name inside the store.
    pub native_name: String,
}

impl PublishTarget {
    pub fn new(workspace: &str, base_name: &str, rules: &NamingRules) -> Self {
        Self {
            workspace: workspace.to_string(),
            store_name: rules.store_name(base_name),
            layer_name: rules.layer_name(base_name),
            native_name: base_name.trim().to_string(),
        }
    }

    /// Reject names that cannot address a resource of their own.
    ///
    /// Empty names leave an empty path segment, and `.`/`..` are collapsed
    /// by URL normalization onto the parent collection.
    pub fn check(&self, primary: &Path) -> GeoPubResult<()> {
        for name in [&self.store_name, &self.layer_name] {
            if name.is_empty() || name == "." || name == ".." {
                return Err(GeoPubError::InvalidName {
                    primary: primary.to_path_buf(),
                    name: name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Descriptor sent on create and update.
    pub fn feature_type(&self) -> FeatureType {
        FeatureType::new(&self.layer_name, &self.native_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_collapses_whitespace() {
        assert_eq!(sanitize_name("My Parcels"), "My_Parcels");
        assert_eq!(sanitize_name("  a \t  b\nc  "), "a_b_c");
        assert_eq!(sanitize_name("roads"), "roads");
    }

    #[test]
    fn test_target_without_prefixes() {
        let target = PublishTarget::new("topp", "My Parcels", &NamingRules::default());
        assert_eq!(target.store_name, "My_Parcels");
        assert_eq!(target.layer_name, "My_Parcels");
        assert_eq!(target.native_name, "My Parcels");
        assert_eq!(target.workspace, "topp");
    }

    #[test]
    fn test_target_with_prefixes() {
        let rules = NamingRules {
            store_prefix: Some("ds_".into()),
            layer_prefix: Some("city ".into()),
        };
        let target = PublishTarget::new("topp", " parcels ", &rules);
        assert_eq!(target.store_name, "ds_parcels");
        assert_eq!(target.layer_name, "city_parcels");
        assert_eq!(target.native_name, "parcels");
    }

    #[test]
    fn test_blank_and_dot_names_are_rejected() {
        let primary = Path::new("data/x.shp");
        for base in ["   ", ".", ".."] {
            let target = PublishTarget::new("topp", base, &NamingRules::default());
            match target.check(primary) {
                Err(GeoPubError::InvalidName { name, .. }) => assert_eq!(name, base.trim()),
                other => panic!("expected InvalidName for {:?}, got {:?}", base, other),
            }
        }
    }

    #[test]
    fn test_prefix_rescues_dot_name() {
        let rules = NamingRules {
            store_prefix: Some("ds".into()),
            layer_prefix: Some("ly".into()),
        };
        let target = PublishTarget::new("topp", "..", &rules);
        assert_eq!(target.store_name, "ds..");
        assert!(target.check(Path::new("..shp")).is_ok());
    }

    #[test]
    fn test_layer_prefix_alone_does_not_rescue_store() {
        let rules = NamingRules {
            store_prefix: None,
            layer_prefix: Some("ly_".into()),
        };
        let target = PublishTarget::new("topp", ".", &rules);
        assert!(matches!(
            target.check(Path::new("..shp")),
            Err(GeoPubError::InvalidName { name, .. }) if name == "."
        ));
    }

    #[test]
    fn test_feature_type_descriptor() {
        let target = PublishTarget::new("topp", "My Parcels", &NamingRules::default());
        let ft = target.feature_type();
        assert_eq!(ft.name, "My_Parcels");
        assert_eq!(ft.native_name, "My Parcels");
        assert!(ft.enabled);
    }
}
