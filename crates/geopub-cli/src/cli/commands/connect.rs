use geopub_client::{Credentials, PlatformClient, PlatformConfig};
use geopub_core::GeoPubError;

use crate::cli::args::ConnectionArgs;

/// A validated client plus the workspace every request targets.
pub(crate) struct Connection {
    pub client: PlatformClient,
    pub workspace: String,
}

/// Check that every connection setting is present and build the client.
///
/// All missing settings are reported in one error so a single run tells the
/// operator everything that has to be fixed.
pub(crate) fn connect(args: &ConnectionArgs) -> Result<Connection, GeoPubError> {
    let mut missing = Vec::new();
    let url = require(&args.url, "--url (GEOPUB_URL)", &mut missing);
    let workspace = require(&args.workspace, "--workspace (GEOPUB_WORKSPACE)", &mut missing);
    let user = require(&args.user, "--user (GEOPUB_USER)", &mut missing);
    let password = require(&args.password, "--password (GEOPUB_PASSWORD)", &mut missing);

    let (Some(url), Some(workspace), Some(user), Some(password)) = (url, workspace, user, password)
    else {
        return Err(GeoPubError::Configuration {
            message: format!("missing required setting(s): {}", missing.join(", ")),
        });
    };

    let config = PlatformConfig::default()
        .with_url(url)
        .with_credentials(Credentials::new(user, password));
    let client = PlatformClient::new(config).map_err(|e| GeoPubError::Configuration {
        message: e.to_string(),
    })?;

    Ok(Connection {
        client,
        workspace: workspace.trim().to_string(),
    })
}

fn require<'a>(
    value: &'a Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<&'a str> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            missing.push(name);
            None
        }
    }
}
