use clap::Args;

/// Management API connection settings shared by every command.
///
/// All fields are optional at parse time; missing ones are reported together
/// before any network activity.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Base URL of the map server, e.g. http://localhost:8080/geoserver
    #[arg(long, env = "GEOPUB_URL")]
    pub url: Option<String>,

    /// Target workspace
    #[arg(long, env = "GEOPUB_WORKSPACE")]
    pub workspace: Option<String>,

    #[arg(long, env = "GEOPUB_USER")]
    pub user: Option<String>,

    #[arg(long, env = "GEOPUB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}
