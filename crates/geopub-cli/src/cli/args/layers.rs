use clap::{Args, ValueEnum};
use geopub_client::DEFAULT_MAX_FEATURES;

use super::ConnectionArgs;

#[derive(Args, Debug, Clone)]
pub struct LayersArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// maxFeatures value embedded in each WFS URL
    #[arg(long, default_value_t = DEFAULT_MAX_FEATURES)]
    pub max_features: u32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
