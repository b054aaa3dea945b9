use clap::{builder::BoolishValueParser, Args};
use std::path::PathBuf;

use super::ConnectionArgs;

#[derive(Args, Debug, Clone)]
pub struct PublishArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Directory scanned recursively for .shp files
    #[arg(long, env = "GEOPUB_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Prepended to every store name
    #[arg(long, env = "GEOPUB_STORE_PREFIX")]
    pub store_prefix: Option<String>,

    /// Prepended to every layer name
    #[arg(long, env = "GEOPUB_LAYER_PREFIX")]
    pub layer_prefix: Option<String>,

    /// Replace existing stores and layers instead of skipping them
    #[arg(long, env = "GEOPUB_OVERWRITE", value_parser = BoolishValueParser::new())]
    pub overwrite: bool,

    /// External zip program used to build upload bundles
    #[arg(long, env = "GEOPUB_ZIP_BIN", default_value = "zip")]
    pub zip_bin: PathBuf,

    /// Directory for temporary bundles (default: system temp dir)
    #[arg(long, env = "GEOPUB_TEMP_DIR")]
    pub temp_dir: Option<PathBuf>,
}
