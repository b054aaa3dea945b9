use clap::{Parser, Subcommand};

pub mod common;
pub mod layers;
pub mod publish;
pub use common::*;
pub use layers::*;
pub use publish::*;

#[derive(Parser)]
#[command(
    name = "geopub",
    version,
    about = "Batch-publish shapefile datasets as layers on a GeoServer-compatible map server"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Upload every shapefile below a directory and publish one layer per dataset
    Publish(PublishArgs),
    /// List the layers of a workspace with their WFS query URLs
    Layers(LayersArgs),
    Version,
}

#[cfg(test)]
mod tests;
