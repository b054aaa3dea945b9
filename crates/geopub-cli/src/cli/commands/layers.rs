use serde::Serialize;

use super::connect::connect;
use crate::cli::args::{LayersArgs, OutputFormat};
use crate::exit_codes;

#[derive(Serialize)]
struct LayerEntry {
    name: String,
    wfs_url: String,
}

pub async fn run(args: LayersArgs) -> anyhow::Result<i32> {
    let conn = connect(&args.connection)?;
    let links = conn.client.list_feature_types(&conn.workspace).await?;

    let entries = links
        .into_iter()
        .map(|link| -> anyhow::Result<LayerEntry> {
            let url = conn
                .client
                .wfs_url(&conn.workspace, &link.name, args.max_features)?;
            Ok(LayerEntry {
                name: link.name,
                wfs_url: url.to_string(),
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("No layers in workspace '{}'", conn.workspace);
            }
            for entry in &entries {
                println!("{}\t{}", entry.name, entry.wfs_url);
            }
        }
    }

    Ok(exit_codes::SUCCESS)
}
