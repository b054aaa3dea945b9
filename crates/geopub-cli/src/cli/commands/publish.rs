use geopub_core::{BatchConfig, BatchDriver, BatchReport, GeoPubError, PublishOutcome, ZipCommand};

use super::connect::connect;
use crate::cli::args::PublishArgs;
use crate::exit_codes;

pub async fn run(args: PublishArgs) -> anyhow::Result<i32> {
    let conn = connect(&args.connection)?;
    let archiver = ZipCommand::new(&args.zip_bin);

    let mut config = BatchConfig::new(&args.root, &conn.workspace).with_overwrite(args.overwrite);
    if let Some(prefix) = &args.store_prefix {
        config = config.with_store_prefix(prefix);
    }
    if let Some(prefix) = &args.layer_prefix {
        config = config.with_layer_prefix(prefix);
    }
    if let Some(dir) = &args.temp_dir {
        config = config.with_temp_parent(dir);
    }

    let report = BatchDriver::new(config, &conn.client, &archiver)
        .run()
        .await?;

    if report.is_empty() {
        println!("No shapefiles found under {}", args.root.display());
        return Ok(exit_codes::SUCCESS);
    }

    print_summary(&report);
    Ok(exit_codes::SUCCESS)
}

fn print_summary(report: &BatchReport) {
    for dataset in &report.datasets {
        println!(
            "{:<10} {} -> {}",
            status_label(&dataset.outcome),
            dataset.relative_path.display(),
            dataset.layer_name
        );
    }
    println!(
        "\n{} datasets: {} created, {} updated, {} skipped, {} incomplete, {} failed",
        report.datasets.len(),
        report.created(),
        report.updated(),
        report.skipped(),
        report.incomplete(),
        report.failed() - report.incomplete()
    );

    for failed in report.failures() {
        if let Some(err) = failed.outcome.error() {
            eprintln!("  {}: {}", failed.relative_path.display(), err);
        }
    }
}

fn status_label(outcome: &PublishOutcome) -> &'static str {
    match outcome {
        PublishOutcome::Created => "created",
        PublishOutcome::Updated => "updated",
        PublishOutcome::Skipped => "skipped",
        PublishOutcome::Failed(GeoPubError::MissingComponent { .. }) => "incomplete",
        PublishOutcome::Failed(_) => "FAILED",
    }
}
