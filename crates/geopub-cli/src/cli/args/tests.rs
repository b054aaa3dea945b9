use super::*;
use clap::CommandFactory;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_debug_assert() {
    Cli::command().debug_assert();
}

#[test]
fn publish_parses_with_defaults() {
    let cli = Cli::try_parse_from(["geopub", "publish"]).expect("parse should succeed");

    match cli.cmd {
        Command::Publish(args) => {
            assert_eq!(args.zip_bin, PathBuf::from("zip"));
            assert!(args.store_prefix.is_none());
            assert!(args.temp_dir.is_none());
        }
        _ => panic!("expected Command::Publish"),
    }
}

#[test]
fn publish_parses_explicit_values() {
    let cli = Cli::try_parse_from([
        "geopub",
        "publish",
        "--root",
        "/data/shapes",
        "--url",
        "http://localhost:8080/geoserver",
        "--workspace",
        "topp",
        "--user",
        "admin",
        "--password",
        "geoserver",
        "--store-prefix",
        "ds_",
        "--layer-prefix",
        "lyr_",
        "--overwrite",
        "--zip-bin",
        "/usr/local/bin/zip",
    ])
    .expect("parse should succeed");

    match cli.cmd {
        Command::Publish(args) => {
            assert_eq!(args.root, PathBuf::from("/data/shapes"));
            assert_eq!(
                args.connection.url.as_deref(),
                Some("http://localhost:8080/geoserver")
            );
            assert_eq!(args.connection.workspace.as_deref(), Some("topp"));
            assert_eq!(args.connection.user.as_deref(), Some("admin"));
            assert_eq!(args.connection.password.as_deref(), Some("geoserver"));
            assert_eq!(args.store_prefix.as_deref(), Some("ds_"));
            assert_eq!(args.layer_prefix.as_deref(), Some("lyr_"));
            assert!(args.overwrite);
            assert_eq!(args.zip_bin, PathBuf::from("/usr/local/bin/zip"));
        }
        _ => panic!("expected Command::Publish"),
    }
}

#[test]
fn layers_parses_format_and_max_features() {
    let cli = Cli::try_parse_from([
        "geopub",
        "layers",
        "--max-features",
        "10",
        "--format",
        "json",
    ])
    .expect("parse should succeed");

    match cli.cmd {
        Command::Layers(args) => {
            assert_eq!(args.max_features, 10);
            assert_eq!(args.format, OutputFormat::Json);
        }
        _ => panic!("expected Command::Layers"),
    }
}

#[test]
fn layers_defaults_to_text_and_fifty_features() {
    let cli = Cli::try_parse_from(["geopub", "layers"]).expect("parse should succeed");

    match cli.cmd {
        Command::Layers(args) => {
            assert_eq!(args.max_features, 50);
            assert_eq!(args.format, OutputFormat::Text);
        }
        _ => panic!("expected Command::Layers"),
    }
}

#[test]
fn unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["geopub", "layers", "--format", "yaml"]).is_err());
}
