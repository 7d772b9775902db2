//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_upload() {
    match parse(&["skynet", "upload", "./site"]).command {
        CliCommand::Upload { path } => assert_eq!(path, Path::new("./site")),
        _ => panic!("expected Upload"),
    }
}

#[test]
fn cli_parse_query() {
    match parse(&["skynet", "query", "sia://AAB123"]).command {
        CliCommand::Query { skylink } => assert_eq!(skylink, "sia://AAB123"),
        _ => panic!("expected Query"),
    }
}

#[test]
fn cli_parse_download_default_output() {
    match parse(&["skynet", "download", "AAB123"]).command {
        CliCommand::Download { skylink, output } => {
            assert_eq!(skylink, "AAB123");
            assert!(output.is_none());
        }
        _ => panic!("expected Download"),
    }
}

#[test]
fn cli_parse_download_output() {
    match parse(&["skynet", "download", "AAB123", "-o", "/tmp/out.bin"]).command {
        CliCommand::Download { output, .. } => {
            assert_eq!(output.as_deref(), Some(Path::new("/tmp/out.bin")));
        }
        _ => panic!("expected Download with --output"),
    }
}

#[test]
fn cli_parse_checksum() {
    match parse(&["skynet", "checksum", "/path/to/file.bin"]).command {
        CliCommand::Checksum { path } => assert_eq!(path, Path::new("/path/to/file.bin")),
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn cli_parse_global_portal() {
    let cli = parse(&["skynet", "query", "X", "--portal", "https://portal.example"]);
    assert_eq!(cli.portal.as_deref(), Some("https://portal.example"));
    let cli = parse(&["skynet", "query", "X"]);
    assert!(cli.portal.is_none());
}

#[test]
fn cli_rejects_missing_skylink() {
    assert!(Cli::try_parse_from(["skynet", "download"]).is_err());
}
