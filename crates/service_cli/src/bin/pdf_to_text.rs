//! Extract text from PDF files into a sibling text cache.
//!
//! Walks `<root>` recursively and writes one `.txt` per PDF under
//! `<root>/output/text_cache`. A file that fails to extract is recorded as
//! a placeholder artifact; the run itself still exits 0.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adapter_pdf::TextCache;

/// PDF text cache builder
#[derive(Parser, Debug)]
#[command(name = "pdf-to-text")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Root directory scanned recursively for *.pdf files
    root: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            // Wrong argument count: usage on stdout, status 1
            println!("Usage: pdf-to-text <root>");
            process::exit(1);
        }
    };

    let cache = TextCache::new(&cli.root);
    let report = cache.run()?;

    info!(
        cache_dir = %cache.cache_dir().display(),
        extracted = report.extracted,
        failed = report.failed,
        "Text cache complete"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_root_parses() {
        let cli = Cli::try_parse_from(["pdf-to-text", "letters"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("letters"));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let err = Cli::try_parse_from(["pdf-to-text"]).unwrap_err();
        assert!(!matches!(
            err.kind(),
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
        ));
    }

    #[test]
    fn test_extra_argument_is_an_error() {
        let err = Cli::try_parse_from(["pdf-to-text", "letters", "extra"]).unwrap_err();
        assert!(!matches!(
            err.kind(),
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
        ));
    }
}
