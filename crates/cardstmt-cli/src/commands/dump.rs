//! Dump command - print the text layer of a PDF.
//!
//! Useful when a statement fails to parse and the template needs checking
//! against what the extractor actually sees.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use cardstmt_core::{PdfExtractor, PdfProcessor};

/// Arguments for the dump command.
#[derive(Args)]
pub struct DumpArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Password for an encrypted statement
    #[arg(short, long)]
    password: Option<String>,

    /// Maximum pages to print (0 = unlimited)
    #[arg(long)]
    max_pages: Option<usize>,
}

pub async fn run(args: DumpArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::config::load(config_path)?;

    let mut extractor = PdfExtractor::from_config(&config.pdf);
    if let Some(password) = args.password {
        extractor = extractor.with_password(password);
    }
    if let Some(max_pages) = args.max_pages {
        extractor = extractor.with_max_pages(max_pages);
    }

    let data = fs::read(&args.input)?;
    extractor.load(&data)?;
    info!("Loaded {} pages from {}", extractor.page_count(), args.input.display());

    let pages = extractor.extract_pages()?;
    for page in &pages {
        println!("{}", style(format!("--- Page {} ---", page.number)).dim());
        println!("{}", page.text());
    }

    Ok(())
}
