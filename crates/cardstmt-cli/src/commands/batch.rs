//! Batch command for parsing many statements.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use cardstmt_core::{BankKey, StatementParser, StatementRecord};

use super::parse::{format_record, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern for statement PDFs
    #[arg(required = true)]
    input: String,

    /// Issuing bank for every file
    #[arg(short, long)]
    bank: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of parsing a single file.
struct ParseResult {
    path: PathBuf,
    record: Option<StatementRecord>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let bank: BankKey = args.bank.parse()?;
    let config = super::config::load(config_path)?;
    let parser = Arc::new(StatementParser::with_config(config));

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let semaphore = Arc::new(Semaphore::new(args.jobs.max(1)));
    let failed = Arc::new(AtomicBool::new(false));
    let stop_on_error = !args.continue_on_error;
    let mut tasks = JoinSet::new();

    for (index, path) in files.into_iter().enumerate() {
        let permit = semaphore.clone().acquire_owned().await?;
        // Nothing new starts once a file has failed
        if failed.load(Ordering::Acquire) {
            debug!("Not starting {} after an earlier failure", path.display());
            break;
        }
        let parser = Arc::clone(&parser);
        let failed = Arc::clone(&failed);

        tasks.spawn_blocking(move || {
            let _permit = permit;
            let file_start = Instant::now();
            let result = parser.parse_path(&path, bank.as_str());
            let processing_time_ms = file_start.elapsed().as_millis() as u64;

            let result = match result {
                Ok(record) => ParseResult {
                    path,
                    record: Some(record),
                    error: None,
                    processing_time_ms,
                },
                Err(e) => {
                    if stop_on_error {
                        failed.store(true, Ordering::Release);
                    }
                    ParseResult {
                        path,
                        record: None,
                        error: Some(e.to_string()),
                        processing_time_ms,
                    }
                }
            };
            (index, result)
        });
    }

    let mut results = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let (index, result) = joined?;

        if let Some(error_msg) = &result.error {
            if args.continue_on_error {
                warn!("Failed to parse {}: {}", result.path.display(), error_msg);
            } else {
                error!("Failed to parse {}: {}", result.path.display(), error_msg);
                overall_pb.abandon();
                anyhow::bail!("Parsing failed for {}: {}", result.path.display(), error_msg);
            }
        }

        overall_pb.inc(1);
        results.push((index, result));
    }

    overall_pb.finish_with_message("Complete");

    // Keep input order regardless of completion order
    results.sort_by_key(|(index, _)| *index);
    let results: Vec<ParseResult> = results.into_iter().map(|(_, r)| r).collect();

    let successful: Vec<_> = results.iter().filter(|r| r.record.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    for result in &successful {
        if let (Some(record), Some(output_dir)) = (&result.record, &args.output_dir) {
            let output_name = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("statement");

            let output_path =
                output_dir.join(format!("{}.{}", output_name, args.format.extension()));
            fs::write(&output_path, format_record(record, args.format, true)?)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    eprintln!();
    eprintln!(
        "{} Parsed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    eprintln!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        eprintln!();
        eprintln!("{}", style("Failed files:").red());
        for result in &failed {
            eprintln!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn write_summary(path: &Path, results: &[ParseResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "bank",
        "statement_date",
        "due_date",
        "total_due",
        "minimum_due",
        "card_last4",
        "transactions",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if let Some(record) = &result.record {
            wtr.write_record([
                filename,
                "success",
                record.bank.as_str(),
                &record.statement_date.to_string(),
                &record.due_date.map(|d| d.to_string()).unwrap_or_default(),
                &record.total_due.to_string(),
                &record.minimum_due.map(|d| d.to_string()).unwrap_or_default(),
                record.card_last4.as_deref().unwrap_or(""),
                &record.transactions.len().to_string(),
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
