//! CLI application for Indian credit-card statement parsing.

mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use console::style;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cardstmt_core::StatementError;
use commands::{banks, batch, config, dump, parse};

/// Card statement parser - Extract structured data from credit-card statement PDFs
#[derive(Parser)]
#[command(name = "cardstmt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a single statement
    Parse(parse::ParseArgs),

    /// Parse multiple statements
    Batch(batch::BatchArgs),

    /// List supported banks
    Banks(banks::BanksArgs),

    /// Print the extracted text of a PDF
    Dump(dump::DumpArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // Logs go to stderr so stdout stays machine-readable
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("{} {}", style("error:").red().bold(), e);
        return ExitCode::FAILURE;
    }

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Parse(args) => parse::run(args, config_path).await,
        Commands::Batch(args) => batch::run(args, config_path).await,
        Commands::Banks(args) => banks::run(args).await,
        Commands::Dump(args) => dump::run(args, config_path).await,
        Commands::Config(args) => config::run(args, config_path).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", style("error:").red().bold(), e);
            exit_code_for(&e)
        }
    }
}

/// Invalid requests exit with 2, everything else with 1.
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<StatementError>() {
        Some(e) if e.is_client_error() => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}
