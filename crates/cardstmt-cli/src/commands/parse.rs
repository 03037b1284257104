//! Parse command - extract data from a single statement.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use cardstmt_core::statement::rules::format_indian_amount;
use cardstmt_core::{
    pages_from_text, BankKey, ErrorPayload, StatementError, StatementParser, StatementRecord,
};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Statement PDF, or `-` to read it from stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Issuing bank (axis, bob, kotak, sbi)
    #[arg(short, long)]
    bank: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Password for an encrypted statement
    #[arg(short, long)]
    password: Option<String>,

    /// Treat the input as already extracted text (pages separated by form feeds)
    #[arg(long)]
    text: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON record
    Json,
    /// CSV of transactions
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = super::config::load(config_path)?;
    if let Some(password) = &args.password {
        config.pdf.password = Some(password.clone());
    }
    let parser = StatementParser::with_config(config);

    info!("Parsing {} as {}", args.input.display(), args.bank);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Parsing statement...");

    let result = parse_input(&parser, &args);
    pb.finish_and_clear();

    let record = match result {
        Ok(record) => record,
        Err(e) => {
            if matches!(args.format, OutputFormat::Json) {
                println!("{}", serde_json::to_string(&ErrorPayload::from(&e))?);
            }
            return Err(e.into());
        }
    };

    let output = format_record(&record, args.format, args.pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn parse_input(parser: &StatementParser, args: &ParseArgs) -> Result<StatementRecord, StatementError> {
    // Reject unknown banks before touching the input
    let bank: BankKey = args.bank.parse()?;
    let bank = bank.as_str();
    let from_stdin = args.input == Path::new("-");

    if args.text {
        let mut text = String::new();
        if from_stdin {
            io::stdin().read_to_string(&mut text)?;
        } else {
            text = fs::read_to_string(&args.input)?;
        }
        return parser.parse_pages(&pages_from_text(&text), bank);
    }

    if from_stdin {
        parser.parse_upload(io::stdin().lock(), bank)
    } else {
        parser.parse_path(&args.input, bank)
    }
}

/// Render a record in the requested format.
pub fn format_record(
    record: &StatementRecord,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &StatementRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["date", "description", "amount", "type"])?;

    for txn in &record.transactions {
        wtr.write_record([
            &txn.date.to_string(),
            &txn.description,
            &txn.amount.to_string(),
            txn.kind.as_str(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &StatementRecord) -> String {
    let mut output = String::new();
    let currency = &record.currency;

    output.push_str(&format!("Bank: {}\n", record.bank.display_name()));
    if let Some(last4) = &record.card_last4 {
        output.push_str(&format!("Card: XXXX XXXX XXXX {}\n", last4));
    }
    output.push_str(&format!("Statement date: {}\n", record.statement_date));
    if let Some(period) = &record.statement_period {
        output.push_str(&format!("Period: {} to {}\n", period.from, period.to));
    }
    if let Some(due_date) = record.due_date {
        output.push_str(&format!("Payment due: {}\n", due_date));
    }
    output.push('\n');

    output.push_str("Summary:\n");
    output.push_str(&format!(
        "  Total due:        {} {}\n",
        format_indian_amount(record.total_due),
        currency
    ));
    let optional = [
        ("Minimum due:     ", record.minimum_due),
        ("Credit limit:    ", record.credit_limit),
        ("Available credit:", record.available_credit),
    ];
    for (label, amount) in optional {
        if let Some(amount) = amount {
            output.push_str(&format!("  {} {} {}\n", label, format_indian_amount(amount), currency));
        }
    }

    if !record.transactions.is_empty() {
        output.push('\n');
        output.push_str(&format!("Transactions ({}):\n", record.transactions.len()));
        for txn in &record.transactions {
            output.push_str(&format!(
                "  {}  {:<40}  {:>14}\n",
                txn.date,
                txn.description,
                format_indian_amount(txn.amount)
            ));
        }
        output.push_str(&format!(
            "\n  Debits: {}  Credits: {}\n",
            format_indian_amount(record.total_debits()),
            format_indian_amount(record.total_credits())
        ));
    }

    output
}
