//! Banks command - list supported statement templates.

use clap::Args;
use console::style;

use cardstmt_core::supported_banks;

/// Arguments for the banks command.
#[derive(Args)]
pub struct BanksArgs {
    /// Print the bank keys as a JSON array
    #[arg(long)]
    json: bool,
}

pub async fn run(args: BanksArgs) -> anyhow::Result<()> {
    let banks = supported_banks();

    if args.json {
        let keys: Vec<&str> = banks.iter().map(|b| b.as_str()).collect();
        println!("{}", serde_json::to_string(&keys)?);
        return Ok(());
    }

    println!("{}", style("Supported banks:").bold());
    for bank in banks {
        println!("  {:<8} {}", style(bank.as_str()).cyan(), bank.display_name());
    }

    Ok(())
}
