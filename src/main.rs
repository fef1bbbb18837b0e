use ledgerly::{config::BankConfig, run_session};

use anyhow::Context;
use clap::Parser;
use rust_decimal::Decimal;
use std::io::{stdin, stdout};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(version, about = "Single-account interactive ledger with an EMI calculator")]
struct Args {
    /// Balance used when the initial deposit prompt is left blank
    #[arg(long, default_value = "500.00")]
    initial_balance: Decimal,

    /// Smallest amount a withdrawal may take out
    #[arg(long, default_value = "0.01")]
    min_withdrawal: Decimal,

    /// Fixed annual loan rate as a fraction (0.12 = 12%)
    #[arg(long, default_value = "0.12")]
    annual_rate: Decimal,

    /// Log to stderr; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = BankConfig::new(args.initial_balance, args.min_withdrawal, args.annual_rate)
        .context("invalid bank configuration")?;

    run_session(stdin().lock(), stdout().lock(), config).context("terminal I/O failed")?;

    Ok(())
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
