//! Account holdings valued in BTC.

use clap::Parser;
use std::process::ExitCode;
use tradekit::account::fetch_balance_report;
use tradekit::cli;
use tradekit::reports::render_balance;

#[derive(Debug, Parser)]
#[command(name = "balance", about = "List balances and their total value in BTC")]
struct Args {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = Args::parse();
    cli::finish(run().await)
}

async fn run() -> tradekit::Result<()> {
    let (config, client) = cli::connect()?;
    let report = fetch_balance_report(&client, config.opening_balance_btc).await?;
    print!("{}", render_balance(&report));
    Ok(())
}
