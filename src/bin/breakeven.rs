//! Fee-adjusted breakeven of the last fill on a pair.

use clap::Parser;
use std::process::ExitCode;
use tradekit::account::fetch_breakeven_report;
use tradekit::cli;
use tradekit::reports::render_breakeven;

#[derive(Debug, Parser)]
#[command(name = "breakeven", about = "Breakeven price of the last trade on a pair")]
struct Args {
    /// Trading pair, e.g. SOLBTC
    #[arg(value_parser = cli::parse_pair)]
    pair: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    cli::finish(run(args).await)
}

async fn run(args: Args) -> tradekit::Result<()> {
    let (config, client) = cli::connect()?;
    let report = fetch_breakeven_report(&client, &args.pair, config.fee_rate).await?;
    print!("{}", render_breakeven(&report));
    Ok(())
}
