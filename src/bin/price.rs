//! Current price and the round-trip breakeven for a planned trade.

use clap::Parser;
use std::process::ExitCode;
use tradekit::account::fetch_price_report;
use tradekit::cli;
use tradekit::models::OrderSide;
use tradekit::reports::render_price;

#[derive(Debug, Parser)]
#[command(name = "price", about = "Current price and breakeven covering two trading fees")]
struct Args {
    /// Trading pair, e.g. SOLBTC
    #[arg(value_parser = cli::parse_pair)]
    pair: String,

    /// BUY or SELL
    side: OrderSide,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    cli::finish(run(args).await)
}

async fn run(args: Args) -> tradekit::Result<()> {
    let (config, client) = cli::connect()?;
    let report = fetch_price_report(&client, &args.pair, args.side, config.fee_rate).await?;
    print!("{}", render_price(&report, config.fee_rate));
    Ok(())
}
