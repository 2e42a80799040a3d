//! Market order spending the whole free balance.

use clap::Parser;
use std::process::ExitCode;
use tradekit::account::{prepare_order, submit_order, OrderKind};
use tradekit::cli;
use tradekit::models::OrderSide;
use tradekit::reports::render_order_plan;

#[derive(Debug, Parser)]
#[command(name = "trade-market", about = "Place a market order with the available funds")]
struct Args {
    /// Trading pair, e.g. SOLBTC
    #[arg(value_parser = cli::parse_pair)]
    pair: String,

    /// BUY or SELL
    side: OrderSide,

    /// Size the order and print it without placing it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    cli::finish(run(args).await)
}

async fn run(args: Args) -> tradekit::Result<()> {
    let (_, client) = cli::connect()?;

    let plan = prepare_order(&client, &args.pair, args.side, OrderKind::Market).await?;
    print!("{}", render_order_plan(&plan));
    if args.dry_run {
        println!("Dry run, order not placed");
        return Ok(());
    }

    let ack = submit_order(&client, &plan).await?;
    println!("Order details: {}", ack);
    Ok(())
}
