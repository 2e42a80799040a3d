//! Ichimoku cloud signal with ATR target and stop-loss levels.

use clap::Parser;
use std::process::ExitCode;
use tradekit::cli;
use tradekit::reports::render_ichimoku;
use tradekit::services::MarketDataProvider;
use tradekit::services::binance::MAX_KLINE_LIMIT;
use tradekit::signals::{evaluate_ichimoku, IchimokuParams};

#[derive(Debug, Parser)]
#[command(name = "ichimoku", about = "Ichimoku signal with ATR-based target and stop-loss")]
struct Args {
    /// Trading pair, e.g. BTCUSDT
    #[arg(value_parser = cli::parse_pair)]
    pair: String,

    /// Kline interval, e.g. 4h
    #[arg(value_parser = cli::parse_interval)]
    interval: String,

    /// Conversion line window
    #[arg(default_value_t = 9)]
    window1: usize,

    /// Base line window
    #[arg(default_value_t = 18)]
    window2: usize,

    /// Leading span B window
    #[arg(default_value_t = 24)]
    window3: usize,

    /// Forward shift of the leading spans (defaults to the base line window)
    #[arg(long)]
    displacement: Option<usize>,

    /// Number of candles to fetch
    #[arg(long, default_value_t = MAX_KLINE_LIMIT)]
    limit: u16,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    cli::finish(run(args).await)
}

async fn run(args: Args) -> tradekit::Result<()> {
    let (_, client) = cli::connect()?;

    let mut params = IchimokuParams::new(args.window1, args.window2, args.window3);
    if let Some(displacement) = args.displacement {
        params = params.with_displacement(displacement);
    }

    let candles = client
        .fetch_candles(&args.pair, &args.interval, args.limit)
        .await?;
    let evaluation = evaluate_ichimoku(&candles, &params)?;
    print!("{}", render_ichimoku(&args.pair, &args.interval, &evaluation));
    Ok(())
}
