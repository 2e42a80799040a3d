//! RSI, MACD and Bollinger Bands signals for the latest candle of a pair.

use clap::Parser;
use std::process::ExitCode;
use tracing::info;
use tradekit::cli;
use tradekit::reports::render_analysis;
use tradekit::services::MarketDataProvider;
use tradekit::services::binance::DEFAULT_KLINE_LIMIT;
use tradekit::signals::{AnalysisParams, SignalEngine};

#[derive(Debug, Parser)]
#[command(name = "analyze", about = "Technical analysis with RSI, MACD and Bollinger Bands")]
struct Args {
    /// Trading pair, e.g. SOLBTC
    #[arg(value_parser = cli::parse_pair)]
    pair: String,

    /// Kline interval, e.g. 1d
    #[arg(value_parser = cli::parse_interval)]
    interval: String,

    /// Number of candles to fetch
    #[arg(long, default_value_t = DEFAULT_KLINE_LIMIT)]
    limit: u16,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    cli::finish(run(args).await)
}

async fn run(args: Args) -> tradekit::Result<()> {
    let (_, client) = cli::connect()?;

    let candles = client
        .fetch_candles(&args.pair, &args.interval, args.limit)
        .await?;
    info!(pair = %args.pair, interval = %args.interval, candles = candles.len(), "Analyzing");

    let analysis = SignalEngine::analyze(&candles, &AnalysisParams::default())?;
    print!("{}", render_analysis(&analysis));
    Ok(())
}
