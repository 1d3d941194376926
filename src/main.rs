use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

mod api;
mod config;
mod convert;
mod menu;
mod models;
mod store;

use store::{FetchOutcome, RateStore};

/// Interactive currency converter backed by live exchange rates, with an
/// offline fallback table when the network is unavailable.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Base currency for the initial rate fetch
    #[clap(short, long, default_value = "USD")]
    base: String,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Info);
    builder.parse_default_env();
    builder.init();

    let args = Args::parse();
    let mut store = RateStore::new();

    println!("\nWelcome to Currency Converter!");
    println!("{}", "=".repeat(50));
    println!("Fetching latest exchange rates...");

    match store.fetch(&args.base).await {
        FetchOutcome::Fetched => {
            println!("Rates updated successfully (base: {})", store.snapshot().base);
        }
        FetchOutcome::Fallback(_) => println!("Using offline rates"),
    }

    menu::run(&mut store).await
}
