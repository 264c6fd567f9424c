use clap::{Args, Parser, Subcommand};
use log::*;

mod commands;
mod formatting;
mod setup;

use crate::commands::{print_conversion, print_parsed_price, print_rates};

#[derive(Parser, Debug)]
#[command(version, about = "Inspect price parsing, conversion and the exchange-rate cache")]
pub struct Arguments {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[clap(name = "parse", about = "Show how a price string is read")]
    Parse {
        /// The price string, e.g. "USD 1,234.50" or "৳44,640"
        price: String,
    },
    #[clap(name = "convert", about = "Convert a price string into the display currency")]
    Convert(ConvertParams),
    #[clap(name = "rates", about = "Show the cached exchange rates, fetching them if they are stale")]
    Rates(RatesParams),
}

#[derive(Debug, Args)]
pub struct ConvertParams {
    /// The price string, e.g. "USD 1,234.50" or "৳44,640"
    price: String,
    /// The product type, which selects the markup. Unknown types get the hotel markup.
    #[arg(short = 'p', long = "product", default_value = "hotel")]
    product_type: String,
    /// Convert the price as-is, without adding the markup
    #[arg(long = "no-markup")]
    no_markup: bool,
    /// Use whatever rates are in the cache, however old, and never touch the network
    #[arg(long = "offline")]
    offline: bool,
}

#[derive(Debug, Args)]
pub struct RatesParams {
    /// Fetch a new rate table even if the cached one is still fresh
    #[arg(short = 'r', long = "refresh")]
    refresh: bool,
    /// Only show these currencies
    #[arg(short = 'c', long = "currency")]
    currencies: Vec<String>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();
    let cli = Arguments::parse();
    let result = match cli.command {
        Command::Parse { price } => print_parsed_price(&price),
        Command::Convert(params) => print_conversion(params).await,
        Command::Rates(params) => print_rates(params).await,
    };
    if let Err(e) = result {
        error!("🖥️ {e:#}");
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
