use anyhow::{Context, Result};
use fx_common::{CurrencyCode, RateTable};
use log::*;
use price_engine::{parse_price, EngineConfig, ParsedPrice};

use crate::{
    formatting::{format_conversion, format_parsed_price, format_rates},
    setup::{rates_api, CliRatesApi},
    ConvertParams,
    RatesParams,
};

pub fn print_parsed_price(raw: &str) -> Result<()> {
    match raw.parse::<ParsedPrice>() {
        Ok(price) => print!("{}", format_parsed_price(raw, &price)?),
        Err(e) => {
            println!("Not a recognised price. {e}");
            println!("Displayed prices would treat it as {}", parse_price(Some(raw)));
        },
    }
    Ok(())
}

pub async fn print_conversion(params: ConvertParams) -> Result<()> {
    let config = EngineConfig::from_env_or_default();
    let api = rates_api(&config)?;
    let rates = if params.offline { cached_rates(&api).await } else { load_rates(&api).await };
    let display =
        config.converter().convert(Some(&params.price), rates.as_ref(), &params.product_type, !params.no_markup);
    print!("{}", format_conversion(&params.price, &display)?);
    Ok(())
}

pub async fn print_rates(params: RatesParams) -> Result<()> {
    let only = params
        .currencies
        .iter()
        .map(|c| c.trim().to_ascii_uppercase().parse::<CurrencyCode>())
        .collect::<Result<Vec<_>, _>>()?;
    let config = EngineConfig::from_env_or_default();
    let api = rates_api(&config)?;
    let rates = if params.refresh {
        api.refresh_rates().await.context("Could not refresh the exchange rates")?
    } else {
        api.load_rates().await.context("Could not load the exchange rates")?
    };
    let fetched_at = api.cached_entry().await.filter(|e| e.rates == rates).and_then(|e| e.fetched_at());
    print!("{}", format_rates(&rates, &only, fetched_at)?);
    Ok(())
}

async fn load_rates(api: &CliRatesApi) -> Option<RateTable> {
    api.load_rates().await.map_err(|e| warn!("🖥️ Converting without exchange rates. {e}")).ok()
}

async fn cached_rates(api: &CliRatesApi) -> Option<RateTable> {
    let entry = api.cached_entry().await;
    if entry.is_none() {
        warn!("🖥️ There are no cached rates to use offline.");
    }
    entry.map(|e| e.rates)
}
