use chrono::{DateTime, Duration, Utc};
use cucumber::{given, then, when};
use fx_common::CurrencyCode;
use price_engine::{CacheEntry, FileRateCache, RateCache};

use crate::cucumber::{price_world::parse_rates, PriceWorld};

//------------------------------------------   Pricing   ------------------------------------------------

#[given(expr = "the target currency is {word}")]
async fn target_currency(world: &mut PriceWorld, code: String) {
    let code = code.parse::<CurrencyCode>().expect("Invalid currency code");
    world.set_target_currency(code);
}

#[given(expr = "the exchange rates {string}")]
async fn exchange_rates(world: &mut PriceWorld, rates: String) {
    world.rates = Some(parse_rates(&rates));
}

#[given("no exchange rates are available")]
async fn no_exchange_rates(world: &mut PriceWorld) {
    world.rates = None;
}

#[when(expr = "I convert {string} for a {word} with markup")]
async fn convert_with_markup(world: &mut PriceWorld, raw: String, product_type: String) {
    let display = world.converter.convert(Some(&raw), world.rates.as_ref(), &product_type, true);
    world.display = Some(display);
}

#[when(expr = "I convert {string} for a {word} without markup")]
async fn convert_without_markup(world: &mut PriceWorld, raw: String, product_type: String) {
    let display = world.converter.convert(Some(&raw), world.rates.as_ref(), &product_type, false);
    world.display = Some(display);
}

#[when(expr = "I convert a missing price for a {word}")]
async fn convert_missing(world: &mut PriceWorld, product_type: String) {
    let display = world.converter.convert(None, world.rates.as_ref(), &product_type, true);
    world.display = Some(display);
}

#[then(expr = "the price is displayed as {string}")]
async fn displayed_as(world: &mut PriceWorld, expected: String) {
    let display = world.display.expect("No price has been converted");
    assert_eq!(display.to_string(), expected);
}

#[then(expr = "the price is marked as {string}")]
async fn marked_as(world: &mut PriceWorld, kind: String) {
    let display = world.display.expect("No price has been converted");
    assert_eq!(display.kind(), kind);
}

#[when(expr = "I display the {word} prices {string}")]
async fn display_batch(world: &mut PriceWorld, product_type: String, prices: String) {
    let raw = prices.split('|').map(str::trim).collect::<Vec<_>>();
    let batch = world.pricing_api().display_prices(raw.into_iter().map(Some), &product_type, true).await;
    world.batch = batch.prices;
}

#[then(expr = "the prices are displayed as {string}")]
async fn batch_displayed_as(world: &mut PriceWorld, expected: String) {
    let rendered = world.batch.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(" | ");
    assert_eq!(rendered, expected);
}

//------------------------------------------   Rate loading   ------------------------------------------------

#[given(expr = "the {word} rate source returns {string}")]
async fn source_returns(world: &mut PriceWorld, which: String, rates: String) {
    world.source(&which).succeed_with(parse_rates(&rates));
}

#[given(expr = "the {word} rate source fails with {string}")]
async fn source_fails(world: &mut PriceWorld, which: String, message: String) {
    world.source(&which).fail_with(&message);
}

#[given(expr = "the rate cache expires after {int} minutes")]
async fn cache_ttl(world: &mut PriceWorld, minutes: i64) {
    world.ttl = Duration::minutes(minutes);
}

#[given(expr = "it is {string}")]
async fn set_time(world: &mut PriceWorld, time: String) {
    world.now = DateTime::parse_from_rfc3339(&time).expect("Invalid timestamp").with_timezone(&Utc);
}

#[given(expr = "the rate cache holds {string} fetched {int} minutes ago")]
async fn cache_holds(world: &mut PriceWorld, rates: String, minutes: i64) {
    let entry = CacheEntry::new(parse_rates(&rates), world.now - Duration::minutes(minutes));
    FileRateCache::new(&world.cache_path, world.ttl).set(&entry).await.expect("Could not seed the rate cache");
}

#[given("the rate cache file is corrupt")]
async fn corrupt_cache(world: &mut PriceWorld) {
    std::fs::write(&world.cache_path, "{\"rates\": ").expect("Could not write the rate cache");
}

#[when(expr = "{int} minutes pass")]
async fn time_passes(world: &mut PriceWorld, minutes: i64) {
    world.now += Duration::minutes(minutes);
}

#[when("I load the exchange rates")]
async fn load_rates(world: &mut PriceWorld) {
    let result = world.rates_api().load_rates_at(world.now).await;
    world.load_result = Some(result);
}

#[when("I refresh the exchange rates")]
async fn refresh_rates(world: &mut PriceWorld) {
    let result = world.rates_api().refresh_rates().await;
    world.load_result = Some(result);
}

#[then(expr = "the {word} rate source was called {int} time(s)")]
async fn source_calls(world: &mut PriceWorld, which: String, calls: usize) {
    assert_eq!(world.source(&which).calls(), calls, "Unexpected number of calls to the {which} source");
}

#[then(expr = "the loaded rate for {word} is {float}")]
async fn loaded_rate(world: &mut PriceWorld, code: String, rate: f64) {
    let code = code.parse::<CurrencyCode>().expect("Invalid currency code");
    assert_eq!(world.loaded_rates().rate(code), Some(rate));
}

#[then("loading the exchange rates fails")]
async fn loading_fails(world: &mut PriceWorld) {
    assert!(matches!(world.load_result, Some(Err(_))), "Expected a failure, got {:?}", world.load_result);
}

#[then(expr = "the rate cache holds a {word} rate of {float}")]
async fn cache_rate(world: &mut PriceWorld, code: String, rate: f64) {
    let code = code.parse::<CurrencyCode>().expect("Invalid currency code");
    let entry = FileRateCache::new(&world.cache_path, world.ttl).get().await.expect("Could not read the rate cache");
    let entry = entry.expect("The rate cache is empty");
    assert_eq!(entry.rates.rate(code), Some(rate));
}
