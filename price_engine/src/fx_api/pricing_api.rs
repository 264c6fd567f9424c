use std::fmt::Debug;

use fx_common::{RateSource, RateTable};
use log::*;

use crate::{
    fx_api::{errors::RateLoadError, rates_api::RatesApi},
    pricing::{PriceConverter, PriceDisplay},
    traits::RateCache,
};

/// The display prices for a batch of price strings, along with the reason rates were unavailable, if they were.
#[derive(Debug, Clone)]
pub struct PricedBatch {
    pub prices: Vec<PriceDisplay>,
    /// Set when no rate table could be loaded. The prices are still populated, but any that needed a rate are degraded.
    pub rates_error: Option<RateLoadError>,
}

impl PricedBatch {
    pub fn rendered(&self) -> Vec<String> {
        self.prices.iter().map(|p| p.to_string()).collect()
    }
}

pub struct PricingApi<C, P, F> {
    rates: RatesApi<C, P, F>,
    converter: PriceConverter,
}

impl<C, P, F> Debug for PricingApi<C, P, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PricingApi(target: {})", self.converter.target_currency())
    }
}

impl<C, P, F> PricingApi<C, P, F>
where
    C: RateCache,
    P: RateSource,
    F: RateSource,
{
    pub fn new(rates: RatesApi<C, P, F>, converter: PriceConverter) -> Self {
        Self { rates, converter }
    }

    pub fn rates_api(&self) -> &RatesApi<C, P, F> {
        &self.rates
    }

    pub fn converter(&self) -> &PriceConverter {
        &self.converter
    }

    /// Loads rates once and converts every price in `prices` with them. A rate loading failure is reported in the
    /// result, once, rather than per price.
    pub async fn display_prices<'a, I>(&self, prices: I, product_type: &str, apply_markup: bool) -> PricedBatch
    where I: IntoIterator<Item = Option<&'a str>> {
        let (rates, rates_error) = self.try_load_rates().await;
        let prices = prices
            .into_iter()
            .map(|raw| self.converter.convert(raw, rates.as_ref(), product_type, apply_markup))
            .collect();
        PricedBatch { prices, rates_error }
    }

    /// Loads rates and converts a single price. Never fails; see [`PriceDisplay`] for the degraded outcomes.
    pub async fn display_price(&self, raw: Option<&str>, product_type: &str, apply_markup: bool) -> PriceDisplay {
        let (rates, _) = self.try_load_rates().await;
        self.converter.convert(raw, rates.as_ref(), product_type, apply_markup)
    }

    async fn try_load_rates(&self) -> (Option<RateTable>, Option<RateLoadError>) {
        match self.rates.load_rates().await {
            Ok(rates) => (Some(rates), None),
            Err(e) => {
                warn!("💱️ Prices will be displayed without exchange rates. {e}");
                (None, Some(e))
            },
        }
    }
}

#[cfg(test)]
mod test {
    use fx_common::CurrencyCode;

    use super::*;
    use crate::{cache::MemoryRateCache, test_utils::ScriptedRateSource, HOTEL};

    type TestApi = PricingApi<MemoryRateCache, ScriptedRateSource, ScriptedRateSource>;

    fn api(primary: &ScriptedRateSource, fallback: &ScriptedRateSource) -> TestApi {
        let rates = RatesApi::new(MemoryRateCache::default(), primary.clone(), fallback.clone());
        PricingApi::new(rates, PriceConverter::default())
    }

    #[tokio::test]
    async fn batch_loads_rates_once() {
        let primary = ScriptedRateSource::new("primary");
        let fallback = ScriptedRateSource::new("fallback");
        primary.succeed_with(RateTable::new().with_rate(CurrencyCode::BDT, 110.0).unwrap());
        let api = api(&primary, &fallback);
        let batch = api.display_prices([Some("USD 100"), Some("৳500"), None], HOTEL, true).await;
        assert!(batch.rates_error.is_none());
        assert_eq!(batch.rendered(), vec!["৳12,100", "৳550", "৳0"]);
        assert_eq!(primary.calls(), 1);
        assert_eq!(fallback.calls(), 0);

        let single = api.display_price(Some("USD 10"), HOTEL, false).await;
        assert_eq!(single.to_string(), "৳1,100");
        assert_eq!(primary.calls(), 1);
    }

    #[tokio::test]
    async fn degraded_when_rates_are_unavailable() {
        let primary = ScriptedRateSource::new("primary");
        let fallback = ScriptedRateSource::new("fallback");
        primary.fail_with("timeout");
        fallback.fail_with("503");
        let api = api(&primary, &fallback);
        let batch = api.display_prices([Some("USD 100"), Some("BDT 500"), Some("EUR 50")], HOTEL, true).await;
        assert!(matches!(batch.rates_error, Some(RateLoadError::AllSourcesFailed { .. })));
        assert_eq!(batch.rendered(), vec!["$110", "৳550", "$55"]);
        assert_eq!(primary.calls(), 1);
        assert_eq!(fallback.calls(), 1);
    }
}
