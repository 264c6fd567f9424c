use std::fmt::Display;

use fx_common::{group_thousands, round_half_away, CurrencyCode, RateTable, BASE_CURRENCY};
use log::*;

use crate::pricing::{
    markup::MarkupPolicy,
    parser::{parse_price, ParsedPrice},
};

/// The result of converting a price for display.
///
/// Only [`PriceDisplay::Converted`] is a complete conversion. The other variants are the degraded forms that are shown
/// instead of failing, and are distinguishable here without having to inspect the rendered string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceDisplay {
    /// Fully converted into the target currency. `markup_percent` is `None` if no markup was applied.
    Converted { amount: f64, currency: CurrencyCode, markup_percent: Option<f64> },
    /// The rate table has no entry for the target currency. `amount` is the marked-up source amount, and is shown with
    /// a `$` prefix.
    TargetRateMissing { amount: f64 },
    /// The rate table has no entry for the source currency. `amount` is the marked-up source amount, and is shown with
    /// the source currency code as a prefix.
    SourceRateMissing { amount: f64, currency: CurrencyCode },
    /// Nothing sensible to show: the price was unparseable, zero, or the arithmetic broke down.
    Zero { currency: CurrencyCode },
}

impl PriceDisplay {
    pub fn is_degraded(&self) -> bool {
        !matches!(self, Self::Converted { .. })
    }

    /// The amount that will be displayed, before rounding.
    pub fn amount(&self) -> f64 {
        match self {
            Self::Converted { amount, .. }
            | Self::TargetRateMissing { amount }
            | Self::SourceRateMissing { amount, .. } => *amount,
            Self::Zero { .. } => 0.0,
        }
    }

    /// The amount as it is displayed: rounded to a whole unit.
    pub fn rounded_amount(&self) -> f64 {
        round_half_away(self.amount())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Converted { markup_percent: Some(_), .. } => "converted",
            Self::Converted { markup_percent: None, .. } => "converted without markup",
            Self::TargetRateMissing { .. } => "target rate missing",
            Self::SourceRateMissing { .. } => "source rate missing",
            Self::Zero { .. } => "zero",
        }
    }
}

impl Display for PriceDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Converted { amount, currency, .. } => write!(f, "{}{}", prefix(*currency), group_thousands(*amount)),
            Self::TargetRateMissing { amount } => write!(f, "${}", group_thousands(*amount)),
            Self::SourceRateMissing { amount, currency } => write!(f, "{currency} {}", group_thousands(*amount)),
            Self::Zero { currency } => write!(f, "{}0", prefix(*currency)),
        }
    }
}

fn prefix(currency: CurrencyCode) -> String {
    match currency.symbol() {
        Some(symbol) => symbol.to_string(),
        None => format!("{currency} "),
    }
}

/// Converts price strings into display strings in a single target currency, adding the markup for the product type.
#[derive(Debug, Clone)]
pub struct PriceConverter {
    target: CurrencyCode,
    markup: MarkupPolicy,
}

impl Default for PriceConverter {
    fn default() -> Self {
        Self::new(CurrencyCode::BDT, MarkupPolicy::default())
    }
}

impl PriceConverter {
    pub fn new(target: CurrencyCode, markup: MarkupPolicy) -> Self {
        Self { target, markup }
    }

    pub fn target_currency(&self) -> CurrencyCode {
        self.target
    }

    pub fn markup_policy(&self) -> &MarkupPolicy {
        &self.markup
    }

    /// Parse `raw` and convert it into the target currency.
    ///
    /// `rates` may be `None` when no table could be loaded; that is treated exactly like a table without the required
    /// rates. Unknown product types are charged the hotel markup.
    pub fn convert(
        &self,
        raw: Option<&str>,
        rates: Option<&RateTable>,
        product_type: &str,
        apply_markup: bool,
    ) -> PriceDisplay {
        let price = parse_price(raw);
        self.convert_parsed(&price, rates, product_type, apply_markup)
    }

    pub fn convert_parsed(
        &self,
        price: &ParsedPrice,
        rates: Option<&RateTable>,
        product_type: &str,
        apply_markup: bool,
    ) -> PriceDisplay {
        let zero = PriceDisplay::Zero { currency: self.target };
        if price.is_zero() || !price.amount.is_finite() {
            return zero;
        }
        let (adjusted, markup_percent) = if apply_markup {
            (self.markup.apply(price.amount, product_type), Some(self.markup.percent_for(product_type)))
        } else {
            (price.amount, None)
        };
        let result = if price.currency == self.target {
            PriceDisplay::Converted { amount: adjusted, currency: self.target, markup_percent }
        } else {
            self.exchange(adjusted, price.currency, rates, markup_percent)
        };
        if result.amount().is_finite() {
            result
        } else {
            error!("💱️ Converting {price} produced a non-finite amount. Displaying {zero} instead.");
            zero
        }
    }

    /// Convenience wrapper around [`PriceConverter::convert`] that returns the rendered string.
    pub fn format_price(
        &self,
        raw: Option<&str>,
        rates: Option<&RateTable>,
        product_type: &str,
        apply_markup: bool,
    ) -> String {
        self.convert(raw, rates, product_type, apply_markup).to_string()
    }

    fn exchange(
        &self,
        amount: f64,
        source: CurrencyCode,
        rates: Option<&RateTable>,
        markup_percent: Option<f64>,
    ) -> PriceDisplay {
        let Some(target_rate) = rates.and_then(|r| r.rate(self.target)) else {
            warn!("💱️ No exchange rate for {}. Falling back to a dollar amount.", self.target);
            return PriceDisplay::TargetRateMissing { amount };
        };
        let converted = if source == BASE_CURRENCY {
            amount * target_rate
        } else {
            let Some(source_rate) = rates.and_then(|r| r.rate(source)) else {
                warn!("💱️ No exchange rate for {source}. Displaying the price in {source}.");
                return PriceDisplay::SourceRateMissing { amount, currency: source };
            };
            amount / source_rate * target_rate
        };
        trace!("💱️ {amount} {source} => {converted} {}", self.target);
        PriceDisplay::Converted { amount: converted, currency: self.target, markup_percent }
    }
}
