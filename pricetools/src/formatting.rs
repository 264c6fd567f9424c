use std::fmt::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use fx_common::{CurrencyCode, RateTable, BASE_CURRENCY};
use price_engine::{ParsedPrice, PriceDisplay};
use prettytable::{
    format::{LinePosition, LineSeparator, TableFormat},
    row,
    Table,
};

fn markdown_format() -> TableFormat {
    prettytable::format::FormatBuilder::new()
        .column_separator('|')
        .borders('|')
        .separator(LinePosition::Title, LineSeparator::new('-', '|', '|', '|'))
        .padding(1, 1)
        .build()
}

fn markdown_style(table: &mut Table) {
    table.set_format(markdown_format());
}

fn symbol_of(currency: CurrencyCode) -> String {
    currency.symbol().map(|s| s.to_string()).unwrap_or_default()
}

pub fn format_parsed_price(raw: &str, price: &ParsedPrice) -> Result<String> {
    let mut f = String::new();
    writeln!(f, "Input   : {raw}")?;
    writeln!(f, "Currency: {} {}", price.currency, symbol_of(price.currency))?;
    writeln!(f, "Amount  : {}", price.amount)?;
    Ok(f)
}

pub fn format_conversion(raw: &str, display: &PriceDisplay) -> Result<String> {
    let mut f = String::new();
    writeln!(f, "----------------------------- Price -----------------------------")?;
    writeln!(f, "Input   : {raw}")?;
    writeln!(f, "Display : {display}")?;
    writeln!(f, "Outcome : {}", display.kind())?;
    if let PriceDisplay::Converted { markup_percent: Some(pct), .. } = display {
        writeln!(f, "Markup  : {pct}%")?;
    }
    if display.is_degraded() {
        writeln!(f, "Note    : some exchange rates were unavailable, so this price was not fully converted")?;
    }
    writeln!(f, "-----------------------------------------------------------------")?;
    Ok(f)
}

/// Renders `rates` as a markdown table. When `only` is not empty, just those currencies are listed, and any of them
/// missing from the table are flagged.
pub fn format_rates(rates: &RateTable, only: &[CurrencyCode], fetched_at: Option<DateTime<Utc>>) -> Result<String> {
    let mut f = String::new();
    write!(f, "{} rates per {BASE_CURRENCY}", rates.len())?;
    match fetched_at {
        Some(t) => writeln!(f, ", fetched {}", t.format("%Y-%m-%d %H:%M UTC"))?,
        None => writeln!(f)?,
    }
    let mut table = Table::new();
    table.set_titles(row!["Currency", "Symbol", "Rate"]);
    if only.is_empty() {
        rates.iter().for_each(|(code, rate)| {
            table.add_row(row![code, symbol_of(code), rate]);
        });
    } else {
        only.iter().for_each(|code| {
            let rate = rates.rate(*code).map(|r| r.to_string()).unwrap_or_else(|| "not available".to_string());
            table.add_row(row![code, symbol_of(*code), rate]);
        });
    }
    markdown_style(&mut table);
    writeln!(f, "{table}")?;
    Ok(f)
}
