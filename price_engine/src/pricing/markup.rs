use std::collections::HashMap;

pub const HOTEL: &str = "hotel";
pub const FLIGHT: &str = "flight";
pub const DEFAULT_HOTEL_MARKUP: f64 = 10.0;
pub const DEFAULT_FLIGHT_MARKUP: f64 = 8.0;

/// Markup percentages per product category.
///
/// Category names are case-insensitive. Any category without its own entry is charged the hotel markup.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupPolicy {
    percentages: HashMap<String, f64>,
}

impl Default for MarkupPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_HOTEL_MARKUP, DEFAULT_FLIGHT_MARKUP)
    }
}

impl MarkupPolicy {
    pub fn new(hotel_percent: f64, flight_percent: f64) -> Self {
        let percentages = HashMap::from([(HOTEL.to_string(), hotel_percent), (FLIGHT.to_string(), flight_percent)]);
        Self { percentages }
    }

    /// Adds (or replaces) the markup for a product category.
    pub fn with_category(mut self, category: &str, percent: f64) -> Self {
        self.percentages.insert(normalize(category), percent);
        self
    }

    pub fn percent_for(&self, product_type: &str) -> f64 {
        self.percentages
            .get(&normalize(product_type))
            .or_else(|| self.percentages.get(HOTEL))
            .copied()
            .unwrap_or(DEFAULT_HOTEL_MARKUP)
    }

    /// `amount` plus the markup for `product_type`.
    pub fn apply(&self, amount: f64, product_type: &str) -> f64 {
        amount * (1.0 + self.percent_for(product_type) / 100.0)
    }
}

fn normalize(category: &str) -> String {
    category.trim().to_lowercase()
}
