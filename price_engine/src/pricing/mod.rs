//! Price string parsing, markup and conversion. Everything in here is synchronous and free of side effects, apart
//! from logging.
pub mod converter;
pub mod markup;
pub mod parser;

pub use converter::{PriceConverter, PriceDisplay};
pub use markup::{MarkupPolicy, FLIGHT, HOTEL};
pub use parser::{parse_price, ParsedPrice, PriceParseError};
