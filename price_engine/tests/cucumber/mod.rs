mod price_world;
mod steps;

pub use price_world::PriceWorld;
