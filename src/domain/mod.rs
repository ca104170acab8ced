// Domain types and value objects
mod market_item;
mod viewport;

pub use market_item::{MarketItem, parse_decimal};
pub use viewport::{Rect, ViewportSize};
