use anyhow::{Context, Result};

#[cfg(debug_assertions)]
use crate::config::DF;

use crate::domain::{MarketItem, parse_decimal};

/// Decode the sheet-as-JSON payload: an array of row objects keyed by column header.
pub fn parse_items(json: &str) -> Result<Vec<MarketItem>> {
    let items: Vec<MarketItem> =
        serde_json::from_str(json).context("Market data is not an array of row objects")?;

    #[cfg(debug_assertions)]
    if DF.log_bad_rows {
        report_bad_rows(&items);
    }

    Ok(items)
}

/// Rows that will never get a tile: missing name, or no parseable price or supply.
pub fn count_bad_rows(items: &[MarketItem]) -> usize {
    items.iter().filter(|item| is_bad_row(item)).count()
}

fn is_bad_row(item: &MarketItem) -> bool {
    item.name.trim().is_empty()
        || parse_decimal(&item.current_price).is_nan()
        || parse_decimal(&item.supply).is_nan()
}

#[cfg(debug_assertions)]
fn report_bad_rows(items: &[MarketItem]) {
    use crate::config::Timeframe;

    for item in items.iter().filter(|item| is_bad_row(item)) {
        log::warn!(
            "Unusable row {:?} (price {:?}, supply {:?}, {} {:?})",
            item.name,
            item.current_price,
            item.supply,
            Timeframe::default().column_label(),
            item.price_at_offset(Timeframe::default())
        );
    }
}
