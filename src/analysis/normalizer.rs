use crate::{
    config::{Timeframe, constants::CHANGE_CLAMP_PCT},
    domain::{MarketItem, parse_decimal},
    models::NormalizedMetric,
};

/// Turns one raw row into numbers for `timeframe`. Never fails: bad text becomes `NaN`
/// and an undefined percent change becomes `None`.
pub fn normalize_item(item: &MarketItem, timeframe: Timeframe) -> NormalizedMetric {
    let current_price = parse_decimal(&item.current_price);
    let past_price = parse_decimal(item.price_at_offset(timeframe));
    let supply = parse_decimal(&item.supply);

    let market_cap = past_price * supply;
    let percent_change = percent_change(current_price, past_price);
    let clamped_change = percent_change
        .map(|c| c.clamp(-CHANGE_CLAMP_PCT, CHANGE_CLAMP_PCT))
        .unwrap_or(0.0);

    NormalizedMetric {
        name: item.name.trim().to_string(),
        category: item.category.trim().to_string(),
        current_price,
        past_price,
        supply,
        market_cap,
        percent_change,
        clamped_change,
    }
}

/// Normalizes every row in input order.
pub fn normalize_items(items: &[MarketItem], timeframe: Timeframe) -> Vec<NormalizedMetric> {
    items
        .iter()
        .map(|item| normalize_item(item, timeframe))
        .collect()
}

/// `(current - past) / past * 100`, or `None` when that is not a finite number.
pub fn percent_change(current: f64, past: f64) -> Option<f64> {
    if past == 0.0 {
        return None;
    }
    let change = (current - past) / past * 100.0;
    change.is_finite().then_some(change)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(current: &str, past_24h: &str, supply: &str) -> MarketItem {
        MarketItem {
            name: " Fracture Case ".into(),
            category: "Case".into(),
            current_price: current.into(),
            price_24h_ago: past_24h.into(),
            supply: supply.into(),
            ..Default::default()
        }
    }

    #[test]
    fn computes_cap_and_change_from_past_price() {
        let m = normalize_item(&item("120", "100", "1000"), Timeframe::H24);
        assert_eq!(m.name, "Fracture Case");
        assert_eq!(m.market_cap, 100_000.0);
        assert_eq!(m.percent_change, Some(20.0));
        assert_eq!(m.clamped_change, 20.0);
        assert_eq!(m.current_market_cap(), 120_000.0);
    }

    #[test]
    fn accepts_comma_decimals() {
        let m = normalize_item(&item("0,50", "0,25", "10"), Timeframe::H24);
        assert_eq!(m.past_price, 0.25);
        assert_eq!(m.market_cap, 2.5);
        assert_eq!(m.percent_change, Some(100.0));
    }

    #[test]
    fn large_moves_are_clamped() {
        let m = normalize_item(&item("500", "100", "1"), Timeframe::H24);
        assert_eq!(m.percent_change, Some(400.0));
        assert_eq!(m.clamped_change, 100.0);

        let m = normalize_item(&item("0", "100", "1"), Timeframe::H24);
        assert_eq!(m.clamped_change, -100.0);
    }

    #[test]
    fn zero_past_price_is_unknown_not_infinite() {
        let m = normalize_item(&item("5", "0", "1000"), Timeframe::H24);
        assert_eq!(m.percent_change, None);
        assert_eq!(m.clamped_change, 0.0);
        assert_eq!(m.market_cap, 0.0);
    }

    #[test]
    fn unparseable_fields_do_not_panic() {
        let m = normalize_item(&item("abc", "", "lots"), Timeframe::H24);
        assert!(m.current_price.is_nan());
        assert!(m.market_cap.is_nan());
        assert_eq!(m.percent_change, None);
    }

    #[test]
    fn picks_the_column_for_the_timeframe() {
        let mut raw = item("110", "100", "1");
        raw.price_7d_ago = "55".into();
        let m = normalize_item(&raw, Timeframe::D7);
        assert_eq!(m.past_price, 55.0);
        assert_eq!(m.percent_change, Some(100.0));
    }
}
