use crate::{analysis::normalizer::percent_change, models::NormalizedMetric};

/// Percent move of the whole market: summed current caps against summed past caps.
/// Rows with an unparseable cap on either side are left out.
pub fn market_change(metrics: &[NormalizedMetric]) -> Option<f64> {
    let (current, past) = metrics
        .iter()
        .map(|m| (m.current_market_cap(), m.market_cap))
        .filter(|(current, past)| current.is_finite() && past.is_finite())
        .fold((0.0, 0.0), |(sum_c, sum_p), (c, p)| (sum_c + c, sum_p + p));
    percent_change(current, past)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(current_price: f64, past_price: f64, supply: f64) -> NormalizedMetric {
        NormalizedMetric {
            name: "x".into(),
            category: "Case".into(),
            current_price,
            past_price,
            supply,
            market_cap: past_price * supply,
            percent_change: None,
            clamped_change: 0.0,
        }
    }

    #[test]
    fn weights_moves_by_market_cap() {
        // 1000 -> 1100 and 100 -> 50: (1150 - 1100) / 1100
        let change = market_change(&[metric(11.0, 10.0, 100.0), metric(0.5, 1.0, 100.0)]).unwrap();
        assert!((change - 50.0 / 1100.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn unparseable_rows_are_ignored() {
        let change = market_change(&[metric(2.0, 1.0, 10.0), metric(f64::NAN, 1.0, 10.0)]);
        assert_eq!(change, Some(100.0));
    }

    #[test]
    fn empty_market_has_no_change() {
        assert_eq!(market_change(&[]), None);
        assert_eq!(market_change(&[metric(5.0, 0.0, 10.0)]), None);
    }
}
