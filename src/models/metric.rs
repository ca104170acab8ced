use serde::Serialize;

/// Numeric view of one [`MarketItem`](crate::domain::MarketItem) for one timeframe.
/// Rebuilt on every pipeline run; parse failures surface as `NaN` fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedMetric {
    pub name: String,
    pub category: String,
    pub current_price: f64,
    pub past_price: f64,
    pub supply: f64,
    /// `past_price * supply`
    pub market_cap: f64,
    /// `None` when undefined (past price zero or any input unparseable)
    pub percent_change: Option<f64>,
    /// `percent_change` bounded to [-100, 100]; 0 when undefined
    pub clamped_change: f64,
}

impl NormalizedMetric {
    /// `current_price * supply`, used for the aggregate market move.
    pub fn current_market_cap(&self) -> f64 {
        self.current_price * self.supply
    }
}
