use serde::{Deserialize, Deserializer, Serialize};

use crate::config::Timeframe;

/// One row of the market spreadsheet, exactly as the data source delivers it.
/// Every numeric-looking field stays textual here; see [`parse_decimal`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MarketItem {
    #[serde(rename = "Item", default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(rename = "Type", default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(rename = "Date", default, deserialize_with = "lenient_text")]
    pub date: String,
    #[serde(rename = "Current price", default, deserialize_with = "lenient_text")]
    pub current_price: String,
    #[serde(rename = "6h ago", default, deserialize_with = "lenient_text")]
    pub price_6h_ago: String,
    #[serde(rename = "24h ago", default, deserialize_with = "lenient_text")]
    pub price_24h_ago: String,
    #[serde(rename = "3D ago", default, deserialize_with = "lenient_text")]
    pub price_3d_ago: String,
    #[serde(rename = "7D ago", default, deserialize_with = "lenient_text")]
    pub price_7d_ago: String,
    #[serde(rename = "30D ago", default, deserialize_with = "lenient_text")]
    pub price_30d_ago: String,
    #[serde(rename = "Supply", default, deserialize_with = "lenient_text")]
    pub supply: String,
    #[serde(rename = "Size", default, deserialize_with = "lenient_text")]
    pub size: String,
}

impl MarketItem {
    /// Raw past-price text for the given look-back window.
    pub fn price_at_offset(&self, timeframe: Timeframe) -> &str {
        match timeframe {
            Timeframe::H6 => &self.price_6h_ago,
            Timeframe::H24 => &self.price_24h_ago,
            Timeframe::D3 => &self.price_3d_ago,
            Timeframe::D7 => &self.price_7d_ago,
            Timeframe::D30 => &self.price_30d_ago,
        }
    }
}

/// Accepts strings, numbers, booleans or null and keeps a textual form.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Text(String),
        Number(serde_json::Number),
        Flag(bool),
        Nothing(()),
    }

    Ok(match Lenient::deserialize(deserializer)? {
        Lenient::Text(s) => s,
        Lenient::Number(n) => n.to_string(),
        Lenient::Flag(b) => b.to_string(),
        Lenient::Nothing(()) => String::new(),
    })
}

/// Parse a decimal that may use `,` as radix point and spaces as thousands separators.
/// Anything unparseable (or infinite) becomes `NaN`, never an error.
pub fn parse_decimal(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{202f}' && *c != '\u{a0}')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    // Reject words f64::from_str would otherwise accept ("inf", "NaN", "infinity")
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return f64::NAN;
    }

    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_and_dot_decimals() {
        assert_eq!(parse_decimal("12,5"), 12.5);
        assert_eq!(parse_decimal(" 0.75 "), 0.75);
        assert_eq!(parse_decimal("1 234,5"), 1234.5);
        assert_eq!(parse_decimal("1\u{202f}000"), 1000.0);
        assert_eq!(parse_decimal("-3"), -3.0);
    }

    #[test]
    fn malformed_text_is_nan() {
        assert!(parse_decimal("").is_nan());
        assert!(parse_decimal("n/a").is_nan());
        assert!(parse_decimal("inf").is_nan());
        assert!(parse_decimal("NaN").is_nan());
        assert!(parse_decimal("1,2,3").is_nan());
        assert!(parse_decimal("1e999").is_nan());
    }

    #[test]
    fn deserializes_sheet_rows_leniently() {
        let json = r#"[
            {"Item": "Kilowatt Case", "Type": "Case", "Current price": "1,20",
             "6h ago": "1,10", "24h ago": 1.0, "Supply": 5000000},
            {"Item": "Broken Row", "Type": null}
        ]"#;
        let items: Vec<MarketItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Kilowatt Case");
        assert_eq!(items[0].price_at_offset(Timeframe::H6), "1,10");
        assert_eq!(items[0].price_at_offset(Timeframe::H24), "1.0");
        assert_eq!(items[0].supply, "5000000");
        assert_eq!(items[1].category, "");
        assert_eq!(items[1].price_at_offset(Timeframe::D30), "");
    }
}
