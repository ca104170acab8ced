//! Strongly-typed selector values owned by the surrounding application.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::config::constants::DEFAULT_AREA_EXPONENT;

/// Look-back window used to pick the past-price column and the colour scale.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Default,
)]
#[strum(ascii_case_insensitive)]
pub enum Timeframe {
    #[default]
    #[strum(serialize = "6h")]
    H6,
    #[strum(serialize = "24h")]
    H24,
    #[strum(serialize = "3D")]
    D3,
    #[strum(serialize = "7D")]
    D7,
    #[strum(serialize = "30D")]
    D30,
}

impl Timeframe {
    /// Spreadsheet column holding the price at this offset, e.g. `"24h ago"`.
    pub fn column_label(&self) -> String {
        format!("{} ago", self)
    }

    /// Colour-scale magnitude in percent.
    pub fn scale(&self) -> f64 {
        match self {
            Self::H6 => 4.0,
            Self::H24 => 8.0,
            Self::D3 => 16.0,
            Self::D7 => 24.0,
            Self::D30 => 30.0,
        }
    }
}

/// How leaves are arranged under the root.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Default,
)]
#[strum(ascii_case_insensitive)]
pub enum GroupingMode {
    /// One sub-treemap per category.
    #[default]
    Divided,
    /// Single flat treemap.
    Combined,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Default,
)]
#[strum(ascii_case_insensitive)]
pub enum ColorMode {
    /// Seven discrete bands.
    #[default]
    Bands,
    /// Continuous red/green ramp with light centre and dark edges.
    Gradient,
}

/// Power applied to market cap before it becomes a layout weight.
/// 0.0 = "unified scale" (all equal), 1.0 = "realistic scale".
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct AreaExponent(f64);

impl AreaExponent {
    pub const UNIFIED: Self = Self(0.0);
    pub const REALISTIC: Self = Self(1.0);

    pub const fn new(val: f64) -> Self {
        // NaN fails both comparisons and lands on 0.0 via the first arm
        let v = if !(val >= 0.0) {
            0.0
        } else if val > 1.0 {
            1.0
        } else {
            val
        };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for AreaExponent {
    fn from(val: f64) -> Self {
        Self::new(val)
    }
}

impl From<AreaExponent> for f64 {
    fn from(exp: AreaExponent) -> Self {
        exp.0
    }
}

impl Default for AreaExponent {
    fn default() -> Self {
        Self::new(DEFAULT_AREA_EXPONENT)
    }
}

impl std::fmt::Display for AreaExponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self == Self::REALISTIC {
            write!(f, "Realistic scale")
        } else if *self == Self::UNIFIED {
            write!(f, "Unified scale")
        } else {
            write!(f, "Scale: ({:.2})", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn timeframe_labels_round_trip_through_strum() {
        assert_eq!(Timeframe::D3.to_string(), "3D");
        assert_eq!(Timeframe::from_str("30D").ok(), Some(Timeframe::D30));
        assert!(Timeframe::from_str("1Y").is_err());
        assert_eq!(Timeframe::H24.column_label(), "24h ago");
    }

    #[test]
    fn timeframe_scales() {
        assert_eq!(Timeframe::H6.scale(), 4.0);
        assert_eq!(Timeframe::H24.scale(), 8.0);
        assert_eq!(Timeframe::D3.scale(), 16.0);
        assert_eq!(Timeframe::D7.scale(), 24.0);
        assert_eq!(Timeframe::D30.scale(), 30.0);
    }

    #[test]
    fn area_exponent_is_clamped() {
        assert_eq!(AreaExponent::new(-0.5).value(), 0.0);
        assert_eq!(AreaExponent::new(1.7).value(), 1.0);
        assert_eq!(AreaExponent::new(f64::NAN).value(), 0.0);
        assert_eq!(AreaExponent::new(0.4).value(), 0.4);
        assert_eq!(AreaExponent::new(1.0).to_string(), "Realistic scale");
        assert_eq!(AreaExponent::new(0.0).to_string(), "Unified scale");
    }

    #[test]
    fn persisted_area_exponent_is_clamped_on_load() {
        let high: AreaExponent = serde_json::from_str("5.0").unwrap();
        let low: AreaExponent = serde_json::from_str("-2.0").unwrap();
        let mid: AreaExponent = serde_json::from_str("0.35").unwrap();
        assert_eq!(high, AreaExponent::REALISTIC);
        assert_eq!(low, AreaExponent::UNIFIED);
        assert_eq!(mid.value(), 0.35);
        assert_eq!(serde_json::to_string(&mid).unwrap(), "0.35");
    }
}
