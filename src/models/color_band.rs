use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Seven ordinal colour categories, worst to best. `Ord` follows performance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display, EnumIter,
)]
pub enum ColorBand {
    #[strum(to_string = "worst")]
    Worst,
    #[strum(to_string = "second worst")]
    SecondWorst,
    #[strum(to_string = "third worst")]
    ThirdWorst,
    #[strum(to_string = "neutral")]
    Neutral,
    #[strum(to_string = "third best")]
    ThirdBest,
    #[strum(to_string = "second best")]
    SecondBest,
    #[strum(to_string = "best")]
    Best,
}

impl ColorBand {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The six signed tipping points for one scale, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandThresholds {
    pub scale: f64,
    pub negative_100: f64,
    pub negative_66: f64,
    pub negative_33: f64,
    pub positive_33: f64,
    pub positive_66: f64,
    pub positive_100: f64,
}
