//! Configuration module for the heatmap application.

// Can all be private now because we have a public re-export.
mod debug;
mod demo;
mod heatmap;
mod layout;
mod persistence;
mod types;

// Public
pub mod constants;

// Re-export commonly used items
pub use debug::DF;
pub use demo::DEMO;
pub use heatmap::{HEATMAP_CONFIG, HeatmapConfig};
pub use layout::{DETAIL_TIERS, DetailTierThresholds, TREEMAP_PADDING, TreemapPadding};
pub use persistence::PERSISTENCE;
pub use types::{AreaExponent, ColorMode, GroupingMode, Timeframe};
