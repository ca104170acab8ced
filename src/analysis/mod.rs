// Heatmap pipeline stages, raw rows in, tiles out
pub mod color_scale;
pub mod hierarchy;
pub mod market_change;
pub mod normalizer;
pub mod pipeline;
pub mod presentation;
pub mod treemap;

pub use {
    color_scale::{ChangeGradient, ColorScale, band_color},
    hierarchy::{build_hierarchy, leaf_weight},
    market_change::market_change,
    normalizer::{normalize_item, normalize_items, percent_change},
    pipeline::{PipelineInput, compute_layout},
    presentation::{detail_tier, leaf_font_size},
    treemap::{PlacedNode, TreemapPartitioner},
};
