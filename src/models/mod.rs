mod color_band;
mod heatmap_layout;
mod metric;
mod weighted_node;

pub use {
    color_band::{BandThresholds, ColorBand},
    heatmap_layout::{
        DetailTier, GroupTile, HeatmapLayout, LeafTile, Legend, LegendEntry, TileShade,
    },
    metric::NormalizedMetric,
    weighted_node::WeightedNode,
};
