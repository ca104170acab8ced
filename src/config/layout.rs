//! Treemap geometry configuration (gutters and legibility thresholds).

/// d3-style padding. `inner` is the gap between siblings; each sibling gives up half of it.
/// The outer gutters apply to every node that has children, the root included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreemapPadding {
    pub inner: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl TreemapPadding {
    pub const NONE: Self = Self {
        inner: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };
}

impl Default for TreemapPadding {
    fn default() -> Self {
        TREEMAP_PADDING
    }
}

pub const TREEMAP_PADDING: TreemapPadding = TreemapPadding {
    inner: 2.0,
    // Taller top gutter leaves room for the category title
    top: 10.0,
    right: 4.0,
    bottom: 10.0,
    left: 4.0,
};

/// Minimum rect sizes (exclusive) for each leaf label tier.
pub struct DetailTierThresholds {
    pub full_min_width: f64,
    pub full_min_height: f64,
    pub compact_min_width: f64,
    pub compact_min_height: f64,
}

pub const DETAIL_TIERS: DetailTierThresholds = DetailTierThresholds {
    full_min_width: 80.0,
    full_min_height: 60.0,
    compact_min_width: 40.0,
    compact_min_height: 30.0,
};
