use std::sync::LazyLock;

use argminmax::ArgMinMax;

#[cfg(debug_assertions)]
use crate::config::DF;

use crate::{
    analysis::{
        ChangeGradient, ColorScale, TreemapPartitioner, build_hierarchy, detail_tier,
        leaf_font_size, market_change, normalize_items,
    },
    config::{AreaExponent, ColorMode, GroupingMode, TREEMAP_PADDING, Timeframe},
    domain::{MarketItem, ViewportSize},
    models::{GroupTile, HeatmapLayout, LeafTile, Legend, TileShade, WeightedNode},
};

static CHANGE_GRADIENT: LazyLock<Option<ChangeGradient>> = LazyLock::new(|| {
    ChangeGradient::new()
        .map_err(|e| log::error!("Gradient colour mode unavailable, using bands: {:#}", e))
        .ok()
});

/// Everything one pipeline run depends on. Any change means a full recompute.
#[derive(Debug, Clone, Copy)]
pub struct PipelineInput<'a> {
    pub items: &'a [MarketItem],
    /// Data source still fetching: lay out nothing.
    pub loading: bool,
    pub timeframe: Timeframe,
    pub grouping: GroupingMode,
    pub area_exponent: AreaExponent,
    pub color_mode: ColorMode,
    pub viewport: ViewportSize,
}

/// Raw rows + selectors + viewport -> renderable tiles. Pure and deterministic.
pub fn compute_layout(input: &PipelineInput) -> HeatmapLayout {
    crate::trace_time!("compute_layout", 2_000, {
        let scale = ColorScale::for_timeframe(input.timeframe);
        let legend = Legend {
            timeframe: input.timeframe,
            thresholds: scale.thresholds(),
            entries: scale.legend_entries(),
        };
        let mut layout = HeatmapLayout {
            viewport: input.viewport,
            grouping: input.grouping,
            leaves: Vec::new(),
            groups: Vec::new(),
            legend,
            market_change: None,
        };
        if input.loading {
            return layout;
        }

        let metrics = normalize_items(input.items, input.timeframe);
        layout.market_change = market_change(&metrics);

        let root = build_hierarchy(metrics, input.grouping, input.area_exponent);
        let weights: Vec<f64> = root.leaves().iter().map(|(_, w)| *w).collect();
        let max_weight = if weights.is_empty() {
            0.0
        } else {
            let max_idx: usize = weights.argmax();
            weights[max_idx]
        };

        let gradient = match input.color_mode {
            ColorMode::Gradient => CHANGE_GRADIENT.as_ref(),
            ColorMode::Bands => None,
        };

        for placed in TreemapPartitioner::new(TREEMAP_PADDING).partition(&root, input.viewport) {
            match placed.node {
                WeightedNode::Leaf { metric, weight } => {
                    let band = scale.band(metric.percent_change);
                    let shade = match gradient {
                        Some(g) => g.shade(metric.clamped_change),
                        None => TileShade::flat(scale.color(metric.percent_change)),
                    };
                    layout.leaves.push(LeafTile {
                        name: metric.name.clone(),
                        category: metric.category.clone(),
                        rect: placed.rect,
                        percent_change: metric.percent_change,
                        market_cap: metric.market_cap,
                        weight: *weight,
                        band,
                        shade,
                        detail: detail_tier(&placed.rect),
                        font_size: leaf_font_size(*weight, max_weight, &placed.rect),
                    });
                }
                WeightedNode::Group {
                    label: Some(label),
                    weight,
                    ..
                } => layout.groups.push(GroupTile {
                    label: label.clone(),
                    rect: placed.rect,
                    weight: *weight,
                }),
                // Unlabelled root
                WeightedNode::Group { label: None, .. } => {}
            }
        }

        #[cfg(debug_assertions)]
        if DF.log_pipeline {
            log::info!(
                "Pipeline: {} rows, {} {} {} @ {} -> {} tiles, {} groups",
                input.items.len(),
                input.timeframe,
                input.grouping,
                input.area_exponent,
                input.viewport,
                layout.leaves.len(),
                layout.groups.len()
            );
        }

        layout
    })
}
