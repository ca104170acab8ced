use eframe::egui::Color32;
use serde::Serialize;
use strum_macros::Display;

use crate::{
    config::{GroupingMode, Timeframe},
    domain::{Rect, ViewportSize},
    models::{BandThresholds, ColorBand},
};

/// How much text fits in a leaf rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Display)]
pub enum DetailTier {
    /// Nothing drawn on the tile.
    Blank,
    /// Name and percent change.
    Compact,
    /// Name, percent change and market cap.
    Full,
}

/// Base fill plus lighter centre and darker edge shades.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileShade {
    pub lighter: Color32,
    pub base: Color32,
    pub darker: Color32,
}

impl TileShade {
    pub fn flat(color: Color32) -> Self {
        Self {
            lighter: color,
            base: color,
            darker: color,
        }
    }

    pub fn is_flat(&self) -> bool {
        self.lighter == self.base && self.darker == self.base
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeafTile {
    pub name: String,
    pub category: String,
    pub rect: Rect,
    pub percent_change: Option<f64>,
    pub market_cap: f64,
    pub weight: f64,
    pub band: ColorBand,
    pub shade: TileShade,
    pub detail: DetailTier,
    pub font_size: f32,
}

/// Rectangle of one category; its title sits in the top gutter.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTile {
    pub label: String,
    pub rect: Rect,
    pub weight: f64,
}

impl GroupTile {
    pub fn title(&self) -> String {
        format!("{}s >", self.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry {
    pub threshold: f64,
    pub color: Color32,
}

impl LegendEntry {
    /// Integral thresholds print bare, others with one decimal.
    pub fn label(&self) -> String {
        if self.threshold.fract() == 0.0 {
            format!("{:.0}%", self.threshold)
        } else {
            format!("{:.1}%", self.threshold)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub timeframe: Timeframe,
    pub thresholds: BandThresholds,
    /// Seven swatches, worst to best, labelled by their tipping point (0 for neutral).
    pub entries: Vec<LegendEntry>,
}

/// Immutable output of one pipeline run. Replaced wholesale on every recompute.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapLayout {
    pub viewport: ViewportSize,
    pub grouping: GroupingMode,
    pub leaves: Vec<LeafTile>,
    pub groups: Vec<GroupTile>,
    pub legend: Legend,
    pub market_change: Option<f64>,
}

impl HeatmapLayout {
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Topmost leaf under a point, for hover tooltips.
    pub fn leaf_at(&self, x: f64, y: f64) -> Option<&LeafTile> {
        self.leaves.iter().find(|leaf| {
            x >= leaf.rect.x && x < leaf.rect.right() && y >= leaf.rect.y && y < leaf.rect.bottom()
        })
    }
}
