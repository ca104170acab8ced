//! Heatmap visualization configuration

use eframe::egui::Color32;

pub struct HeatmapConfig {
    /// Band fills from worst to best (7 entries, ordinal order).
    pub band_colors: [Color32; 7],

    // --- CONTINUOUS GRADIENT MODE ---
    /// Loss ramp: intensity 0 -> 1
    pub loss_gradient: [&'static str; 2],
    /// Gain ramp: intensity 0 -> 1
    pub gain_gradient: [&'static str; 2],
    /// Per-channel offset for the lighter centre / darker edge shades
    pub shade_offset: i16,

    // --- TILE TEXT ---
    pub color_tile_text: Color32,
    pub color_group_title: Color32,
    pub color_tile_hover_stroke: Color32,
    pub tile_hover_stroke_width: f32,

    // --- AGGREGATE CHANGE ---
    pub color_market_up: Color32,
    pub color_market_down: Color32,

    // --- LEGEND ---
    pub legend_swatch_width: f32,
    pub legend_swatch_height: f32,

    pub color_background: Color32,
    pub color_text_subdued: Color32,
}

pub const HEATMAP_CONFIG: HeatmapConfig = HeatmapConfig {
    band_colors: [
        Color32::from_rgb(242, 54, 69), // worst
        Color32::from_rgb(178, 40, 51), // second worst
        Color32::from_rgb(128, 25, 34), // third worst
        Color32::from_rgb(61, 61, 61),  // neutral
        Color32::from_rgb(26, 51, 38),  // third best
        Color32::from_rgb(5, 102, 54),  // second best
        Color32::from_rgb(8, 153, 80),  // best
    ],

    loss_gradient: ["#962828", "#cd0000"],
    gain_gradient: ["#649664", "#00cd00"],
    shade_offset: 20,

    color_tile_text: Color32::BLACK,
    color_group_title: Color32::from_rgb(209, 213, 219), // gray-300
    color_tile_hover_stroke: Color32::WHITE,
    tile_hover_stroke_width: 1.5,

    color_market_up: Color32::from_rgb(34, 197, 94), // green-500
    color_market_down: Color32::from_rgb(239, 68, 68), // red-500

    legend_swatch_width: 64.0,
    legend_swatch_height: 10.0,

    color_background: Color32::from_rgb(31, 41, 55), // gray-800
    color_text_subdued: Color32::GRAY,
};
