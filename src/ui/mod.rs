mod heatmap_view;
mod legend;
mod screens;
mod styles;
mod ui_config;
mod ui_render;
mod ui_text;
mod viewport_tracker;

pub use heatmap_view::HeatmapView;
pub use viewport_tracker::ViewportTracker;

pub(crate) use legend::render_legend;
pub(crate) use screens::render_loading;
pub(crate) use styles::UiStyleExt;
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
