use std::sync::LazyLock;

pub const ICON_UP: &str = "\u{25b2}";
pub const ICON_DOWN: &str = "\u{25bc}";
pub const ICON_FLAT: &str = "\u{25c6}";

pub struct UiText {
    // --- Toolbar ---
    pub tb_timeframe: String,
    pub tb_grouping: String,
    pub tb_color_mode: String,
    pub tb_area: String,
    pub tb_legend: String,
    pub tb_market: String,

    // --- Loading ---
    pub ls_title: String,
    pub ls_main: String,

    // --- Central panel ---
    pub cp_no_data: String,
    pub cp_waiting_for_space: String,

    // --- Tooltip ---
    pub tt_category: String,
    pub tt_market_cap: String,
    pub tt_change: String,

    // --- Status bar ---
    pub sb_source: String,
    pub sb_rows: String,
    pub sb_bad_rows: String,
    pub sb_tiles: String,

    pub icon_up: String,
    pub icon_down: String,
    pub icon_flat: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    tb_timeframe: "Change over".to_string(),
    tb_grouping: "Layout".to_string(),
    tb_color_mode: "Colours".to_string(),
    tb_area: "Area".to_string(),
    tb_legend: "Legend".to_string(),
    tb_market: "Market".to_string(),

    ls_title: "LOADING MARKET DATA".to_string(),
    ls_main: "Reading the latest market snapshot. The heatmap appears as soon as the rows arrive."
        .to_string(),

    cp_no_data: "No market data available.".to_string(),
    cp_waiting_for_space: "Waiting for the window to get some room...".to_string(),

    tt_category: "Category".to_string(),
    tt_market_cap: "Market cap".to_string(),
    tt_change: "Change".to_string(),

    sb_source: "Source".to_string(),
    sb_rows: "Rows".to_string(),
    sb_bad_rows: "unusable".to_string(),
    sb_tiles: "Tiles".to_string(),

    icon_up: ICON_UP.to_string(),
    icon_down: ICON_DOWN.to_string(),
    icon_flat: ICON_FLAT.to_string(),
});
