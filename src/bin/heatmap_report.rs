//! Runs the heatmap pipeline without a window and prints where every tile lands.

use anyhow::{Result, bail};
use clap::Parser;
use tabled::{Table, Tabled, settings::Style};

use scm_heatmap::{
    Cli, MarketItem, PipelineInput, ViewportSize, compute_layout,
    config::{AreaExponent, ColorMode, GroupingMode, Timeframe},
    fetch_market_data,
    models::LeafTile,
    utils::format_change,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Print the heatmap tile layout as a table")]
struct ReportArgs {
    #[command(flatten)]
    source: Cli,

    /// Look-back window: 6h, 24h, 3D, 7D or 30D
    #[arg(long, default_value_t = Timeframe::H24)]
    timeframe: Timeframe,

    /// Divided (one block per category) or Combined
    #[arg(long, default_value_t = GroupingMode::Divided)]
    grouping: GroupingMode,

    /// Area exponent in [0, 1]: 0 = equal tiles, 1 = true market-cap proportions
    #[arg(long, default_value_t = AreaExponent::default().value())]
    exponent: f64,

    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Colour tiles with the continuous gradient instead of bands
    #[arg(long, default_value_t = false)]
    gradient: bool,
}

#[derive(Tabled)]
struct TileRow {
    name: String,
    category: String,
    #[tabled(rename = "change %")]
    change: String,
    band: String,
    weight: String,
    x: String,
    y: String,
    w: String,
    h: String,
    tier: String,
}

impl From<&LeafTile> for TileRow {
    fn from(leaf: &LeafTile) -> Self {
        Self {
            name: leaf.name.clone(),
            category: leaf.category.clone(),
            change: format_change(leaf.percent_change),
            band: leaf.band.to_string(),
            weight: format!("{:.2}", leaf.weight),
            x: format!("{:.1}", leaf.rect.x),
            y: format!("{:.1}", leaf.rect.y),
            w: format!("{:.1}", leaf.rect.width),
            h: format!("{:.1}", leaf.rect.height),
            tier: leaf.detail.to_string(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = ReportArgs::parse();
    if !(args.width > 0.0 && args.height > 0.0) {
        bail!("Viewport must be positive, got {}x{}", args.width, args.height);
    }

    let (items, source): (Vec<MarketItem>, &str) = fetch_market_data(&args.source).await;
    log::info!("{} rows from {}", items.len(), source);

    let layout = compute_layout(&PipelineInput {
        items: &items,
        loading: false,
        timeframe: args.timeframe,
        grouping: args.grouping,
        area_exponent: AreaExponent::new(args.exponent),
        color_mode: if args.gradient {
            ColorMode::Gradient
        } else {
            ColorMode::Bands
        },
        viewport: ViewportSize::new(args.width, args.height),
    });

    let rows: Vec<TileRow> = layout.leaves.iter().map(TileRow::from).collect();
    println!("{}", Table::new(rows).with(Style::rounded()));

    for group in &layout.groups {
        println!(
            "{:<12} x={:.1} y={:.1} w={:.1} h={:.1}",
            group.title(),
            group.rect.x,
            group.rect.y,
            group.rect.width,
            group.rect.height
        );
    }

    let legend: Vec<String> = layout.legend.entries.iter().map(|e| e.label()).collect();
    println!(
        "Legend ({}, scale {}%): {}",
        layout.legend.timeframe,
        layout.legend.thresholds.scale,
        legend.join(" | ")
    );
    println!(
        "Market change ({}): {}",
        args.timeframe,
        format_change(layout.market_change)
    );

    Ok(())
}
