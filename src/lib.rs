#![allow(clippy::collapsible_if)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

use std::path::PathBuf;

// Re-export commonly used types outside of crate (for heatmap_report.rs and tests)
pub use analysis::{PipelineInput, compute_layout};
pub use app::App;
pub use config::PERSISTENCE;
pub use data::fetch_market_data;
pub use domain::{MarketItem, ViewportSize};
pub use models::HeatmapLayout;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Market rows exported as JSON (array of sheet rows). Falls back to the demo snapshot.
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Ignore --data-file and use the embedded demo snapshot
    #[arg(long, default_value_t = false)]
    pub demo: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
