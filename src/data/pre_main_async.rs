// Async loading that runs off the UI thread before the heatmap has any rows

#[cfg(debug_assertions)]
use crate::config::DF;

use crate::{Cli, domain::MarketItem};

#[cfg(not(target_arch = "wasm32"))]
use crate::data::{DemoProvider, JsonFileProvider, MarketDataProvider};

/// Try each configured source in turn. A source that fails is logged and skipped;
/// if all fail the heatmap simply stays empty.
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_market_data(args: &Cli) -> (Vec<MarketItem>, &'static str) {
    let providers: Vec<Box<dyn MarketDataProvider>> = match (&args.data_file, args.demo) {
        (Some(path), false) => vec![
            Box::new(JsonFileProvider::new(path.clone())),
            Box::new(DemoProvider),
        ], // file first, snapshot as fallback
        _ => vec![Box::new(DemoProvider)],
    };

    for provider in &providers {
        match provider.fetch_items().await {
            Ok(items) => {
                #[cfg(debug_assertions)]
                if DF.log_data_load {
                    log::info!(
                        "Loaded {} market rows using: {}.",
                        items.len(),
                        provider.signature()
                    );
                }
                return (items, provider.signature());
            }
            Err(e) => {
                log::warn!("⚠️  {} failed: {:#}", provider.signature(), e);
            }
        }
    }

    log::error!("No market data source succeeded; heatmap will be empty");
    (Vec::new(), "no data")
}

/// The browser build only ships the embedded snapshot.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_market_data(_args: &Cli) -> (Vec<MarketItem>, &'static str) {
    match crate::data::DemoData::load() {
        Ok(items) => {
            #[cfg(debug_assertions)]
            if DF.log_data_load {
                log::info!("Loaded {} market rows from the demo snapshot.", items.len());
            }
            (items, crate::config::DEMO.source_label)
        }
        Err(e) => {
            log::error!("Embedded demo data unusable: {:#}", e);
            (Vec::new(), "no data")
        }
    }
}
