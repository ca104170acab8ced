use anyhow::{Context, Result};

use crate::{config::DEMO, data::parse_items, domain::MarketItem};

// Snapshot baked into the binary so the heatmap always has something to show
const DEMO_ITEMS_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/",
    crate::demo_data_file!()
));

pub struct DemoData;

impl DemoData {
    pub fn load() -> Result<Vec<MarketItem>> {
        #[cfg(debug_assertions)]
        log::info!("Loading embedded demo snapshot...");

        let mut items =
            parse_items(DEMO_ITEMS_JSON).context("Failed to parse embedded demo data")?;

        if items.len() > DEMO.max_items {
            items.truncate(DEMO.max_items);
        }

        Ok(items)
    }
}
