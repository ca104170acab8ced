// Native-only code i.e. gated in mod.rs by #[cfg(not(target_arch = "wasm32"))] so no need to gate internally here

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::{
    config::DEMO,
    data::{DemoData, parse_items},
    domain::MarketItem,
};

/// Anything that can hand over the full table of market rows.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Short human-readable description of where the rows came from.
    fn signature(&self) -> &'static str;

    async fn fetch_items(&self) -> Result<Vec<MarketItem>>;
}

/// Rows exported from the sheet into a local JSON file.
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl MarketDataProvider for JsonFileProvider {
    fn signature(&self) -> &'static str {
        "local JSON file"
    }

    async fn fetch_items(&self) -> Result<Vec<MarketItem>> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        parse_items(&json).with_context(|| format!("Bad market data in {}", self.path.display()))
    }
}

pub struct DemoProvider;

#[async_trait]
impl MarketDataProvider for DemoProvider {
    fn signature(&self) -> &'static str {
        DEMO.source_label
    }

    async fn fetch_items(&self) -> Result<Vec<MarketItem>> {
        DemoData::load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_reports_its_path() {
        let provider = JsonFileProvider::new(PathBuf::from("/definitely/not/here.json"));
        let err = provider.fetch_items().await.unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/not/here.json"));
    }

    #[tokio::test]
    async fn reads_the_bundled_snapshot_from_disk() {
        let path = PathBuf::from(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/",
            crate::demo_data_file!()
        ));
        let items = JsonFileProvider::new(path).fetch_items().await.unwrap();
        assert!(!items.is_empty());
    }
}
