mod demo;
mod pre_main_async;
#[cfg(not(target_arch = "wasm32"))]
mod provider;
mod source;

pub use {
    demo::DemoData,
    pre_main_async::fetch_market_data,
    source::{count_bad_rows, parse_items},
};

#[cfg(not(target_arch = "wasm32"))]
pub use provider::{DemoProvider, JsonFileProvider, MarketDataProvider};
