pub struct DemoConfig {
    /// Label reported as the data source when the embedded snapshot is used.
    pub source_label: &'static str,
    /// Cap on rows taken from the embedded snapshot.
    pub max_items: usize,
}

pub const DEMO: DemoConfig = DemoConfig {
    source_label: "embedded demo snapshot",
    max_items: 64,
};

// --- MACROS FOR COMPILE-TIME INCLUDES ---

#[macro_export]
macro_rules! demo_data_file {
    () => {
        "demo_data/market_items.json"
    };
}
