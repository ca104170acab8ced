//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every pipeline run (inputs and tile counts).
    pub log_pipeline: bool,

    /// Log viewport size changes seen by the tracker.
    pub log_viewport: bool,

    /// Log provider attempts and fallbacks while loading data.
    pub log_data_load: bool,

    /// Selector changes (timeframe, grouping, exponent, colour mode).
    pub log_selection: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,

    /// Warn about rows that fail to parse.
    pub log_bad_rows: bool,
}

pub const DF: LogFlags = LogFlags {
    log_data_load: true,
    log_selection: true,
    log_bad_rows: true,

    log_pipeline: false,
    log_viewport: false,
    log_performance: false,
};
