mod format;
mod perf;

pub use format::{format_change, format_mcap_millions};
pub use perf::AppInstant;
