#[cfg(debug_assertions)]
use crate::config::DF;

use crate::domain::ViewportSize;

/// Holds the latest observed size of the heatmap surface. Only the UI writes it;
/// the pipeline gets a copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewportTracker {
    current: ViewportSize,
    changes: u64,
}

impl ViewportTracker {
    /// Record a size seen on this frame. Returns `true` only when it differs from
    /// the last one, which is the signal to recompute the layout.
    pub fn observe(&mut self, size: ViewportSize) -> bool {
        if size == self.current {
            return false;
        }

        #[cfg(debug_assertions)]
        if DF.log_viewport {
            log::info!("Viewport {} -> {}", self.current, size);
        }

        self.current = size;
        self.changes += 1;
        true
    }

    pub fn current(&self) -> ViewportSize {
        self.current
    }

    /// Number of distinct sizes seen so far, including the first paint.
    pub fn changes(&self) -> u64 {
        self.changes
    }
}
