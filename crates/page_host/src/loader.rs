//! Simulated document loader.
//!
//! Stands in for the streaming parse a real host performs before its
//! document is structurally complete: each `poll_progress` call consumes one
//! tick of remaining setup work. A stalled loader models a document whose
//! readiness notification never arrives.

use anyhow::{Error, anyhow};
use log::trace;

/// Tick-driven loader for deferred structural setup.
pub struct DocumentLoader {
    /// Remaining parse ticks; `None` means the loader never finishes.
    remaining_ticks: Option<u32>,
}

impl DocumentLoader {
    /// Create a loader that finishes after `ticks` progress polls.
    #[must_use]
    pub const fn with_ticks(ticks: u32) -> Self {
        Self {
            remaining_ticks: Some(ticks),
        }
    }

    /// Create a loader that never finishes.
    #[must_use]
    pub const fn stalled() -> Self {
        Self {
            remaining_ticks: None,
        }
    }

    /// Consume one tick of remaining setup work, if any remains.
    pub fn poll_progress(&mut self) {
        if let Some(remaining) = self.remaining_ticks.as_mut() {
            *remaining = remaining.saturating_sub(1);
            trace!("DocumentLoader: {remaining} parse tick(s) remaining");
        }
    }

    /// Returns true once all setup work has been consumed. A stalled loader
    /// never reports finished.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.remaining_ticks, Some(0))
    }

    /// Consume the loader once it has finished.
    ///
    /// Yields to the cooperative scheduler once so work queued behind the
    /// load (e.g., the ready-event dispatch) runs on a settled queue.
    ///
    /// # Errors
    ///
    /// Returns an error if the loader still has setup work remaining.
    pub async fn finish(self) -> Result<(), Error> {
        if !self.is_finished() {
            return Err(anyhow!("Loader consumed before setup finished!"));
        }
        tokio::task::yield_now().await;
        Ok(())
    }
}
