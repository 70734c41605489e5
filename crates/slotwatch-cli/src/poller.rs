//! The polling engine: immediate startup poll, fixed-cadence ticker,
//! cooperative cancellation.
//!
//! One poll cycle runs at a time; the loop blocks on each remote call
//! before returning to its wait, so ticks never overlap. Cancellation is
//! checked at the top of every wait and is final once requested. A poll
//! already in flight is not preempted; the engine observes the request at
//! its next wait and starts no further poll.

use slotwatch_core::WatchConfig;
use slotwatch_heb::{HebClient, HebError};
use thiserror::Error;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::summary::{print_store_summary, slot_counts_by_date};

/// Why a run ended without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnd {
    /// A cycle found open slots and the continue-on-success flag was unset.
    SlotsFound,
    /// External cancellation was requested.
    Cancelled,
}

/// A failed poll cycle. Every variant is fatal for the run: the engine
/// does not retry past a failed cycle, and "no stores in range" ends the
/// run exactly like a transport failure does.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("no stores within {miles} mile(s) of zip {zip}")]
    NoStoresInRange { miles: u32, zip: String },

    #[error(transparent)]
    Client(#[from] HebError),
}

/// Drives the poll/wait loop until slots are found, a cycle fails, or
/// cancellation is requested.
pub struct Poller {
    client: HebClient,
    config: WatchConfig,
    cancel: CancellationToken,
}

impl Poller {
    pub fn new(client: HebClient, config: WatchConfig, cancel: CancellationToken) -> Self {
        Self {
            client,
            config,
            cancel,
        }
    }

    /// Runs the engine to completion.
    ///
    /// # Errors
    ///
    /// Returns the first [`PollError`] a cycle produces.
    pub async fn run(&self) -> Result<RunEnd, PollError> {
        let mut ticker = tokio::time::interval(self.config.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            // The interval's first tick completes immediately, which is the
            // startup poll. Biased so cancellation beats an elapsed tick.
            tokio::select! {
                biased;
                () = self.cancel.cancelled() => {
                    tracing::info!("cancellation requested, stopping");
                    return Ok(RunEnd::Cancelled);
                }
                _ = ticker.tick() => {}
            }

            let found = self.pull_slots().await?;
            if found {
                if !self.config.continue_on_success {
                    return Ok(RunEnd::SlotsFound);
                }
                tracing::info!("open slots found, continuing on the same cadence");
            }
        }
    }

    /// One full poll cycle: locate stores, then fetch and report each
    /// store's per-date slot counts in locator order.
    ///
    /// Returns whether any store had at least one open slot. Every store
    /// is visited even after slots are found so all counts get reported.
    /// A failed timeslot fetch aborts the cycle immediately; stores not
    /// yet visited are skipped and the outcome carries no partial result.
    async fn pull_slots(&self) -> Result<bool, PollError> {
        let stores = self
            .client
            .locate_stores(&self.config.zip, self.config.radius_miles)
            .await?;
        if stores.is_empty() {
            return Err(PollError::NoStoresInRange {
                miles: self.config.radius_miles,
                zip: self.config.zip.clone(),
            });
        }

        let mut slots_found = false;
        for store in &stores {
            let timeslots = self.client.get_store_timeslots(&store.id).await?;
            let counts = slot_counts_by_date(&timeslots);
            print_store_summary(store, &counts);
            if !timeslots.is_empty() {
                slots_found = true;
            }
        }

        Ok(slots_found)
    }
}

#[cfg(test)]
#[path = "poller_test.rs"]
mod tests;
