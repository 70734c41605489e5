//! Per-store aggregation and console reporting of timeslot availability.
//!
//! Slot summaries are the product output of the watcher and go to stdout;
//! the tracing stream is reserved for operational events.

use std::collections::BTreeMap;

use slotwatch_heb::{Store, Timeslot};

/// Counts timeslots per calendar date.
///
/// Every distinct date appears exactly once as a key and the counts sum to
/// `slots.len()`. A `BTreeMap` keeps iteration in ascending lexical date
/// order, which is the order the report prints.
pub(crate) fn slot_counts_by_date(slots: &[Timeslot]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for slot in slots {
        *counts.entry(slot.date.clone()).or_insert(0_usize) += 1;
    }
    counts
}

/// Prints one store's identity and its per-date slot counts.
pub(crate) fn print_store_summary(store: &Store, counts: &BTreeMap<String, usize>) {
    println!(
        "ID: {}, Name: {}, Zip: {}",
        store.id, store.name, store.postal_code
    );
    println!("==========================");
    for (date, count) in counts {
        println!("{date}: {count}");
    }
    println!();
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod tests;
