//! Read-only projections over the result stream.
//!
//! Consumers read the same underlying sequence two ways: the single most
//! recent result, or the most recent result per kind. Both are views; neither
//! mutates the log.

use centum_types::{CalculationKind, CalculationResult};
use std::collections::HashMap;

/// The most recent result overall, by timestamp.
pub fn latest(entries: &[CalculationResult]) -> Option<&CalculationResult> {
    entries.iter().max_by_key(|entry| entry.timestamp)
}

/// The most recent result for each kind that appears in the stream.
pub fn latest_by_kind(
    entries: &[CalculationResult],
) -> HashMap<CalculationKind, &CalculationResult> {
    let mut latest: HashMap<CalculationKind, &CalculationResult> = HashMap::new();
    for entry in entries {
        latest
            .entry(entry.kind)
            .and_modify(|current| {
                if entry.timestamp > current.timestamp {
                    *current = entry;
                }
            })
            .or_insert(entry);
    }
    latest
}
