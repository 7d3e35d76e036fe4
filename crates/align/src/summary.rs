//! Per-run outcome tallies, serialized alongside the outcomes themselves.

use std::collections::BTreeMap;

use serde::Serialize;

use tabula_core::{Outcome, TranslationRecord};

/// Aggregate counts over one artifact's alignment run. Maps are ordered so
/// serialized output is stable across reruns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlignSummary {
    pub total: usize,
    pub matched: usize,
    pub unmatchable: usize,
    pub unresolved: usize,
    /// Matched counts keyed by method name.
    pub by_method: BTreeMap<String, usize>,
    /// Unmatchable counts keyed by reason name.
    pub by_reason: BTreeMap<String, usize>,
}

pub fn compute_summary(records: &[TranslationRecord]) -> AlignSummary {
    let mut summary = AlignSummary {
        total: records.len(),
        ..AlignSummary::default()
    };
    for record in records {
        match &record.outcome {
            Outcome::Matched { method, .. } => {
                summary.matched += 1;
                *summary.by_method.entry(method.to_string()).or_insert(0) += 1;
            }
            Outcome::Unmatchable { reason } => {
                summary.unmatchable += 1;
                *summary.by_reason.entry(reason.to_string()).or_insert(0) += 1;
            }
            Outcome::Unresolved => summary.unresolved += 1,
        }
    }
    summary
}
