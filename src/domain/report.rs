//! Badness Report Builder
//!
//! Aggregates per-node badness into per-label totals (monomorphized
//! instances share a label), sorts descending, and restricts the listing to
//! labels under a crate/namespace prefix.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::callgraph::CallGraph;

/// One row of the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub label: String,
    pub badness: u32,
}

/// True when `label` is zero or more leading `<` characters, then `prefix`,
/// then `::`. Generic-trait labels like `<my_crate::T as ...>` qualify.
fn label_matches_prefix(label: &str, prefix: &str) -> bool {
    label
        .trim_start_matches('<')
        .strip_prefix(prefix)
        .map_or(false, |rest| rest.starts_with("::"))
}

/// Build the sorted, filtered badness report for the tainted subgraph.
///
/// Entries sort by badness descending; ties break by label so the order is
/// reproducible run to run.
pub fn build_report(graph: &CallGraph, filter_prefix: &str) -> Vec<ReportEntry> {
    let mut label_to_badness: HashMap<&str, u32> = HashMap::new();
    for (id, node) in graph.tainted_nodes() {
        if let Some(label) = graph.label(id) {
            *label_to_badness.entry(label).or_insert(0) += node.badness;
        }
    }

    let mut entries: Vec<ReportEntry> = label_to_badness
        .into_iter()
        .filter(|(label, _)| label_matches_prefix(label, filter_prefix))
        .map(|(label, badness)| ReportEntry {
            label: label.to_string(),
            badness,
        })
        .collect();

    entries.sort_by_key(|e| (u32::MAX - e.badness, e.label.clone()));
    entries
}
