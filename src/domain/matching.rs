//! Cross-Reference Matcher
//!
//! Intersects a set of externally produced function labels with the graph's
//! labels, comparing normalized forms so that two tools' differently
//! qualified spellings of the same symbol still match. Matches resolve back
//! to the graph's original fully-qualified labels.

use std::collections::HashMap;

use crate::domain::callgraph::CallGraph;
use crate::domain::normalize::simplify_trait_paths;

/// Match `external` labels against the graph by normalized form.
///
/// Returns normalized label -> original graph label for every external label
/// whose normalized form appears among the graph's normalized labels. When
/// two graph labels normalize to the same value the later declaration wins;
/// such collisions are rare and tolerated.
pub fn match_labels(graph: &CallGraph, external: &[String]) -> HashMap<String, String> {
    let mut normalized_to_original: HashMap<String, String> = HashMap::new();
    for (_, label) in graph.declared_nodes() {
        normalized_to_original.insert(simplify_trait_paths(label), label.to_string());
    }

    external
        .iter()
        .filter_map(|label| {
            let normalized = simplify_trait_paths(label);
            normalized_to_original
                .get(&normalized)
                .map(|original| (normalized, original.clone()))
        })
        .collect()
}
