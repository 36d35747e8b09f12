//! Taint Propagation Engine
//!
//! Walks the call graph backwards (callee -> caller) from each seed node and
//! counts, per node, how many distinct seeds can reach it. A node reachable
//! from one seed over many paths, or through a cycle, still counts that seed
//! exactly once: each seed's walk first accumulates the full set of touched
//! nodes, and badness is bumped once per touched node afterwards.

use std::collections::HashSet;

use dashmap::DashMap;
use log::debug;
use rayon::prelude::*;

use crate::domain::callgraph::CallGraph;

/// Every node that `seed` can taint: the seed itself plus all transitive
/// callers, collected generation by generation.
///
/// Membership in the returned set doubles as the "tainted by this seed"
/// marker, so no node enters more than one generation and the walk terminates
/// on any finite graph, cycles included.
pub fn reachable_callers(graph: &CallGraph, seed: &str) -> HashSet<String> {
    let mut touched: HashSet<String> = HashSet::new();
    touched.insert(seed.to_string());

    let mut generation: HashSet<String> = graph
        .callers_of(seed)
        .filter(|caller| !touched.contains(*caller))
        .map(str::to_string)
        .collect();

    while !generation.is_empty() {
        for id in &generation {
            debug!("tainting {}", graph.label(id).unwrap_or(id));
            touched.insert(id.clone());
        }

        // Callers of this generation we have not tainted yet form the next one
        let next: HashSet<String> = generation
            .iter()
            .flat_map(|id| graph.callers_of(id))
            .filter(|caller| !touched.contains(*caller))
            .map(str::to_string)
            .collect();
        generation = next;
    }

    touched
}

/// Propagate taint from every seed and fold the results into the graph.
///
/// Seed walks are independent reads of the immutable graph and run in
/// parallel; their contributions meet in a concurrent-writer-safe map, so
/// each (node, seed) pair contributes exactly one unit of badness no matter
/// how the walks interleave. The merged totals are order-independent.
pub fn propagate(graph: &mut CallGraph, seed_ids: &[String]) {
    let tainted_by: DashMap<String, HashSet<String>> = DashMap::new();

    let shared: &CallGraph = graph;
    seed_ids.par_iter().for_each(|seed| {
        debug!("taint starting at {}", shared.label(seed).unwrap_or(seed));
        for id in reachable_callers(shared, seed) {
            tainted_by.entry(id).or_default().insert(seed.clone());
        }
    });

    for (id, seeds) in tainted_by {
        for seed in &seeds {
            graph.apply_taint(&id, seed);
        }
    }
}
