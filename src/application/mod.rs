//! Use cases wiring the domain analyses to file input and report output.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use log::{debug, info};

use crate::domain::callgraph::CallGraph;
use crate::domain::dot_ingest::DotIngestor;
use crate::domain::matching::match_labels;
use crate::domain::report::build_report;
use crate::domain::taint::propagate;
use crate::infrastructure::demangler::Demangler;
use crate::infrastructure::{read_lines, read_seed_labels};
use crate::ports::ReportExporter;

fn load_graph(graph_file: &Path, demangle: bool) -> Result<CallGraph> {
    let mut lines = read_lines(graph_file)?;
    if demangle {
        lines = Demangler::new().demangle_lines(lines);
    }
    let graph = DotIngestor::new().ingest(&lines);
    info!(
        "loaded call graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Trace mode: propagate taint from every node whose label appears in the
/// seed list, then export the filtered badness report.
pub struct TraceUsecase<'a> {
    pub exporter: &'a dyn ReportExporter,
}

impl TraceUsecase<'_> {
    pub fn run(
        &self,
        graph_file: &Path,
        taint_file: &Path,
        filter_prefix: &str,
        demangle: bool,
        out: &mut dyn Write,
    ) -> Result<()> {
        let mut graph = load_graph(graph_file, demangle)?;
        let seed_labels = read_seed_labels(taint_file)?;
        debug!("seed labels: {:?}", seed_labels);

        // Seeds are named by label; a label matching no node contributes
        // nothing, which is not an error
        let seed_ids = graph.ids_labeled_any(&seed_labels);
        info!("resolved {} seed nodes from {} labels", seed_ids.len(), seed_labels.len());

        propagate(&mut graph, &seed_ids);

        let report = build_report(&graph, filter_prefix);
        self.exporter.export(&report, out)?;
        Ok(())
    }
}

/// Match mode: cross-reference externally produced labels against the
/// graph's labels by normalized form and print the fully-qualified matches.
pub struct MatchUsecase;

impl MatchUsecase {
    pub fn run(
        &self,
        graph_file: &Path,
        labels_file: &Path,
        demangle: bool,
        out: &mut dyn Write,
    ) -> Result<()> {
        let graph = load_graph(graph_file, demangle)?;
        let external: Vec<String> = read_seed_labels(labels_file)?.into_iter().collect();

        let matches = match_labels(&graph, &external);
        let mut originals: Vec<&String> = matches.values().collect();
        originals.sort();
        for original in originals {
            writeln!(out, "{}", original)?;
        }
        Ok(())
    }
}
