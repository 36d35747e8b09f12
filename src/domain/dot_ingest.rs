//! Graph Description Ingestor
//!
//! Parses the textual call-graph description emitted by the upstream tracer
//! (Graphviz record style) into a [`CallGraph`]. Two line shapes are
//! recognized; everything else is skipped without diagnostic, since upstream
//! output is structurally noisy (graph attributes, comments, blank lines).

use log::trace;
use regex::Regex;

use crate::domain::callgraph::CallGraph;

/// Classification of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `<node-id> [shape=record,label="{<label>}"];`
    Node { id: String, label: String },
    /// `<from> -> <to>;`
    Edge { from: String, to: String },
    /// Anything else. Not an error.
    Unrecognized,
}

/// Line classifier shared by the loader and the label matcher.
///
/// A line containing the edge marker is only ever tried against the edge
/// pattern, everything else only against the node pattern.
pub struct DotClassifier {
    node_re: Regex,
    edge_re: Regex,
}

const EDGE_MARKER: &str = "->";

impl Default for DotClassifier {
    fn default() -> Self {
        // Hard-coded patterns, cannot fail to compile
        Self {
            node_re: Regex::new(r#"^\W*(.*?) \[shape=record,label="\{(.*?)\}"\];"#).unwrap(),
            edge_re: Regex::new(r"\W*(.*) -> (.*);").unwrap(),
        }
    }
}

impl DotClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify(&self, line: &str) -> LineKind {
        if line.contains(EDGE_MARKER) {
            if let Some(cap) = self.edge_re.captures(line) {
                return LineKind::Edge {
                    from: cap[1].to_string(),
                    to: cap[2].to_string(),
                };
            }
        } else if let Some(cap) = self.node_re.captures(line) {
            return LineKind::Node {
                id: cap[1].to_string(),
                label: cap[2].to_string(),
            };
        }
        LineKind::Unrecognized
    }
}

/// Builds a [`CallGraph`] from graph-description lines.
#[derive(Default)]
pub struct DotIngestor {
    classifier: DotClassifier,
}

impl DotIngestor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest the graph description line by line. Unrecognized lines are
    /// skipped; edge endpoints need not be declared by a node line.
    pub fn ingest<I, S>(&self, lines: I) -> CallGraph
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = CallGraph::new();
        for line in lines {
            match self.classifier.classify(line.as_ref()) {
                LineKind::Node { id, label } => graph.add_node(&id, &label),
                LineKind::Edge { from, to } => graph.add_edge(&from, &to),
                LineKind::Unrecognized => {
                    trace!("skipping unrecognized line: {}", line.as_ref());
                }
            }
        }
        graph
    }
}
