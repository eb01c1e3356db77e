//! Pathway extraction — the tick-oriented structural reading.
//!
//! A pathway is a small directed graph of exactly three nodes (codon values)
//! chained by two edges. One is produced at each start marker followed by at
//! least three further complete codons; the three codons after the marker
//! become the nodes, in order. A start marker without enough well-formed
//! trailing codons is recorded as incomplete and skipped, never fatal.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use crate::codon;
use crate::types::Codon;

/// Number of nodes in a well-formed pathway.
pub const PATHWAY_NODES: usize = 3;

/// A three-node, two-edge directed graph of codon values.
#[derive(Debug, Clone)]
pub struct Pathway {
    graph: DiGraph<String, ()>,
}

impl Pathway {
    fn from_codons(codons: &[Codon]) -> Self {
        let mut graph = DiGraph::new();
        let mut prev: Option<NodeIndex> = None;
        for c in codons {
            let node = graph.add_node(c.as_str().to_string());
            if let Some(p) = prev {
                graph.add_edge(p, node, ());
            }
            prev = Some(node);
        }
        Self { graph }
    }

    pub fn graph(&self) -> &DiGraph<String, ()> {
        &self.graph
    }

    /// Node labels in chain order.
    pub fn nodes(&self) -> Vec<&str> {
        self.graph.node_weights().map(String::as_str).collect()
    }

    /// Edges as (source label, target label) pairs.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_references()
            .map(|e| {
                (
                    self.graph[e.source()].as_str(),
                    self.graph[e.target()].as_str(),
                )
            })
            .collect()
    }
}

/// The outcome of a pathway scan: well-formed pathways in discovery order,
/// plus the codon offsets of start markers whose definitions were too short.
#[derive(Debug, Clone, Default)]
pub struct PathwayScan {
    pub pathways: Vec<Pathway>,
    pub incomplete: Vec<usize>,
}

/// Scan codons for pathway definitions.
///
/// After a well-formed definition the scan resumes past its three node
/// codons; after an incomplete one it resumes at the next codon.
pub fn extract_pathways(codons: &[Codon]) -> PathwayScan {
    let mut scan = PathwayScan::default();
    let mut pos = 0;
    while pos < codons.len() {
        if codon::is_start(&codons[pos]) {
            let end = (pos + 1 + PATHWAY_NODES).min(codons.len());
            let nodes = &codons[pos + 1..end];
            if nodes.len() == PATHWAY_NODES && nodes.iter().all(Codon::is_complete) {
                scan.pathways.push(Pathway::from_codons(nodes));
                pos += 1 + PATHWAY_NODES;
                continue;
            }
            scan.incomplete.push(pos);
        }
        pos += 1;
    }
    scan
}

/// A flattened node for graph export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
}

/// A flattened edge for graph export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

/// The node/edge record consumed by the pathway visualizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphRecord {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl PathwayScan {
    /// Flatten all pathways into one visualizer record. Node ids are unique
    /// across pathways so disjoint chains stay disjoint in the export.
    pub fn graph_record(&self) -> GraphRecord {
        let mut record = GraphRecord::default();
        for (p, pathway) in self.pathways.iter().enumerate() {
            let labels = pathway.nodes();
            for (n, label) in labels.iter().enumerate() {
                record.nodes.push(GraphNode {
                    id: format!("Pathway_{}_{}", p, n),
                    label: (*label).to_string(),
                });
                if n > 0 {
                    record.edges.push(GraphEdge {
                        source: format!("Pathway_{}_{}", p, n - 1),
                        target: format!("Pathway_{}_{}", p, n),
                    });
                }
            }
        }
        record
    }
}
