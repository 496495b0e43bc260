//! Density reporter (§6 external collaborator, §4.8 of the expanded spec).
//!
//! Pure summary statistics over a subgraph the driver already returned;
//! opaque to the core per §1's "out of scope" — the core never calls this,
//! only the CLI does.

use std::collections::HashSet;

use crate::cliques::CliqueWeights;
use crate::graph::Graph;
use crate::index::NodeIndex;

/// Node/edge counts and the two density figures the CLI prints per
/// dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityReport {
    pub node_count: usize,
    pub edge_count: usize,
    pub edge_density: f64,
    pub triangle_density: f64,
}

/// Summarises the vertex set `vertices` within `g`, whose `weights` were
/// computed for the same `k` the driver optimised for. `vertices` indexes
/// `g` directly (the driver's own `NodeIndex` space), so clique membership
/// needs no re-interning.
pub fn measure(g: &Graph, vertices: &[NodeIndex], weights: &CliqueWeights, k: usize) -> DensityReport {
    let node_count = vertices.len();
    let in_s: HashSet<NodeIndex> = vertices.iter().copied().collect();

    let mut edge_count = 0usize;
    for &u in vertices {
        for &v in g.neighbors(u) {
            if v > u && in_s.contains(&v) {
                edge_count += 1;
            }
        }
    }

    let edge_density = if node_count < 2 {
        0.0
    } else {
        let max_edges = (node_count * (node_count - 1) / 2) as f64;
        edge_count as f64 / max_edges
    };

    let triangle_density = if node_count == 0 {
        0.0
    } else {
        let total: u64 = weights
            .weights
            .iter()
            .filter(|(c, _)| c.vertices().iter().all(|v| in_s.contains(v)))
            .map(|&(_, w)| w)
            .sum();
        let _ = k; // k only disambiguates which weight table was passed in.
        total as f64 / node_count as f64
    };

    DensityReport {
        node_count,
        edge_count,
        edge_density,
        triangle_density,
    }
}
