//! Clique weight table builder (§4.4).
//!
//! For `k = 3` a clique is a triangle and its weight is the number of
//! 4-cliques containing it; for `k = 2` a clique is an edge and its weight
//! is the size of the common-neighbourhood. Both reduce to the same
//! intermediate structure, `edge_adj_nodes(u, v)`: the set of vertices `w`
//! forming a triangle with edge `(u, v)`. `|edge_adj_nodes(u, v)|` *is*
//! `|N(u) ∩ N(v)|`, so the `k = 2` weight falls out of one pass over the
//! triangle list too — no separate neighbourhood-intersection pass needed.

use fxhash::FxHashMap;

use crate::error::DensityError;
use crate::graph::Graph;
use crate::index::NodeIndex;
use crate::triangles::{triangles, Triangle};

/// A `k`-clique: an edge for `k = 2`, a triangle for `k = 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clique {
    Edge(NodeIndex, NodeIndex),
    Triangle(NodeIndex, NodeIndex, NodeIndex),
}

impl Clique {
    /// The vertices participating in this clique, in ascending order.
    pub fn vertices(&self) -> Vec<NodeIndex> {
        match *self {
            Clique::Edge(a, b) => vec![a, b],
            Clique::Triangle(a, b, c) => vec![a, b, c],
        }
    }
}

/// `c ↦ w(c)` for every `c ∈ C_k(G)`, zero-weight cliques included, plus the
/// per-node aggregated weight contract required by §4.4 (sum over incident
/// triangles of `w(t)`; present for `k = 3` callers even though the driver
/// itself doesn't use it).
///
/// Callers that only care about cliques that can carry flow (§3: "zero-weight
/// cliques may be elided") filter on `w(c) > 0` themselves — see
/// `flow_network::construct`. Keeping zero-weight entries here matters for
/// `density::densest_subgraph`'s "empty clique set" check (§7): a graph whose
/// only triangles happen to all have weight zero still has a nonempty
/// `C_3(G)`, which is a different case from a graph with no triangles at
/// all.
#[derive(Debug, Default)]
pub struct CliqueWeights {
    pub weights: Vec<(Clique, u64)>,
    pub node_weight: Vec<u64>,
}

impl CliqueWeights {
    pub fn total_weight(&self) -> u64 {
        self.weights.iter().map(|(_, w)| w).sum()
    }
}

/// Builds the weight table for `k ∈ {2, 3}`. Pure (§6).
///
/// # Errors
/// Returns [`DensityError::InvalidK`] for any `k` outside `{2, 3}`.
pub fn clique_weights(
    g: &Graph,
    k: usize,
) -> error_stack::Result<CliqueWeights, DensityError> {
    match k {
        3 => Ok(triangle_weights(g)),
        2 => Ok(edge_weights(g)),
        other => Err(error_stack::Report::new(DensityError::InvalidK(other))),
    }
}

/// Builds `edge_adj_nodes`: for each edge `(u, v)` with `u < v`, the set of
/// vertices forming a triangle with it. One pass over the triangle list.
fn edge_adj_nodes(triangles: &[Triangle]) -> FxHashMap<(NodeIndex, NodeIndex), Vec<NodeIndex>> {
    let mut map: FxHashMap<(NodeIndex, NodeIndex), Vec<NodeIndex>> = FxHashMap::default();
    for &(a, b, c) in triangles {
        map.entry((a, b)).or_default().push(c);
        map.entry((a, c)).or_default().push(b);
        map.entry((b, c)).or_default().push(a);
    }
    map
}

fn triangle_weights(g: &Graph) -> CliqueWeights {
    let ts = triangles(g);
    let adj = edge_adj_nodes(&ts);
    let mut node_weight = vec![0u64; g.node_count()];
    let mut weights = Vec::with_capacity(ts.len());

    for &(a, b, c) in &ts {
        let s1 = &adj[&(a, b)];
        let s2 = &adj[&(a, c)];
        let s3 = &adj[&(b, c)];
        let w = intersect3(s1, s2, s3) as u64;
        weights.push((Clique::Triangle(a, b, c), w));
        node_weight[a.index()] += w;
        node_weight[b.index()] += w;
        node_weight[c.index()] += w;
    }
    CliqueWeights {
        weights,
        node_weight,
    }
}

fn edge_weights(g: &Graph) -> CliqueWeights {
    let ts = triangles(g);
    let adj = edge_adj_nodes(&ts);
    let mut weights = Vec::new();
    for u in g.node_indices() {
        for &v in g.neighbors(u) {
            if v <= u {
                continue;
            }
            let w = adj.get(&(u, v)).map_or(0, |s| s.len()) as u64;
            weights.push((Clique::Edge(u, v), w));
        }
    }
    CliqueWeights {
        weights,
        node_weight: Vec::new(),
    }
}

/// Size of the intersection of three small unsorted vertex lists.
fn intersect3(a: &[NodeIndex], b: &[NodeIndex], c: &[NodeIndex]) -> usize {
    a.iter()
        .filter(|x| b.contains(x) && c.contains(x))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn k4_triangle_weights_are_one() {
        let mut b = GraphBuilder::new();
        for &(x, y) in &[("a", "b"), ("a", "c"), ("a", "d"), ("b", "c"), ("b", "d"), ("c", "d")] {
            b.add_edge(x, y);
        }
        let g = b.build();
        let cw = clique_weights(&g, 3).unwrap();
        assert_eq!(cw.weights.len(), 4);
        assert!(cw.weights.iter().all(|&(_, w)| w == 1));
        assert_eq!(cw.total_weight(), 4);
    }

    #[test]
    fn disjoint_triangles_have_zero_weight() {
        let mut b = GraphBuilder::new();
        b.add_edge("a", "b");
        b.add_edge("b", "c");
        b.add_edge("a", "c");
        b.add_edge("d", "e");
        b.add_edge("e", "f");
        b.add_edge("d", "f");
        let g = b.build();
        let cw = clique_weights(&g, 3).unwrap();
        // Both triangles are still members of C_3(G); they just carry a
        // zero weight (no 4-clique contains either). The table keeps them
        // rather than treating the clique set as empty.
        assert_eq!(cw.weights.len(), 2);
        assert!(cw.weights.iter().all(|&(_, w)| w == 0));
        assert_eq!(cw.total_weight(), 0);
    }

    #[test]
    fn no_triangles_at_all_is_a_truly_empty_clique_set() {
        let mut b = GraphBuilder::new();
        b.add_edge("u", "v");
        b.add_edge("v", "w");
        let g = b.build();
        let cw = clique_weights(&g, 3).unwrap();
        assert!(cw.weights.is_empty());
    }

    #[test]
    fn k5_edge_weights_are_three() {
        let mut b = GraphBuilder::new();
        let verts = ["a", "b", "c", "d", "e"];
        for i in 0..verts.len() {
            for j in (i + 1)..verts.len() {
                b.add_edge(verts[i], verts[j]);
            }
        }
        let g = b.build();
        let cw = clique_weights(&g, 2).unwrap();
        assert_eq!(cw.weights.len(), 10);
        assert!(cw.weights.iter().all(|&(_, w)| w == 3));
        assert_eq!(cw.total_weight(), 30);
    }

    #[test]
    fn invalid_k_is_rejected() {
        let g = GraphBuilder::new().build();
        assert!(clique_weights(&g, 4).is_err());
    }
}
