//! The input graph `G = (V, E)` (§3 Data model).
//!
//! Vertex identifiers are arbitrary strings on the way in; [`Graph`] interns
//! them into a dense `0..n` range (`NodeIndex`) the moment they're seen, so
//! every downstream component (triangle enumeration, clique weighting, flow
//! network construction) works over index-keyed `Vec`s rather than hash
//! maps. This is the "dynamic typing to static representation" choice
//! called out as the largest constant-factor win.
//!
//! `Graph` is immutable once built: there is no API to add a vertex or edge
//! after [`GraphBuilder::build`] returns (§3 Lifecycle, "G is built once and
//! never mutated").

use fxhash::FxHashMap;

use crate::index::NodeIndex;

/// An undirected, simple graph with interned vertex labels.
///
/// Adjacency lists are sorted and deduplicated, which both the triangle
/// enumerator (§4.3) and the clique weight builder (§4.4) rely on for their
/// neighbourhood-intersection steps.
#[derive(Debug, Clone)]
pub struct Graph {
    labels: Vec<String>,
    adj: Vec<Vec<NodeIndex>>,
    edge_count: usize,
}

impl Graph {
    /// Number of vertices `|V|`.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of distinct undirected edges `|E|`.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Original label a vertex was interned from.
    #[inline]
    pub fn label(&self, v: NodeIndex) -> &str {
        &self.labels[v.index()]
    }

    /// Sorted, deduplicated neighbour list of `v`.
    #[inline]
    pub fn neighbors(&self, v: NodeIndex) -> &[NodeIndex] {
        &self.adj[v.index()]
    }

    #[inline]
    pub fn degree(&self, v: NodeIndex) -> usize {
        self.adj[v.index()].len()
    }

    #[inline]
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.labels.len() as u32).map(NodeIndex)
    }

    /// `true` if `u` and `v` are adjacent. `O(log degree)` via binary search
    /// over the sorted adjacency list.
    pub fn has_edge(&self, u: NodeIndex, v: NodeIndex) -> bool {
        self.adj[u.index()].binary_search(&v).is_ok()
    }

    /// Builds the vertex-induced subgraph `G[S]`, re-interning vertices into
    /// a fresh dense range (used by the round-trip property in §8).
    pub fn induced_subgraph(&self, vertices: &[NodeIndex]) -> Graph {
        let mut builder = GraphBuilder::new();
        let keep: std::collections::HashSet<NodeIndex> = vertices.iter().copied().collect();
        for &u in vertices {
            for &v in self.neighbors(u) {
                if v > u && keep.contains(&v) {
                    builder.add_edge(self.label(u), self.label(v));
                }
            }
        }
        // Vertices with no surviving incident edge still belong in G[S].
        for &u in vertices {
            builder.add_vertex(self.label(u));
        }
        builder.build()
    }
}

/// Incrementally interns vertex labels and accumulates (deduplicated,
/// self-loop-free) edges before handing off an immutable [`Graph`].
///
/// Mirrors the edge-list reader's contract in §6: parallel edges coalesce,
/// self-loops are rejected, and the resulting `Graph` never mutates again.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    index: FxHashMap<String, NodeIndex>,
    labels: Vec<String>,
    edges: std::collections::BTreeSet<(NodeIndex, NodeIndex)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn intern(&mut self, label: &str) -> NodeIndex {
        if let Some(&ix) = self.index.get(label) {
            return ix;
        }
        let ix = NodeIndex::new(self.labels.len());
        self.labels.push(label.to_owned());
        self.index.insert(label.to_owned(), ix);
        ix
    }

    /// Registers a vertex with no edges yet (so isolated vertices survive
    /// `induced_subgraph`).
    pub fn add_vertex(&mut self, label: &str) -> NodeIndex {
        self.intern(label)
    }

    /// Adds an undirected edge, interning both endpoints. Self-loops
    /// (`u == v`) are silently skipped; parallel edges coalesce because the
    /// edge set is a `BTreeSet` keyed on the ordered pair.
    pub fn add_edge(&mut self, u: &str, v: &str) -> Option<(NodeIndex, NodeIndex)> {
        let a = self.intern(u);
        let b = self.intern(v);
        if a == b {
            return None;
        }
        let pair = if a < b { (a, b) } else { (b, a) };
        self.edges.insert(pair);
        Some(pair)
    }

    pub fn build(self) -> Graph {
        let n = self.labels.len();
        let mut adj = vec![Vec::new(); n];
        for &(u, v) in &self.edges {
            adj[u.index()].push(v);
            adj[v.index()].push(u);
        }
        for list in &mut adj {
            list.sort_unstable();
            list.dedup();
        }
        Graph {
            labels: self.labels,
            adj,
            edge_count: self.edges.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_loops_are_dropped() {
        let mut b = GraphBuilder::new();
        b.add_edge("a", "a");
        b.add_edge("a", "b");
        let g = b.build();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn parallel_edges_coalesce() {
        let mut b = GraphBuilder::new();
        b.add_edge("a", "b");
        b.add_edge("b", "a");
        b.add_edge("a", "b");
        let g = b.build();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn adjacency_is_sorted_and_deduplicated() {
        let mut b = GraphBuilder::new();
        b.add_edge("a", "b");
        b.add_edge("a", "c");
        let g = b.build();
        let a = NodeIndex::new(0);
        let neighbors = g.neighbors(a);
        assert!(neighbors.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn induced_subgraph_keeps_isolated_vertices() {
        let mut b = GraphBuilder::new();
        b.add_edge("a", "b");
        b.add_vertex("c");
        let g = b.build();
        let a = NodeIndex::new(0);
        let c = NodeIndex::new(2);
        let sub = g.induced_subgraph(&[a, c]);
        assert_eq!(sub.node_count(), 2);
        assert_eq!(sub.edge_count(), 0);
    }
}
