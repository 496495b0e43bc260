//! Flow-network builder (§4.6).
//!
//! `construct` builds `N(λ)` from scratch: `{s} ∪ C_k ∪ V ∪ {t}` laid out as
//! `[s, cliques.., vertices.., t]` (§9 "Heterogeneous flow-graph nodes"),
//! with `s → c` edges capacitated by clique weight, `c → v` edges at
//! [`INFINITE_CAPACITY`], and `v → t` edges at the current `λ`. `update`
//! retargets only the `v → t` edges afterwards, which is the whole point of
//! the parametric reduction: rebuilding is `O(|C_k| · k)`, updating is
//! `O(|V|)`.

use crate::cliques::CliqueWeights;
use crate::flow::{ResidualNetwork, INFINITE_CAPACITY};
use crate::index::{FlowNodeIndex, NodeIndex};

/// The constructed network plus the bookkeeping needed to map between
/// `NodeIndex` (input graph) and [`FlowNodeIndex`] (flattened `N(λ)`
/// layout), and to retarget `v → t` edges on every `update`.
pub struct FlowNetwork {
    pub residual: ResidualNetwork,
    pub source: FlowNodeIndex,
    pub sink: FlowNodeIndex,
    /// `v_to_t[v.index()]` is the edge id of vertex `v`'s `v → t` edge.
    v_to_t: Vec<usize>,
    n_vertices: usize,
}

impl FlowNetwork {
    /// Flow-network node index of input-graph vertex `v` (§9 layout: `s`
    /// occupies slot 0, cliques follow, then vertices, then `t` last).
    #[inline]
    pub fn vertex_node(&self, v: NodeIndex, n_cliques: usize) -> FlowNodeIndex {
        FlowNodeIndex::new(1 + n_cliques + v.index())
    }

    /// `S = A ∩ V`: given the source side of a min-cut (over flow-network
    /// node indices), returns the input-graph vertices it contains.
    pub fn vertices_in(&self, source_side: &fixedbitset::FixedBitSet, n_cliques: usize) -> Vec<NodeIndex> {
        (0..self.n_vertices)
            .filter(|&i| source_side.contains(1 + n_cliques + i))
            .map(NodeIndex::new)
            .collect()
    }
}

/// Builds `N(λ)` from scratch (§4.6 `construct`). Zero-weight cliques are
/// elided per §3's "may be elided" clause — they would contribute a `0`
/// capacity `s → c` edge that can never carry flow.
pub fn construct(weights: &CliqueWeights, n_vertices: usize, lambda: f64) -> FlowNetwork {
    let cliques: Vec<_> = weights
        .weights
        .iter()
        .filter(|&&(_, w)| w > 0)
        .collect();
    let n_cliques = cliques.len();
    // Layout: [s=0, cliques 1..=n_cliques, vertices .., t].
    let total_nodes = 1 + n_cliques + n_vertices + 1;
    let s = 0usize;
    let t = total_nodes - 1;

    let mut residual = ResidualNetwork::new(total_nodes);

    for (i, &&(clique, w)) in cliques.iter().enumerate() {
        let clique_node = 1 + i;
        residual.add_edge(s, clique_node, w as i64);
        for v in clique.vertices() {
            let vertex_node = 1 + n_cliques + v.index();
            residual.add_edge(clique_node, vertex_node, INFINITE_CAPACITY);
        }
    }

    let lambda_cap = lambda_capacity(lambda);
    let mut v_to_t = vec![0usize; n_vertices];
    for v in 0..n_vertices {
        let vertex_node = 1 + n_cliques + v;
        v_to_t[v] = residual.add_edge(vertex_node, t, lambda_cap);
    }

    FlowNetwork {
        residual,
        source: FlowNodeIndex::new(s),
        sink: FlowNodeIndex::new(t),
        v_to_t,
        n_vertices,
    }
}

/// `update(N, λ)` (§4.6): retargets every `v → t` forward capacity to the
/// new `λ` and resets consumed flow, leaving topology and `s → c` / `c → v`
/// capacities untouched (§9 "Residual reuse across iterations", option
/// (b)).
pub fn update(network: &mut FlowNetwork, lambda: f64) {
    let cap = lambda_capacity(lambda);
    for &edge in &network.v_to_t {
        network.residual.set_capacity(edge, cap);
    }
    network.residual.reset_flow();
}

/// `λ` is a rational density threshold but capacities are integral in this
/// reduction's usual presentation; scaling by a fixed factor keeps
/// `v → t` capacities exact enough for the binary search's 1/(|V|(|V|-1))
/// tolerance while staying representable as `i64`. `densest_subgraph`
/// (§4.7) only ever compares cut totals, which are computed in the same
/// scaled units, so the scale factor cancels out of every decision.
const LAMBDA_SCALE: f64 = 1_048_576.0;

fn lambda_capacity(lambda: f64) -> i64 {
    (lambda * LAMBDA_SCALE).round() as i64
}
