//! Densest-subgraph driver (§4.7): binary search on `λ`, invoking the flow
//! engine once per iteration and tracking the best source-side vertex set
//! seen so far.

use crate::cliques::{clique_weights, CliqueWeights};
use crate::error::DensityError;
use crate::flow::mincut::source_side;
use crate::flow::Engine;
use crate::flow_network::{construct, update};
use crate::graph::Graph;
use crate::index::NodeIndex;

/// Result of [`densest_subgraph`]: the densest vertex set found, plus the
/// binary-search bookkeeping §8's testable properties need (final `[lo,
/// hi]` bracket and iteration count), so tests can assert convergence
/// without reaching into driver internals.
#[derive(Debug, Clone)]
pub struct DensitySolution {
    pub vertices: Vec<NodeIndex>,
    pub lo: f64,
    pub hi: f64,
    pub iterations: u32,
}

impl DensitySolution {
    /// `ρ_k(S*)`, recomputed directly from the weight table rather than
    /// from the driver's λ bracket (independent of binary-search error).
    pub fn density(&self, weights: &CliqueWeights) -> f64 {
        if self.vertices.is_empty() {
            return 0.0;
        }
        let in_s: std::collections::HashSet<NodeIndex> = self.vertices.iter().copied().collect();
        let total: u64 = weights
            .weights
            .iter()
            .filter(|(c, _)| c.vertices().iter().all(|v| in_s.contains(v)))
            .map(|&(_, w)| w)
            .sum();
        total as f64 / self.vertices.len() as f64
    }
}

/// Maximises `ρ_k(S)` over vertex subsets of `g` (§4.7). Pure: no state
/// survives the call (§6).
///
/// # Errors
/// Returns [`DensityError::InvalidK`] for `k` outside `{2, 3}` (delegated
/// to [`clique_weights`]).
pub fn densest_subgraph(
    g: &Graph,
    k: usize,
    engine: Engine,
) -> error_stack::Result<DensitySolution, DensityError> {
    let weights = clique_weights(g, k)?;
    // §7 "Empty clique set": C_k(G) itself has no members (e.g. no triangles
    // at all for k=3). Distinct from C_k(G) being nonempty but entirely
    // zero-weight, which falls through to the binary search below and hits
    // the zero-total-weight tie-break instead.
    if weights.weights.is_empty() {
        return Ok(DensitySolution {
            vertices: Vec::new(),
            lo: 0.0,
            hi: 0.0,
            iterations: 0,
        });
    }

    let n = g.node_count();
    let n_cliques = weights.weights.iter().filter(|&&(_, w)| w > 0).count();
    let total_weight = weights.total_weight() as f64;

    let mut lo = 0.0f64;
    let mut hi = total_weight;
    let mut lambda = (lo + hi) / 2.0;
    let mut best: Vec<NodeIndex> = Vec::new();

    let mut network = construct(&weights, n, lambda);
    let tolerance = 1.0 / (n as f64 * (n as f64 - 1.0).max(1.0));
    let mut iterations = 0u32;

    loop {
        network.residual.reset_flow();
        let _value = engine.solve(
            &mut network.residual,
            network.source.index(),
            network.sink.index(),
        );
        let side = source_side(&network.residual, network.source.index());
        let s_vertices = network.vertices_in(&side, n_cliques);

        if s_vertices.is_empty() {
            hi = lambda;
        } else {
            lo = lambda;
            best = s_vertices;
        }

        iterations += 1;
        if hi - lo < tolerance {
            break;
        }
        lambda = (lo + hi) / 2.0;
        update(&mut network, lambda);
    }

    // §8 scenario 2/4 tie-break: when the total clique weight is zero, lo =
    // hi = 0 holds from the first iteration and no subgraph ever achieves a
    // strictly positive cut, so `best` stays empty; the documented
    // tie-break returns the full vertex set in that case.
    if best.is_empty() && total_weight == 0.0 {
        best = g.node_indices().collect();
    }

    Ok(DensitySolution {
        vertices: best,
        lo,
        hi,
        iterations,
    })
}
