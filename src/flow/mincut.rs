//! Min-cut extractor (§4.2).
//!
//! Given a residual network that a flow engine has already driven to
//! termination, BFS from `s` over edges with positive residual capacity
//! yields the reachable set `A`; the cut is `(A, V_N ∖ A)`. `O(|V| + |E|)`.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use super::residual::{Node, ResidualNetwork};

/// Returns the source side `A` of a minimum `s`-`t` cut, as a bitset over
/// flow-network node indices.
pub fn source_side(residual: &ResidualNetwork, s: Node) -> FixedBitSet {
    let mut reached = FixedBitSet::with_capacity(residual.num_nodes());
    let mut queue = VecDeque::new();
    reached.insert(s);
    queue.push_back(s);
    while let Some(u) = queue.pop_front() {
        for &e in residual.successors(u) {
            if residual.residual_capacity(e) <= 0 {
                continue;
            }
            let v = residual.target(e);
            if !reached.contains(v) {
                reached.insert(v);
                queue.push_back(v);
            }
        }
    }
    reached
}
