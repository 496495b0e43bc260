//! Lightweight index newtypes used throughout the crate.
//!
//! Vertex identifiers in the input graph are arbitrary strings; the rest of
//! the pipeline (triangle enumeration, flow network construction, residual
//! bookkeeping) works over dense `u32` indices instead. `NodeIndex` keeps
//! those indices from being interchanged with raw clique or flow-network
//! indices by accident.

use std::fmt;

/// Index of a vertex in the interned [`Graph`](crate::graph::Graph).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Index of a node in the parametric flow network `N(λ)` (§3 Flow network).
///
/// The network's node set is laid out as `[s, cliques.., vertices.., t]`; this
/// is a plain index into that flattened range, not into the input graph.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlowNodeIndex(pub u32);

impl FlowNodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        FlowNodeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for FlowNodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f{}", self.0)
    }
}
