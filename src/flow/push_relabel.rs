//! Push–relabel maximum flow, FIFO and HLPP (highest-label) variants
//! (§4.5). The operational choice for the densest-subgraph driver: the
//! reduction graph in §3 is dense at the source side (one `s → c` edge per
//! surviving clique, fanning out to all its member vertices), which is
//! exactly the shape push–relabel's local relabelling handles better than
//! the global shortest-path recomputation Dinic and Edmonds–Karp rely on.
//!
//! Both variants share [`discharge`]; they differ only in which active
//! vertex is processed next (§9 "Queue abstractions" — FIFO and HLPP
//! "differ mainly in the order they drain the active set", not in the
//! push/relabel/gap machinery itself).
//!
//! # Open question resolution (§9)
//! The reference implementation's two variants disagree on the gap
//! condition (`h ≤ n` vs `h < n`) and the post-BFS fallback height (`n + 1`
//! vs `1 + n`, which are the same value but arrived at differently). Both
//! forms preserve the height invariant `h(u) ≤ h(v) + 1`; this
//! implementation standardises on the FIFO reference's choice — gap
//! heuristic fires when `h ≤ n` and unreached vertices start at `n + 1` —
//! for both variants, so the two engines are directly comparable in tests.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use fixedbitset::FixedBitSet;

use super::residual::{EdgeId, Node, ResidualNetwork};

/// Which active vertex [`max_flow`] hands to `discharge` next (§9).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Plain FIFO queue, §4.5's baseline selection rule. `O(|V|³)`.
    Fifo,
    /// Highest label first, via a max-heap keyed on height. `O(|V|²√|E|)`.
    Hlpp,
}

struct HeightItem {
    node: Node,
    height: u32,
}

impl PartialEq for HeightItem {
    fn eq(&self, other: &Self) -> bool {
        self.height == other.height
    }
}
impl Eq for HeightItem {}
impl PartialOrd for HeightItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for HeightItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // `BinaryHeap` is a max-heap; highest label first falls straight out.
        self.height.cmp(&other.height)
    }
}

/// Active-vertex queue shared by both selection rules. Entries may be
/// stale after a relabel changes a vertex's height; HLPP re-pushes on
/// relabel and lazily discards stale pops instead of repairing the heap
/// in place (§9).
enum ActiveSet {
    Fifo(VecDeque<Node>),
    Hlpp(BinaryHeap<HeightItem>),
}

impl ActiveSet {
    fn push(&mut self, node: Node, height: u32) {
        match self {
            ActiveSet::Fifo(q) => q.push_back(node),
            ActiveSet::Hlpp(h) => h.push(HeightItem { node, height }),
        }
    }

    fn pop(&mut self, height: &[u32]) -> Option<Node> {
        match self {
            ActiveSet::Fifo(q) => q.pop_front(),
            ActiveSet::Hlpp(h) => loop {
                let item = h.pop()?;
                // Discard a stale entry left behind by an earlier relabel.
                if item.height == height[item.node] {
                    return Some(item.node);
                }
            },
        }
    }
}

/// Runs push–relabel with the given active-vertex selection rule. Returns
/// the maximum flow value; the residual network is left at termination
/// (all `e(v) = 0` for `v ∉ {s, t}`) for [`super::mincut::source_side`].
pub fn max_flow(residual: &mut ResidualNetwork, s: Node, t: Node, selection: Selection) -> i64 {
    let n = residual.num_nodes();

    let mut height = vec![0u32; n];
    let mut reached_from_t = FixedBitSet::with_capacity(n);
    reverse_bfs_heights(residual, t, &mut height, &mut reached_from_t);

    for v in 0..n {
        if !reached_from_t.contains(v) {
            height[v] = n as u32 + 1;
        }
    }
    height[s] = n as u32;
    height[t] = 0;

    let mut excess = vec![0i64; n];
    let mut gap = vec![0u32; 2 * n + 2];
    for v in 0..n {
        if v != s && v != t {
            gap[height[v] as usize] += 1;
        }
    }

    let mut active = match selection {
        Selection::Fifo => ActiveSet::Fifo(VecDeque::new()),
        Selection::Hlpp => ActiveSet::Hlpp(BinaryHeap::new()),
    };
    let mut queued = FixedBitSet::with_capacity(n);

    // Saturating push on every edge leaving s (§4.5 Initialisation).
    let s_edges: Vec<EdgeId> = residual.successors(s).to_vec();
    for e in s_edges {
        let cap = residual.residual_capacity(e);
        if cap <= 0 {
            continue;
        }
        let v = residual.target(e);
        residual.push(e, cap);
        excess[s] -= cap;
        excess[v] += cap;
        if v != s && v != t && !queued.contains(v) {
            queued.insert(v);
            active.push(v, height[v]);
        }
    }

    let mut current = vec![0usize; n];

    while let Some(u) = active.pop(&height) {
        queued.set(u, false);
        discharge(
            residual, u, s, t, n, &mut height, &mut excess, &mut gap, &mut current, &mut active,
            &mut queued,
        );
    }

    excess[t]
}

#[allow(clippy::too_many_arguments)]
fn discharge(
    residual: &mut ResidualNetwork,
    u: Node,
    s: Node,
    t: Node,
    n: usize,
    height: &mut [u32],
    excess: &mut [i64],
    gap: &mut [u32],
    current: &mut [usize],
    active: &mut ActiveSet,
    queued: &mut FixedBitSet,
) {
    while excess[u] > 0 {
        if current[u] >= residual.successors(u).len() {
            // Relabel: new height is 1 + min height among positive-residual
            // successors, capped at 2n (§4.5).
            let old_height = height[u];
            let mut min_h = 2 * n as u32;
            for &e in residual.successors(u) {
                if residual.residual_capacity(e) > 0 {
                    min_h = min_h.min(height[residual.target(e)]);
                }
            }
            height[u] = (min_h + 1).min(2 * n as u32);
            current[u] = 0;

            if u != s && u != t {
                gap[old_height as usize] -= 1;
                gap[height[u] as usize] += 1;
                if old_height as usize <= n && gap[old_height as usize] == 0 {
                    apply_gap_heuristic(old_height, n, height, gap, s);
                }
            }
            if height[u] as usize >= 2 * n {
                // No augmenting path can possibly use u again this phase.
                break;
            }
            continue;
        }

        let e = residual.successors(u)[current[u]];
        let cap = residual.residual_capacity(e);
        let v = residual.target(e);
        if cap > 0 && height[u] == height[v] + 1 {
            let amount = excess[u].min(cap);
            residual.push(e, amount);
            excess[u] -= amount;
            excess[v] += amount;
            if v != s && v != t && !queued.contains(v) {
                queued.insert(v);
                active.push(v, height[v]);
            }
            if excess[u] == 0 {
                break;
            }
        } else {
            current[u] += 1;
        }
    }
}

/// Raises every vertex strictly above the now-empty level `empty_height`
/// (and at or below `n`) to `n + 1`, stranding them on the sink side
/// (§4.5 "Gap heuristic").
fn apply_gap_heuristic(empty_height: u32, n: usize, height: &mut [u32], gap: &mut [u32], s: Node) {
    for v in 0..height.len() {
        if v == s {
            continue;
        }
        if height[v] > empty_height && (height[v] as usize) <= n {
            gap[height[v] as usize] -= 1;
            height[v] = n as u32 + 1;
            gap[n + 1] += 1;
        }
    }
}

/// Reverse BFS from `t` over edges with positive *forward* capacity
/// (equivalently: positive residual capacity of the reverse edge),
/// recording distance-from-`t` as the initial height (§4.5 Initialisation).
fn reverse_bfs_heights(
    residual: &ResidualNetwork,
    t: Node,
    height: &mut [u32],
    reached: &mut FixedBitSet,
) {
    let mut queue = VecDeque::new();
    reached.insert(t);
    height[t] = 0;
    queue.push_back(t);
    while let Some(v) = queue.pop_front() {
        // Walking "predecessors of v" means: for every edge (u, v) with
        // positive capacity, i.e. every edge e with target v whose reverse
        // e^1 has positive residual capacity right now (residual(e^1) ==
        // cap(e) before any flow is pushed).
        for &e in residual.successors(v) {
            let rev = e ^ 1;
            let u = residual.target(rev);
            if residual.capacity(rev) > 0 && !reached.contains(u) {
                reached.insert(u);
                height[u] = height[v] + 1;
                queue.push_back(u);
            }
        }
    }
}
