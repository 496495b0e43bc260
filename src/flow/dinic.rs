//! Dinic's algorithm: layered BFS + blocking-flow DFS with current-arc
//! pointers (§4.5 "Alternative engines").
//!
//! `O(|V|²|E|)` in general, `O(min(|V|^{2/3}, |E|^{1/2}) |E|)` on
//! unit-capacity networks — the reduction's `s → c` and `v → t` edges are
//! the only capacitated ones, so this bound applies fairly directly here.
//! Each DFS call pushes as much flow down the branch it finds as the
//! bottleneck allows and, on hitting a dead end, backs up one level and
//! advances that level's current-arc pointer rather than restarting —
//! the "multi-route augmentation at a branching DFS node" in §4.5.

use std::collections::VecDeque;

use super::residual::{EdgeId, Node, ResidualNetwork};

pub fn max_flow(residual: &mut ResidualNetwork, s: Node, t: Node) -> i64 {
    let n = residual.num_nodes();
    let mut total = 0i64;
    loop {
        let level = bfs_levels(residual, s, n);
        if level[t].is_none() {
            break;
        }
        let mut current = vec![0usize; n];
        loop {
            let pushed = dfs_blocking(residual, s, t, i64::MAX, &level, &mut current);
            if pushed == 0 {
                break;
            }
            total += pushed;
        }
    }
    total
}

fn bfs_levels(residual: &ResidualNetwork, s: Node, n: usize) -> Vec<Option<u32>> {
    let mut level = vec![None; n];
    level[s] = Some(0);
    let mut queue = VecDeque::new();
    queue.push_back(s);
    while let Some(u) = queue.pop_front() {
        let lu = level[u].unwrap();
        for &e in residual.successors(u) {
            if residual.residual_capacity(e) <= 0 {
                continue;
            }
            let v = residual.target(e);
            if level[v].is_none() {
                level[v] = Some(lu + 1);
                queue.push_back(v);
            }
        }
    }
    level
}

/// Pushes up to `bound` units of flow from `u` to `t` strictly along
/// increasing levels, advancing `current[u]` past any edge found to be a
/// dead end so the next call skips it.
fn dfs_blocking(
    residual: &mut ResidualNetwork,
    u: Node,
    t: Node,
    bound: i64,
    level: &[Option<u32>],
    current: &mut [usize],
) -> i64 {
    if u == t {
        return bound;
    }
    if bound == 0 {
        return 0;
    }
    while current[u] < residual.successors(u).len() {
        let e: EdgeId = residual.successors(u)[current[u]];
        let cap = residual.residual_capacity(e);
        let v = residual.target(e);
        if cap > 0 && level[v] == level[u].map(|l| l + 1) {
            let pushed = dfs_blocking(residual, v, t, bound.min(cap), level, current);
            if pushed > 0 {
                residual.push(e, pushed);
                return pushed;
            }
        }
        current[u] += 1;
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clrs_max_flow_is_23() {
        let mut r = ResidualNetwork::new(6);
        r.add_edge(0, 1, 16);
        r.add_edge(0, 2, 13);
        r.add_edge(1, 2, 10);
        r.add_edge(1, 3, 12);
        r.add_edge(2, 1, 4);
        r.add_edge(2, 4, 14);
        r.add_edge(3, 2, 9);
        r.add_edge(3, 5, 20);
        r.add_edge(4, 3, 7);
        r.add_edge(4, 5, 4);
        assert_eq!(max_flow(&mut r, 0, 5), 23);
    }

    #[test]
    fn agrees_with_edmonds_karp_on_dense_graph() {
        let build = || {
            let mut r = ResidualNetwork::new(5);
            r.add_edge(0, 1, 10);
            r.add_edge(0, 2, 10);
            r.add_edge(1, 2, 2);
            r.add_edge(1, 3, 4);
            r.add_edge(2, 3, 9);
            r.add_edge(3, 4, 10);
            r.add_edge(2, 4, 8);
            r
        };
        let mut a = build();
        let mut b = build();
        assert_eq!(
            super::super::edmonds_karp::max_flow(&mut a, 0, 4),
            max_flow(&mut b, 0, 4)
        );
    }
}
