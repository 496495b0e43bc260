//! Maximum-flow engines and the residual network they operate on (§4.1, §4.5).
//!
//! All four engines satisfy the same post-condition: driven to termination,
//! [`mincut::source_side`] applied to their residual network yields the
//! source side of a minimum cut. [`push_relabel`] is the operational
//! choice (§4.5); [`edmonds_karp`] and [`dinic`] exist as independently
//! verifiable reference implementations.

pub mod dinic;
pub mod edmonds_karp;
pub mod mincut;
pub mod push_relabel;
pub mod residual;

pub use residual::{ResidualNetwork, INFINITE_CAPACITY};

/// Selects which of the four engines a caller wants to run. `mwtd` the
/// binary exposes this as a CLI flag; the library itself is agnostic and
/// any variant can be dropped into [`crate::density::densest_subgraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    EdmondsKarp,
    Dinic,
    PushRelabelFifo,
    PushRelabelHlpp,
}

impl Engine {
    pub fn solve(self, residual: &mut ResidualNetwork, s: residual::Node, t: residual::Node) -> i64 {
        match self {
            Engine::EdmondsKarp => edmonds_karp::max_flow(residual, s, t),
            Engine::Dinic => dinic::max_flow(residual, s, t),
            Engine::PushRelabelFifo => {
                push_relabel::max_flow(residual, s, t, push_relabel::Selection::Fifo)
            }
            Engine::PushRelabelHlpp => {
                push_relabel::max_flow(residual, s, t, push_relabel::Selection::Hlpp)
            }
        }
    }
}

/// Unrecognised `--engine` value. A real [`std::error::Error`] rather than
/// a bare `String` so `clap`'s derive can use [`Engine`]'s [`FromStr`] impl
/// directly as a value parser.
#[derive(Debug)]
pub struct UnknownEngine(String);

impl std::fmt::Display for UnknownEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown engine {:?}, expected one of: edmonds-karp, dinic, push-relabel, push-relabel-hlpp",
            self.0
        )
    }
}

impl std::error::Error for UnknownEngine {}

impl std::str::FromStr for Engine {
    type Err = UnknownEngine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "edmonds-karp" | "ek" => Ok(Engine::EdmondsKarp),
            "dinic" => Ok(Engine::Dinic),
            "push-relabel" | "push-relabel-fifo" | "fifo" => Ok(Engine::PushRelabelFifo),
            "push-relabel-hlpp" | "hlpp" => Ok(Engine::PushRelabelHlpp),
            other => Err(UnknownEngine(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::residual::ResidualNetwork;

    fn clrs_example() -> ResidualNetwork {
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
        r
    }

    #[test]
    fn all_four_engines_agree() {
        for engine in [
            Engine::EdmondsKarp,
            Engine::Dinic,
            Engine::PushRelabelFifo,
            Engine::PushRelabelHlpp,
        ] {
            let mut r = clrs_example();
            assert_eq!(engine.solve(&mut r, 0, 5), 23, "{engine:?} disagreed");
        }
    }
}
