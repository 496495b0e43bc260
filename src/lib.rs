//! `mwtd`: Maximum Weighted Triangle/Edge Density subgraph extraction.
//!
//! Extracts the densest subgraph of an undirected graph under a
//! triangle-weighted density objective (k = 3) or its edge-weighted
//! analogue (k = 2), via the Goldberg–Gallo parametric min-cut reduction:
//! binary search on a density threshold `λ`, each step solved as an
//! `s`–`t` minimum cut on a purpose-built flow network.
//!
//! ```text
//! reader → triangles → clique_weights ─┐
//!                                      ▼
//!                     flow_network::construct/update
//!                                      ▼
//!                          flow::Engine::solve
//!                                      ▼
//!                         flow::mincut::source_side
//!                                      ▼
//!                          density::densest_subgraph  (loops until convergence)
//! ```
//!
//! The library surface is four pure functions: [`triangles::triangles`],
//! [`cliques::clique_weights`], an `Engine::solve` per [`flow::Engine`],
//! and [`density::densest_subgraph`]. Everything else — the edge-list
//! reader, the density reporter, the CLI — is an external collaborator
//! layered on top.

pub mod cliques;
pub mod density;
pub mod error;
pub mod flow;
pub mod flow_network;
pub mod graph;
pub mod index;
pub mod measure;
pub mod reader;
pub mod triangles;

pub use cliques::{clique_weights, Clique, CliqueWeights};
pub use density::{densest_subgraph, DensitySolution};
pub use flow::Engine;
pub use graph::{Graph, GraphBuilder};
pub use measure::{measure, DensityReport};
pub use triangles::{triangles, Triangle};
