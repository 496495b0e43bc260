//! `mwtd` CLI (§6 "CLI/driver loop", §4.10 of the expanded spec).
//!
//! Enumerates a file or directory of edge-list datasets, runs the densest-
//! subgraph driver on each, and prints one timed line per dataset. No
//! algorithmic logic lives here — it is a thin consumer of the library
//! surface in `mwtd::density` and `mwtd::measure`.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use mwtd::flow::Engine;
use mwtd::{clique_weights, densest_subgraph, measure, reader};

#[derive(Parser, Debug)]
#[command(name = "mwtd", about = "Maximum weighted triangle/edge density subgraph extraction")]
struct Args {
    /// Edge-list file, or a directory of edge-list files.
    path: PathBuf,

    /// Clique size: 3 for triangle density (MWTD), 2 for edge density (MWED).
    #[arg(long, default_value_t = 3)]
    k: usize,

    /// Max-flow engine to drive each min-cut solve.
    #[arg(long, default_value = "push-relabel")]
    engine: Engine,

    /// Column separator in the edge-list format (default: tab).
    #[arg(long, default_value = "\t")]
    separator: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let separator = args
        .separator
        .chars()
        .next()
        .context("separator must be a single character")?;

    let files = dataset_files(&args.path)?;
    for path in files {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let span = tracing::info_span!("dataset", name = %name);
        let _enter = span.enter();

        match run_one(&path, separator, args.k, args.engine) {
            Ok(()) => {}
            Err(e) => tracing::warn!("skipping {}: {e:#}", path.display()),
        }
    }
    Ok(())
}

fn run_one(path: &Path, separator: char, k: usize, engine: Engine) -> anyhow::Result<()> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let graph = reader::read_edge_list(std::io::BufReader::new(file), separator)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("reading {}", path.display()))?;

    let start = Instant::now();
    let weights =
        clique_weights(&graph, k).map_err(|e| anyhow::anyhow!("{e}"))?;
    let solution =
        densest_subgraph(&graph, k, engine).map_err(|e| anyhow::anyhow!("{e}"))?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let report = measure(&graph, &solution.vertices, &weights, k);
    tracing::info!(
        "{}: |V|={} |E|={} |S*|={} rho_{}={:.4} iters={} elapsed_ms={:.3}",
        path.display(),
        graph.node_count(),
        graph.edge_count(),
        report.node_count,
        k,
        report.triangle_density,
        solution.iterations,
        elapsed_ms,
    );
    Ok(())
}

fn dataset_files(path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if path.is_dir() {
        let mut files: Vec<PathBuf> = std::fs::read_dir(path)
            .with_context(|| format!("reading directory {}", path.display()))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.is_file())
            .collect();
        files.sort();
        Ok(files)
    } else {
        Ok(vec![path.to_path_buf()])
    }
}
