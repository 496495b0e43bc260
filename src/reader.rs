//! Edge-list reader (§6 external collaborators).
//!
//! Text, one edge per line: `<u><sep><v>[<sep><weight>]`. Empty lines and
//! lines starting with `#` are ignored. Input edge weights are parsed (so a
//! malformed weight column is still an error) but otherwise discarded: §1
//! Non-goals excludes weighted-input density, and §4.4's clique weights are
//! purely a function of graph topology.

use std::io::BufRead;

use error_stack::{Report, ResultExt};

use crate::error::GraphReadError;
use crate::graph::{Graph, GraphBuilder};

/// Reads an edge list from `reader`, separating columns on `separator`
/// (defaults to a tab per §6).
pub fn read_edge_list<R: BufRead>(
    reader: R,
    separator: char,
) -> error_stack::Result<Graph, GraphReadError> {
    let mut builder = GraphBuilder::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line
            .map_err(GraphReadError::from)
            .map_err(Report::from)
            .attach_printable_lazy(|| format!("reading line {}", line_no + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut cols = line.splitn(3, separator);
        let (Some(u), Some(v)) = (cols.next(), cols.next()) else {
            return Err(Report::new(GraphReadError::MalformedLine {
                line_no: line_no + 1,
                text: line.to_owned(),
            }));
        };
        if let Some(weight) = cols.next() {
            weight
                .trim()
                .parse::<i64>()
                .change_context_lazy(|| GraphReadError::InvalidWeight {
                    line_no: line_no + 1,
                    text: line.to_owned(),
                })?;
        }
        builder.add_edge(u.trim(), v.trim());
    }
    Ok(builder.build())
}

/// Convenience wrapper reading from a path with the default tab separator.
pub fn read_edge_list_file(path: &std::path::Path) -> error_stack::Result<Graph, GraphReadError> {
    let file = std::fs::File::open(path)
        .map_err(GraphReadError::from)
        .map_err(Report::from)
        .attach_printable_lazy(|| format!("opening {}", path.display()))?;
    read_edge_list(std::io::BufReader::new(file), '\t')
}
