//! Error types for the core library surface.
//!
//! Following the rest of the algorithms in this crate, errors are plain
//! marker enums that implement [`error_stack::Context`] so call sites can
//! attach printable context without the core itself depending on a
//! particular reporting format.

use core::fmt::{Display, Formatter};

use error_stack::Context;

/// Failure modes for [`crate::density::densest_subgraph`] and the clique
/// weight builder that feeds it.
#[derive(Debug)]
pub enum DensityError {
    /// `k` was outside `{2, 3}` (§7 "Invalid k").
    InvalidK(usize),
}

impl Display for DensityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidK(k) => write!(f, "invalid clique size k = {k}, expected 2 or 3"),
        }
    }
}

impl Context for DensityError {}

/// Failure modes for the edge-list reader (§6 external collaborators).
#[derive(Debug)]
pub enum GraphReadError {
    /// A data line had fewer than two separator-delimited columns.
    MalformedLine { line_no: usize, text: String },
    /// An edge weight column was present but not parseable as an integer.
    InvalidWeight { line_no: usize, text: String },
    /// The underlying file could not be opened or read.
    Io(std::io::Error),
}

impl Display for GraphReadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MalformedLine { line_no, text } => {
                write!(f, "line {line_no}: expected `<u><sep><v>`, got {text:?}")
            }
            Self::InvalidWeight { line_no, text } => {
                write!(f, "line {line_no}: could not parse weight in {text:?}")
            }
            Self::Io(e) => write!(f, "I/O error reading edge list: {e}"),
        }
    }
}

impl Context for GraphReadError {}

impl From<std::io::Error> for GraphReadError {
    fn from(e: std::io::Error) -> Self {
        GraphReadError::Io(e)
    }
}
