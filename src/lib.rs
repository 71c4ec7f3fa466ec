//! Point-to-point shortest path on weighted directed graphs.
//!
//! This library pairs the classic Dijkstra relaxation loop with a
//! Fibonacci-heap priority queue, giving O(E + V log V) amortized time on
//! graphs with non-negative integer edge weights. The heap supports the
//! amortized O(1) decrease-key that makes this bound possible.
//!
//! Graphs are loaded from a DIMACS-style edge-list format (`p sp <n> <m>`
//! header, `a <from> <to> <weight>` edge lines) with 1-based vertex ids.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{fib_dijkstra::FibDijkstra, PointToPointAlgorithm};
pub use data_structures::FibonacciHeap;
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Distance computation overflowed")]
    DistanceOverflow,

    #[error("Edge declared before the 'p sp' header line")]
    MissingHeader,

    #[error("Malformed line {0}: {1:?}")]
    MalformedLine(usize, String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
