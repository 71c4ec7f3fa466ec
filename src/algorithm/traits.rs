use crate::graph::Graph;
use crate::Result;
use num_traits::{CheckedAdd, Zero};
use std::fmt::Debug;

/// Trait for point-to-point shortest path algorithms
pub trait PointToPointAlgorithm<W, G>
where
    W: Copy + Ord + Zero + CheckedAdd + Debug,
    G: Graph<W>,
{
    /// Computes the shortest distance from `source` to `target`.
    ///
    /// Returns `Ok(None)` when the target is unreachable from the source;
    /// errors are reserved for contract violations such as vertices outside
    /// the graph.
    fn shortest_distance(&self, graph: &G, source: usize, target: usize) -> Result<Option<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
