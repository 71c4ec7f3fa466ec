use std::fmt::Debug;

/// Trait representing a read-only weighted directed graph
pub trait Graph<W>: Debug
where
    W: Copy + Ord + Debug,
{
    /// Returns the number of vertex slots in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;
}
