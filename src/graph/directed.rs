use crate::graph::traits::Graph;
use crate::{Error, Result};
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists
///
/// Vertices are dense indices in `[0, vertex_count)`. The graph is built once
/// by the loader (or by hand in tests) and treated as read-only afterwards.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Copy + Ord + Debug,
{
    /// Outgoing edges for each vertex: adjacency[vertex] = [(target, weight)]
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> DirectedGraph<W>
where
    W: Copy + Ord + Debug,
{
    /// Creates a new directed graph with the specified number of vertex slots
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// Adds a directed edge between existing vertices
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }
        self.adjacency[from].push((to, weight));
        Ok(())
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Copy + Ord + Debug,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.adjacency.len()
    }
}
