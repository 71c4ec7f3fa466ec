use log::{debug, trace};
use num_traits::{CheckedAdd, Zero};
use std::fmt::Debug;

use crate::algorithm::PointToPointAlgorithm;
use crate::data_structures::FibonacciHeap;
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra's algorithm driven by a Fibonacci heap.
///
/// The heap's amortized O(1) decrease-key gives the O(E + V log V) bound on
/// relaxation-heavy graphs. Stale heap entries are handled lazily: a vertex
/// extracted after it was already finalized is simply skipped, so the heap
/// never needs an explicit delete operation.
#[derive(Debug, Default)]
pub struct FibDijkstra;

impl FibDijkstra {
    /// Creates a new algorithm instance
    pub fn new() -> Self {
        FibDijkstra
    }
}

impl<W, G> PointToPointAlgorithm<W, G> for FibDijkstra
where
    W: Copy + Ord + Zero + CheckedAdd + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra (Fibonacci heap)"
    }

    fn shortest_distance(&self, graph: &G, source: usize, target: usize) -> Result<Option<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        if !graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }

        let n = graph.vertex_count();
        let mut best: Vec<Option<W>> = vec![None; n];
        let mut finalized = vec![false; n];
        let mut heap = FibonacciHeap::with_capacity(n);

        best[source] = Some(W::zero());
        heap.insert(source, W::zero());

        while let Some((u, dist_u)) = heap.extract_min() {
            if finalized[u] {
                // Stale entry, already settled through a shorter path.
                continue;
            }
            finalized[u] = true;

            if u == target {
                debug!("finalized target {} at distance {:?}", u, dist_u);
                return Ok(Some(dist_u));
            }

            for (v, weight) in graph.outgoing_edges(u) {
                if finalized[v] {
                    continue;
                }
                let candidate = dist_u
                    .checked_add(&weight)
                    .ok_or(Error::DistanceOverflow)?;
                let improves = match best[v] {
                    None => true,
                    Some(current) => candidate < current,
                };
                if improves {
                    trace!("relaxing {} -> {} to {:?}", u, v, candidate);
                    best[v] = Some(candidate);
                    match heap.handle(v) {
                        Some(id) => heap.decrease_key(id, candidate),
                        None => {
                            heap.insert(v, candidate);
                        }
                    }
                }
            }
        }

        debug!("heap drained without reaching {}", target);
        Ok(None)
    }
}
