pub mod fib_dijkstra;
pub mod traits;

pub use fib_dijkstra::FibDijkstra;
pub use traits::PointToPointAlgorithm;
