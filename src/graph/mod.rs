pub mod directed;
pub mod loader;
pub mod traits;

pub use directed::DirectedGraph;
pub use loader::{load_graph, read_graph};
pub use traits::Graph;
