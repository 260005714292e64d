//! All data types for the undigraph library.

pub mod edge;
pub mod error;
pub mod vertex;

pub use edge::HalfEdge;
pub use error::{GraphError, GraphResult};
pub use vertex::Vertex;
