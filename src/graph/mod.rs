//! Directed-Graph Data Structures
//!
//! This module provides the vertex identity model and the adjacency-list
//! directed graph, together with the derived queries built on top of it:
//! acyclicity checking and strongly-connected-component extraction.
//!
//! # Design Principles
//!
//! Following Parnas's information hiding principles:
//! - This module hides the graph representation (adjacency list vs matrix)
//! - Exposes only abstract operations: add_vertex, add_directed_edge,
//!   transpose, cycles, etc.
//!
//! Vertices are compared by identity, not by payload value: two handles are
//! the same vertex only if one is a clone of the other. The graph therefore
//! places no trait bounds on the payload type.

mod directed;
mod error;
mod vertex;

pub use directed::DirectedGraph;
pub use error::{GraphError, GraphResult};
pub use vertex::Vertex;
