//! Plegma: In-Memory Directed Graphs
//!
//! `plegma` (πλέγμα, Greek for "mesh" or "something woven") is a small, pure,
//! synchronous graph library: an adjacency-list directed graph plus a
//! depth-first traversal engine driven by pluggable, stateful visitors.
//!
//! # Features
//!
//! - **Identity-based vertices**: vertices are opaque handles compared by
//!   identity, never by payload equality, so payloads need no trait bounds
//! - **Deterministic iteration**: vertices and edges enumerate in insertion
//!   order, fixing a stable total ordering for every traversal
//! - **Topological sorting**: reverse-postorder construction with hard
//!   rejection of cyclic input
//! - **Cycle detection**: strongly connected components via Tarjan's
//!   algorithm, plus a boolean acyclicity query
//! - **Pluggable visitors**: a hook interface invoked at every traversal
//!   event, with a state machine guarding accumulator access
//!
//! # Quick Start
//!
//! ```
//! use plegma::{DirectedGraph, Vertex};
//! use plegma::traversal::topological_sort;
//!
//! let mut graph = DirectedGraph::new();
//! let fetch = Vertex::new("fetch");
//! let build = Vertex::new("build");
//! let test = Vertex::new("test");
//!
//! // fetch must run before build, build before test
//! graph.add_directed_edge(fetch.clone(), build.clone());
//! graph.add_directed_edge(build.clone(), test.clone());
//!
//! let order = topological_sort(&graph).unwrap();
//! assert_eq!(order, vec![fetch, build, test]);
//! ```
//!
//! # Module Organization
//!
//! Each module hides one design decision that is likely to change:
//!
//! - [`graph`]: vertex identity and the adjacency-list representation
//! - [`traversal`]: the depth-first engine and its visitor contract
//!
//! # Scope
//!
//! The library is fully single-threaded and performs no I/O: graphs and
//! visitors are plain values, every operation completes synchronously, and
//! errors are typed contract violations rather than environmental failures.

pub mod graph;
pub mod traversal;

// Re-export commonly used types for convenience
pub use graph::{DirectedGraph, GraphError, GraphResult, Vertex};

pub use traversal::{
    depth_first, topological_sort, CycleVisitor, DfsVisitor, ToposortVisitor, VisitorState,
};

/// Prelude module for convenient glob imports
///
/// # Example
///
/// ```
/// use plegma::prelude::*;
///
/// let mut graph = DirectedGraph::new();
/// graph.add_vertex(Vertex::new("a"));
/// assert_eq!(graph.vertex_count(), 1);
/// ```
pub mod prelude {
    pub use crate::graph::{DirectedGraph, GraphError, GraphResult, Vertex};
    pub use crate::traversal::{
        depth_first, topological_sort, CycleVisitor, DfsVisitor, ToposortVisitor, VisitorState,
    };
}
