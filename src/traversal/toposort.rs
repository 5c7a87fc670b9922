//! Topological sorting
//!
//! The [`ToposortVisitor`] accumulates vertices in the order they finish;
//! since a vertex finishes only after all of its descendants, finish order is
//! a dependency-respecting order of the walked graph. [`topological_sort`]
//! therefore drives the walk over the *transpose* of the input: for every
//! input edge `(u, v)`, `u` finishes before `v` there, so the accumulated
//! sequence lists tails before heads without any post-processing.
//!
//! Any back edge proves the input is cyclic, making a topological order
//! impossible; the visitor rejects it outright rather than emitting a
//! partial ordering.

use tracing::debug;

use crate::graph::{DirectedGraph, GraphError, GraphResult, Vertex};

use super::depth_first::depth_first;
use super::visitor::{DfsVisitor, VisitorState};

/// Returns the vertices of `graph` in topological order.
///
/// For every edge `(u, v)` of the graph, `u` precedes `v` in the result.
/// Fails with [`GraphError::CycleDetected`] when the graph is not acyclic.
///
/// # Example
///
/// ```
/// use plegma::{DirectedGraph, GraphError, Vertex};
/// use plegma::traversal::topological_sort;
///
/// let a = Vertex::new("a");
/// let b = Vertex::new("b");
/// let mut graph = DirectedGraph::new();
/// graph.add_directed_edge(a.clone(), b.clone());
///
/// assert_eq!(topological_sort(&graph).unwrap(), vec![a.clone(), b.clone()]);
///
/// graph.add_directed_edge(b, a);
/// assert_eq!(topological_sort(&graph), Err(GraphError::CycleDetected));
/// ```
pub fn topological_sort<T>(graph: &DirectedGraph<T>) -> GraphResult<Vec<Vertex<T>>> {
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "computing topological order"
    );

    let mut visitor = ToposortVisitor::new();
    depth_first(&graph.transpose(), &mut visitor)?;
    visitor.into_tsl()
}

/// A visitor accumulating a topological sort list (TSL).
///
/// `on_finish_vertex` appends each vertex as it finishes; `on_back_edge`
/// unconditionally fails with [`GraphError::CycleDetected`], aborting the
/// traversal. The TSL is readable only once the visitor is complete.
pub struct ToposortVisitor<T> {
    state: VisitorState,
    tsl: Vec<Vertex<T>>,
}

impl<T> ToposortVisitor<T> {
    /// Creates a fresh visitor in the `Unvisited` state
    pub fn new() -> Self {
        Self {
            state: VisitorState::Unvisited,
            tsl: Vec::new(),
        }
    }

    /// Returns the current life-cycle state
    pub fn state(&self) -> VisitorState {
        self.state
    }

    /// Returns the accumulated ordering.
    ///
    /// Requires the `Complete` state.
    pub fn tsl(&self) -> GraphResult<&[Vertex<T>]> {
        self.state.require(VisitorState::Complete)?;
        Ok(&self.tsl)
    }

    /// Consumes the visitor, returning the accumulated ordering.
    ///
    /// Requires the `Complete` state.
    pub fn into_tsl(self) -> GraphResult<Vec<Vertex<T>>> {
        self.state.require(VisitorState::Complete)?;
        Ok(self.tsl)
    }
}

impl<T> Default for ToposortVisitor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DfsVisitor<T> for ToposortVisitor<T> {
    fn begin_traversal(&mut self) -> GraphResult<()> {
        self.state.require(VisitorState::Unvisited)?;
        self.state = VisitorState::InProgress;
        Ok(())
    }

    fn on_initialize_vertex(&mut self, _vertex: &Vertex<T>) -> GraphResult<()> {
        self.state.require(VisitorState::InProgress)
    }

    fn on_start_vertex(&mut self, _vertex: &Vertex<T>) -> GraphResult<()> {
        self.state.require(VisitorState::InProgress)
    }

    fn on_examine_edge(&mut self, _tail: &Vertex<T>, _head: &Vertex<T>) -> GraphResult<()> {
        self.state.require(VisitorState::InProgress)
    }

    fn on_tree_edge(&mut self, _tail: &Vertex<T>, _head: &Vertex<T>) -> GraphResult<()> {
        self.state.require(VisitorState::InProgress)
    }

    fn on_back_edge(&mut self, _tail: &Vertex<T>, _head: &Vertex<T>) -> GraphResult<()> {
        self.state.require(VisitorState::InProgress)?;
        Err(GraphError::CycleDetected)
    }

    fn on_forward_or_cross_edge(&mut self, _tail: &Vertex<T>, _head: &Vertex<T>) -> GraphResult<()> {
        self.state.require(VisitorState::InProgress)
    }

    fn on_finish_vertex(&mut self, vertex: &Vertex<T>) -> GraphResult<()> {
        self.state.require(VisitorState::InProgress)?;
        self.tsl.push(vertex.clone());
        Ok(())
    }

    fn end_traversal(&mut self) -> GraphResult<()> {
        self.state.require(VisitorState::InProgress)?;
        self.state = VisitorState::Complete;
        Ok(())
    }
}
