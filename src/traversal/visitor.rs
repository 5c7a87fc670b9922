//! Visitor state machine and hook interface
//!
//! A visitor is a finite-state object consumed by the traversal driver. Its
//! life cycle is strictly forward: `Unvisited -> InProgress -> Complete`,
//! with no reentry. Hooks are only legal while `InProgress`; accessors over
//! accumulated results are only legal once `Complete`. Violations surface as
//! [`GraphError::IllegalState`].

use std::fmt;

use crate::graph::{GraphError, GraphResult, Vertex};

/// The life-cycle state of a stateful visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitorState {
    /// Initial state; the traversal has never started
    Unvisited,
    /// The traversal is active
    InProgress,
    /// Terminal state; accumulators are frozen and readable
    Complete,
}

impl VisitorState {
    /// Fails with [`GraphError::IllegalState`] unless `self` is `required`
    pub fn require(self, required: VisitorState) -> GraphResult<()> {
        if self == required {
            Ok(())
        } else {
            Err(GraphError::illegal_state(required, self))
        }
    }
}

impl fmt::Display for VisitorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VisitorState::Unvisited => "unvisited",
            VisitorState::InProgress => "in-progress",
            VisitorState::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// Hooks invoked by the depth-first driver at each traversal event.
///
/// Every hook defaults to a no-op, so implementations override only the
/// events they care about. Edge hooks receive both endpoints of the edge
/// being classified. A hook returning an error unwinds the traversal
/// immediately; no partial results are salvaged.
pub trait DfsVisitor<T> {
    /// Invoked once before anything else; transitions a stateful visitor
    /// out of its initial state.
    fn begin_traversal(&mut self) -> GraphResult<()> {
        Ok(())
    }

    /// Invoked once per vertex before any root is explored
    fn on_initialize_vertex(&mut self, _vertex: &Vertex<T>) -> GraphResult<()> {
        Ok(())
    }

    /// Invoked for each vertex used as a traversal root
    fn on_start_vertex(&mut self, _vertex: &Vertex<T>) -> GraphResult<()> {
        Ok(())
    }

    /// Invoked for every outgoing edge, before it is classified
    fn on_examine_edge(&mut self, _tail: &Vertex<T>, _head: &Vertex<T>) -> GraphResult<()> {
        Ok(())
    }

    /// Invoked when the edge target has not been reached yet
    fn on_tree_edge(&mut self, _tail: &Vertex<T>, _head: &Vertex<T>) -> GraphResult<()> {
        Ok(())
    }

    /// Invoked when the edge target is an ancestor on the active walk stack.
    ///
    /// A back edge is evidence of a cycle.
    fn on_back_edge(&mut self, _tail: &Vertex<T>, _head: &Vertex<T>) -> GraphResult<()> {
        Ok(())
    }

    /// Invoked when the edge target has already finished
    fn on_forward_or_cross_edge(
        &mut self,
        _tail: &Vertex<T>,
        _head: &Vertex<T>,
    ) -> GraphResult<()> {
        Ok(())
    }

    /// Invoked for a vertex once all of its outgoing edges have been examined
    /// and all of its descendants have finished
    fn on_finish_vertex(&mut self, _vertex: &Vertex<T>) -> GraphResult<()> {
        Ok(())
    }

    /// Invoked exactly once after all roots have been processed
    fn end_traversal(&mut self) -> GraphResult<()> {
        Ok(())
    }
}

/// The base stateful visitor: detects cycles by recording back edges.
///
/// Every hook requires the visitor to be in-progress, and the recorded back
/// edges become readable only once the traversal is complete:
///
/// ```
/// use plegma::{CycleVisitor, DirectedGraph, Vertex};
/// use plegma::traversal::depth_first;
///
/// let a = Vertex::new("a");
/// let b = Vertex::new("b");
/// let mut graph = DirectedGraph::new();
/// graph.add_directed_edge(a.clone(), b.clone());
/// graph.add_directed_edge(b.clone(), a.clone());
///
/// let mut visitor = CycleVisitor::new();
/// depth_first(&graph, &mut visitor).unwrap();
/// assert_eq!(visitor.found_cycle(), Ok(true));
/// assert_eq!(visitor.back_edges(), Ok(&[(b, a)][..]));
/// ```
pub struct CycleVisitor<T> {
    state: VisitorState,
    back_edges: Vec<(Vertex<T>, Vertex<T>)>,
}

impl<T> CycleVisitor<T> {
    /// Creates a fresh visitor in the `Unvisited` state
    pub fn new() -> Self {
        Self {
            state: VisitorState::Unvisited,
            back_edges: Vec::new(),
        }
    }

    /// Returns the current life-cycle state
    pub fn state(&self) -> VisitorState {
        self.state
    }

    /// Returns whether any back edge was encountered.
    ///
    /// Requires the `Complete` state.
    pub fn found_cycle(&self) -> GraphResult<bool> {
        self.state.require(VisitorState::Complete)?;
        Ok(!self.back_edges.is_empty())
    }

    /// Returns the back edges in encounter order.
    ///
    /// Requires the `Complete` state.
    pub fn back_edges(&self) -> GraphResult<&[(Vertex<T>, Vertex<T>)]> {
        self.state.require(VisitorState::Complete)?;
        Ok(&self.back_edges)
    }
}

impl<T> Default for CycleVisitor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DfsVisitor<T> for CycleVisitor<T> {
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

    fn on_back_edge(&mut self, tail: &Vertex<T>, head: &Vertex<T>) -> GraphResult<()> {
        self.state.require(VisitorState::InProgress)?;
        self.back_edges.push((tail.clone(), head.clone()));
        Ok(())
    }

    fn on_forward_or_cross_edge(&mut self, _tail: &Vertex<T>, _head: &Vertex<T>) -> GraphResult<()> {
        self.state.require(VisitorState::InProgress)
    }

    fn on_finish_vertex(&mut self, _vertex: &Vertex<T>) -> GraphResult<()> {
        self.state.require(VisitorState::InProgress)
    }

    fn end_traversal(&mut self) -> GraphResult<()> {
        self.state.require(VisitorState::InProgress)?;
        self.state = VisitorState::Complete;
        Ok(())
    }
}
