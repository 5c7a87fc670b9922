//! Error types for graph and traversal operations
//!
//! All three error kinds are synchronous contract violations raised at the
//! call that breaks a precondition. None are transient: there is nothing to
//! retry in pure in-memory logic, and no partial results are produced.

use crate::traversal::VisitorState;
use thiserror::Error;

/// Result type for graph and traversal operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur during graph and traversal operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// A mutation referenced a vertex that is not a member of the graph
    #[error("vertex is not a member of this graph")]
    NonexistentVertex,

    /// A state-gated visitor operation was invoked outside its legal state
    #[error("operation requires a visitor in the {required} state, but it is {actual}")]
    IllegalState {
        /// The state the operation requires
        required: VisitorState,
        /// The state the visitor was actually in
        actual: VisitorState,
    },

    /// A back edge was encountered while building a topological order
    #[error("back edge encountered: the graph contains a cycle, so no topological order exists")]
    CycleDetected,
}

impl GraphError {
    /// Creates an illegal-state error for an operation gated on `required`
    pub fn illegal_state(required: VisitorState, actual: VisitorState) -> Self {
        Self::IllegalState { required, actual }
    }
}
