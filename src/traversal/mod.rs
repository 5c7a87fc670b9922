//! Depth-First Traversal Engine
//!
//! This module provides the generic depth-first walk over a
//! [`DirectedGraph`](crate::graph::DirectedGraph) and the visitor contract it
//! drives:
//!
//! - [`depth_first`]: the traversal driver, classifying every edge as tree,
//!   back, or forward/cross and invoking the matching visitor hook
//! - [`DfsVisitor`]: the hook interface any visitor implements
//! - [`CycleVisitor`]: the base stateful visitor, recording back edges
//! - [`ToposortVisitor`] / [`topological_sort`]: the topological-sort
//!   specialization, rejecting cyclic input
//!
//! # Design Principles
//!
//! The driver owns traversal mechanics (root selection, edge classification,
//! finish ordering); visitors own policy (what each event means). Stateful
//! visitors enforce a one-way `Unvisited -> InProgress -> Complete` life
//! cycle, so accumulated results can only be read after the traversal has
//! ended, and a visitor can never be re-driven.

mod depth_first;
mod toposort;
mod visitor;

pub use depth_first::depth_first;
pub use toposort::{topological_sort, ToposortVisitor};
pub use visitor::{CycleVisitor, DfsVisitor, VisitorState};
