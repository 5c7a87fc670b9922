//! Depth-first traversal driver
//!
//! The driver performs the mechanical part of a depth-first walk: it selects
//! roots in vertex insertion order, examines each adjacency sequence in
//! stored order, classifies every edge against per-vertex three-color state,
//! and invokes the matching visitor hook for each event. Vertex color here is
//! traversal bookkeeping, entirely distinct from the visitor's own life-cycle
//! state.
//!
//! The walk uses an explicit stack of `(vertex, adjacency cursor)` frames
//! instead of recursion, so deep graphs cannot exhaust the call stack.

use std::collections::HashMap;

use tracing::trace;

use crate::graph::{DirectedGraph, GraphResult, Vertex};

use super::visitor::DfsVisitor;

/// Per-vertex traversal state: white = unvisited, gray = on the active walk
/// stack, black = finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Walks `graph` depth-first, driving `visitor` at every traversal event.
///
/// The event order is:
/// 1. `begin_traversal`, once
/// 2. `on_initialize_vertex` for every vertex, in insertion order
/// 3. for every not-yet-finished vertex in insertion order: `on_start_vertex`,
///    then the walk — `on_examine_edge` for each outgoing edge followed by
///    exactly one of `on_tree_edge` (descend), `on_back_edge` (target on the
///    active stack), or `on_forward_or_cross_edge` (target finished), and
///    `on_finish_vertex` once a vertex's whole adjacency sequence has been
///    examined and its descendants are finished
/// 4. `end_traversal`, once
///
/// The first hook error unwinds the traversal immediately and is returned to
/// the caller.
pub fn depth_first<T, V>(graph: &DirectedGraph<T>, visitor: &mut V) -> GraphResult<()>
where
    V: DfsVisitor<T>,
{
    visitor.begin_traversal()?;

    let mut colors: HashMap<Vertex<T>, Color> = graph
        .vertices()
        .map(|vertex| (vertex.clone(), Color::White))
        .collect();

    for vertex in graph.vertices() {
        visitor.on_initialize_vertex(vertex)?;
    }

    for root in graph.vertices() {
        if colors[root] != Color::White {
            continue;
        }
        visitor.on_start_vertex(root)?;
        colors.insert(root.clone(), Color::Gray);

        let mut frames: Vec<(Vertex<T>, usize)> = vec![(root.clone(), 0)];
        while let Some((vertex, cursor)) = frames.pop() {
            match graph.adjacency_of(&vertex).get(cursor) {
                Some(head) => {
                    frames.push((vertex.clone(), cursor + 1));
                    visitor.on_examine_edge(&vertex, head)?;
                    match colors[head] {
                        Color::White => {
                            visitor.on_tree_edge(&vertex, head)?;
                            colors.insert(head.clone(), Color::Gray);
                            frames.push((head.clone(), 0));
                        }
                        Color::Gray => visitor.on_back_edge(&vertex, head)?,
                        Color::Black => visitor.on_forward_or_cross_edge(&vertex, head)?,
                    }
                }
                None => {
                    colors.insert(vertex.clone(), Color::Black);
                    visitor.on_finish_vertex(&vertex)?;
                }
            }
        }
    }

    visitor.end_traversal()?;
    trace!(vertices = graph.vertex_count(), "depth-first walk complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphError;
    use crate::traversal::{CycleVisitor, ToposortVisitor};

    /// Records every event as a readable string, with no state gating.
    #[derive(Default)]
    struct RecordingVisitor {
        events: Vec<String>,
    }

    impl DfsVisitor<&'static str> for RecordingVisitor {
        fn on_start_vertex(&mut self, vertex: &Vertex<&'static str>) -> GraphResult<()> {
            self.events.push(format!("start {}", vertex.payload()));
            Ok(())
        }

        fn on_tree_edge(
            &mut self,
            tail: &Vertex<&'static str>,
            head: &Vertex<&'static str>,
        ) -> GraphResult<()> {
            self.events
                .push(format!("tree {}->{}", tail.payload(), head.payload()));
            Ok(())
        }

        fn on_back_edge(
            &mut self,
            tail: &Vertex<&'static str>,
            head: &Vertex<&'static str>,
        ) -> GraphResult<()> {
            self.events
                .push(format!("back {}->{}", tail.payload(), head.payload()));
            Ok(())
        }

        fn on_forward_or_cross_edge(
            &mut self,
            tail: &Vertex<&'static str>,
            head: &Vertex<&'static str>,
        ) -> GraphResult<()> {
            self.events
                .push(format!("cross {}->{}", tail.payload(), head.payload()));
            Ok(())
        }

        fn on_finish_vertex(&mut self, vertex: &Vertex<&'static str>) -> GraphResult<()> {
            self.events.push(format!("finish {}", vertex.payload()));
            Ok(())
        }
    }

    #[test]
    fn test_event_sequence_on_tree() {
        let a = Vertex::new("a");
        let b = Vertex::new("b");
        let c = Vertex::new("c");

        let mut graph = DirectedGraph::new();
        graph.add_directed_edge(a.clone(), b.clone());
        graph.add_directed_edge(a, c);

        let mut visitor = RecordingVisitor::default();
        depth_first(&graph, &mut visitor).unwrap();

        assert_eq!(
            visitor.events,
            vec![
                "start a", "tree a->b", "finish b", "tree a->c", "finish c", "finish a",
            ]
        );
    }

    #[test]
    fn test_back_edge_classification() {
        let a = Vertex::new("a");
        let b = Vertex::new("b");

        let mut graph = DirectedGraph::new();
        graph.add_directed_edge(a.clone(), b.clone());
        graph.add_directed_edge(b, a);

        let mut visitor = RecordingVisitor::default();
        depth_first(&graph, &mut visitor).unwrap();

        assert_eq!(
            visitor.events,
            vec!["start a", "tree a->b", "back b->a", "finish b", "finish a"]
        );
    }

    #[test]
    fn test_forward_or_cross_edge_classification() {
        let a = Vertex::new("a");
        let b = Vertex::new("b");
        let c = Vertex::new("c");

        let mut graph = DirectedGraph::new();
        graph.add_directed_edge(a.clone(), b.clone());
        graph.add_directed_edge(c.clone(), b.clone());

        let mut visitor = RecordingVisitor::default();
        depth_first(&graph, &mut visitor).unwrap();

        assert_eq!(
            visitor.events,
            vec![
                "start a", "tree a->b", "finish b", "finish a", "start c", "cross c->b",
                "finish c",
            ]
        );
    }

    #[test]
    fn test_every_unreached_vertex_becomes_a_root() {
        let a = Vertex::new("a");
        let b = Vertex::new("b");

        let mut graph = DirectedGraph::new();
        graph.add_vertex(a);
        graph.add_vertex(b);

        let mut visitor = RecordingVisitor::default();
        depth_first(&graph, &mut visitor).unwrap();

        assert_eq!(
            visitor.events,
            vec!["start a", "finish a", "start b", "finish b"]
        );
    }

    #[test]
    fn test_completes_stateful_visitor() {
        let a = Vertex::new("a");
        let b = Vertex::new("b");
        let mut graph = DirectedGraph::new();
        graph.add_directed_edge(a, b);

        let mut visitor = CycleVisitor::new();
        depth_first(&graph, &mut visitor).unwrap();

        assert_eq!(visitor.found_cycle(), Ok(false));
    }

    #[test]
    fn test_hook_error_unwinds_traversal() {
        let a = Vertex::new("a");
        let b = Vertex::new("b");
        let mut graph = DirectedGraph::new();
        graph.add_directed_edge(a.clone(), b.clone());
        graph.add_directed_edge(b, a);

        let mut visitor = ToposortVisitor::new();
        let result = depth_first(&graph, &mut visitor);

        assert_eq!(result, Err(GraphError::CycleDetected));
        // The visitor never completed, so its accumulator stays sealed.
        assert!(matches!(
            visitor.tsl(),
            Err(GraphError::IllegalState { .. })
        ));
    }

    #[test]
    fn test_reused_visitor_is_rejected() {
        let graph: DirectedGraph<&str> = DirectedGraph::new();
        let mut visitor = CycleVisitor::new();

        depth_first(&graph, &mut visitor).unwrap();
        assert!(matches!(
            depth_first(&graph, &mut visitor),
            Err(GraphError::IllegalState { .. })
        ));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        // A 100_000-vertex chain would overflow a recursive walk.
        let mut graph = DirectedGraph::new();
        let mut previous = Vertex::new(0usize);
        graph.add_vertex(previous.clone());
        for index in 1..100_000usize {
            let vertex = Vertex::new(index);
            graph.add_directed_edge(previous, vertex.clone());
            previous = vertex;
        }

        let mut visitor = CycleVisitor::new();
        depth_first(&graph, &mut visitor).unwrap();
        assert_eq!(visitor.found_cycle(), Ok(false));
        assert!(graph.is_acyclic());
        assert!(graph.cycles().is_empty());
    }
}
