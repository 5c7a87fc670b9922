//! Vertex identity handles
//!
//! This module defines the `Vertex` type, an opaque handle to client-supplied
//! payload data. Handles are compared by reference identity: cloning a handle
//! yields the *same* vertex, while constructing a new handle from an equal
//! payload yields a *different* one.
//!
//! # Design Decision
//!
//! Identity comparison is deliberate: payloads may be mutable, non-comparable,
//! or expensive to hash, so the graph must never inspect them. All equality
//! and hashing operate on the handle's allocation address, which is stable for
//! the handle's lifetime. The `Eq`/`Hash` impls are written by hand so that no
//! bounds leak onto the payload type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// An opaque, cheaply cloneable handle to a vertex payload.
///
/// Two `Vertex` values are equal only when they share the same underlying
/// allocation. Payload equality is never consulted:
///
/// ```
/// use plegma::Vertex;
///
/// let a = Vertex::new("task");
/// let b = Vertex::new("task");
///
/// assert_eq!(a, a.clone()); // clones share identity
/// assert_ne!(a, b);         // equal payloads, distinct vertices
/// ```
pub struct Vertex<T> {
    payload: Rc<T>,
}

impl<T> Vertex<T> {
    /// Creates a new vertex handle owning the given payload.
    pub fn new(payload: T) -> Self {
        Self {
            payload: Rc::new(payload),
        }
    }

    /// Returns a reference to the payload.
    pub fn payload(&self) -> &T {
        &self.payload
    }
}

impl<T> Clone for Vertex<T> {
    fn clone(&self) -> Self {
        Self {
            payload: Rc::clone(&self.payload),
        }
    }
}

impl<T> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.payload, &other.payload)
    }
}

impl<T> Eq for Vertex<T> {}

impl<T> Hash for Vertex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.payload).hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex({:?})", self.payload)
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_identity() {
        let a = Vertex::new("a");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn test_equal_payloads_distinct_identity() {
        let a = Vertex::new(42);
        let b = Vertex::new(42);
        assert_ne!(a, b);
    }

    #[test]
    fn test_payload_access() {
        let v = Vertex::new(String::from("node"));
        assert_eq!(v.payload(), "node");
    }

    #[test]
    fn test_identity_hashing() {
        use std::collections::HashSet;

        let a = Vertex::new("x");
        let b = Vertex::new("x");

        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(a.clone()); // duplicate handle
        set.insert(b);

        assert_eq!(set.len(), 2);
        assert!(set.contains(&a));
    }

    #[test]
    fn test_payload_needs_no_bounds() {
        // A payload with no derives at all is still usable.
        struct Opaque {
            #[allow(dead_code)]
            data: Vec<u8>,
        }

        let v = Vertex::new(Opaque { data: vec![1, 2] });
        // `assert!` rather than `assert_eq!`: the payload has no `Debug`, and
        // the whole point of this test is that no bounds leak onto it.
        assert!(v == v.clone());
    }

    #[test]
    fn test_display_and_debug() {
        let v = Vertex::new("a");
        assert_eq!(format!("{}", v), "a");
        assert_eq!(format!("{:?}", v), "Vertex(\"a\")");
    }
}
