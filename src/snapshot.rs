//! The committed "initial" configuration that reset returns to.

use crate::body::Body;

/// Trail-free value copies of the bodies at the last commit.
///
/// Both directions copy: the store never shares memory with a live list, so
/// mutating either side afterwards leaves the other untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotStore {
    bodies: Vec<Body>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored snapshot with copies of `bodies`.
    pub fn commit(&mut self, bodies: &[Body]) {
        self.bodies = bodies.iter().map(Body::detached).collect();
    }

    /// A fresh copy of the stored snapshot.
    pub fn restore(&self) -> Vec<Body> {
        self.bodies.iter().map(Body::detached).collect()
    }

    /// Read-only view of what a reset would bring back.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
