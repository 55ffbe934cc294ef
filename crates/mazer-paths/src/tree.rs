//! Path reconstruction from a finished breadth-first traversal.

use std::collections::{HashMap, HashSet};

use mazer_core::Point;
use thiserror::Error;

/// Errors produced while reconstructing a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// The goal was never discovered, or its predecessor chain does not lead
    /// back to the root.
    #[error("no path reaches {goal}")]
    Unreachable { goal: Point },
}

/// The predecessor links left behind by a [`Bfs`](crate::Bfs) traversal.
///
/// Every discovered point except the root maps to the point it was first
/// reached from. Because links are set once, at first discovery, following
/// them from any point back to the root gives a shortest path.
#[derive(Debug, Clone)]
pub struct SearchTree {
    root: Point,
    predecessors: HashMap<Point, Point>,
    visited: HashSet<Point>,
}

impl SearchTree {
    pub(crate) fn new(
        root: Point,
        predecessors: HashMap<Point, Point>,
        visited: HashSet<Point>,
    ) -> Self {
        Self {
            root,
            predecessors,
            visited,
        }
    }

    /// Consume the tree, keeping only the set of reached points.
    pub fn into_visited(self) -> HashSet<Point> {
        self.visited
    }

    /// The point `p` was first reached from.
    pub fn predecessor(&self, p: Point) -> Option<Point> {
        self.predecessors.get(&p).copied()
    }

    /// Reconstruct the path from the root to `goal`.
    ///
    /// The returned path starts with the root and ends with `goal`; it is a
    /// single point when `goal` is the root.
    pub fn path_to(&self, goal: Point) -> Result<Vec<Point>, PathError> {
        let mut path = vec![goal];
        let mut current = goal;

        while current != self.root {
            // A chain longer than the number of links would have to revisit a
            // point.
            if path.len() > self.predecessors.len() {
                return Err(PathError::Unreachable { goal });
            }
            let Some(prev) = self.predecessor(current) else {
                return Err(PathError::Unreachable { goal });
            };
            path.push(prev);
            current = prev;
        }

        path.reverse();
        Ok(path)
    }
}
