//! Breadth-first search on 2D grids.
//!
//! This crate provides the graph-search layer of the mazer solver:
//!
//! - **BFS** traversal as an explicit, steppable state machine ([`Bfs`])
//! - **Path reconstruction** from recorded predecessor links ([`SearchTree::path_to`])
//! - **BFS distance maps** ([`distance_map`]) for unweighted reachability queries
//!
//! Grids plug in through the [`Pather`] trait, which only has to enumerate
//! the walkable neighbors of a point.

mod bfs;
mod distance;
mod neighbors;
mod traits;
mod tree;

pub use bfs::{Bfs, distance_map};
pub use distance::manhattan;
pub use neighbors::cardinal;
pub use traits::Pather;
pub use tree::{PathError, SearchTree};
