//! **mazer-core** — geometry and grid types for the mazer text-maze solver.
//!
//! This crate provides the foundational types shared by the rest of the
//! workspace: integer points and ranges, and an owned character [`Grid`]
//! parsed from newline-separated text.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range, RangeIter};
pub use grid::{Grid, GridError, GridIter};
