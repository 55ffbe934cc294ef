//! The [`SolveError`] type.

use mazer_core::{GridError, Point};
use thiserror::Error;

use crate::config::MarkerKind;

/// Everything that can go wrong between maze text and a solved path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The text does not describe a rectangular grid.
    #[error("malformed grid: {0}")]
    MalformedGrid(#[from] GridError),

    /// The grid has no start or no end marker.
    #[error("no {kind} marker {marker:?} in maze")]
    MissingMarker { kind: MarkerKind, marker: char },

    /// Strict mode only: a marker occurs more than once.
    #[error("{kind} marker {marker:?} appears at both {first} and {second}")]
    DuplicateMarker {
        kind: MarkerKind,
        marker: char,
        first: Point,
        second: Point,
    },

    /// The end cell is not connected to the start cell.
    #[error("no path from start {start} to end {end}")]
    Unreachable { start: Point, end: Point },

    /// The configured marker characters collide.
    #[error("invalid markers: {0}")]
    InvalidMarkers(String),
}

pub type Result<T> = std::result::Result<T, SolveError>;
