//! Solver configuration: marker characters and search options.

use std::fmt;

use crate::error::{Result, SolveError};
use crate::maze::Tile;

/// Which of the two unique markers a value refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MarkerKind {
    Start,
    End,
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// The reserved characters of the maze text format.
///
/// Any character that is not `start`, `end` or `floor` is a wall. `path` is
/// only used when rendering a solution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Markers {
    pub start: char,
    pub end: char,
    pub floor: char,
    pub path: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: '→',
            end: '@',
            floor: ' ',
            path: '.',
        }
    }
}

impl Markers {
    /// Set the start marker (builder).
    #[inline]
    pub const fn with_start(mut self, ch: char) -> Self {
        self.start = ch;
        self
    }

    /// Set the end marker (builder).
    #[inline]
    pub const fn with_end(mut self, ch: char) -> Self {
        self.end = ch;
        self
    }

    /// Set the floor character (builder).
    #[inline]
    pub const fn with_floor(mut self, ch: char) -> Self {
        self.floor = ch;
        self
    }

    /// Set the path marker (builder).
    #[inline]
    pub const fn with_path(mut self, ch: char) -> Self {
        self.path = ch;
        self
    }

    /// The marker character for `kind`.
    #[inline]
    pub const fn marker(&self, kind: MarkerKind) -> char {
        match kind {
            MarkerKind::Start => self.start,
            MarkerKind::End => self.end,
        }
    }

    /// Check that all four characters are pairwise distinct.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("start", self.start),
            ("end", self.end),
            ("floor", self.floor),
            ("path", self.path),
        ];
        for (i, (a_name, a)) in named.iter().enumerate() {
            for (b_name, b) in &named[i + 1..] {
                if a == b {
                    return Err(SolveError::InvalidMarkers(format!(
                        "{a_name} and {b_name} markers are both {a:?}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Classify a grid character.
    pub fn classify(&self, ch: char) -> Tile {
        if ch == self.start {
            Tile::Start
        } else if ch == self.end {
            Tile::End
        } else if ch == self.floor {
            Tile::Floor
        } else {
            Tile::Wall
        }
    }
}

/// How far the breadth-first search runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SearchMode {
    /// Explore everything reachable from the start.
    #[default]
    Exhaustive,
    /// Stop as soon as the end has been discovered.
    StopAtEnd,
}

/// Options for a [`Solver`](crate::Solver).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SolverConfig {
    pub markers: Markers,
    /// Reject mazes with more than one start or end marker instead of using
    /// the first one in row-major order.
    pub strict_markers: bool,
    pub search: SearchMode,
}

impl SolverConfig {
    /// Set the markers (builder).
    #[inline]
    pub const fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Enable or disable strict marker checking (builder).
    #[inline]
    pub const fn with_strict_markers(mut self, strict: bool) -> Self {
        self.strict_markers = strict;
        self
    }

    /// Set the search mode (builder).
    #[inline]
    pub const fn with_search(mut self, search: SearchMode) -> Self {
        self.search = search;
        self
    }
}
