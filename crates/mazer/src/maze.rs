//! A parsed maze: a character [`Grid`] plus the [`Markers`] that give its
//! characters meaning.

use mazer_core::{Grid, Point};
use mazer_paths::{Pather, cardinal};

use crate::config::{MarkerKind, Markers};
use crate::error::{Result, SolveError};

/// The kind of a maze cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Floor,
    Start,
    End,
}

impl Tile {
    /// Whether the cell can be walked through.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

/// An immutable maze.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    markers: Markers,
}

impl Maze {
    /// Wrap an already parsed grid.
    ///
    /// The path marker must not occur in the grid, otherwise a rendered
    /// solution could not be told apart from the maze's own walls.
    pub fn new(grid: Grid, markers: Markers) -> Result<Self> {
        markers.validate()?;
        if let Some(at) = grid.find(markers.path) {
            return Err(SolveError::InvalidMarkers(format!(
                "path marker {:?} already appears in the maze at {at}",
                markers.path
            )));
        }
        Ok(Self { grid, markers })
    }

    /// Parse maze text. See [`Grid::parse`] for the accepted format.
    pub fn parse(text: &str, markers: Markers) -> Result<Self> {
        Self::new(Grid::parse(text)?, markers)
    }

    /// The underlying character grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// (columns, rows).
    #[inline]
    pub fn dimensions(&self) -> Point {
        self.grid.size()
    }

    /// First start marker in row-major order.
    pub fn start_coordinates(&self) -> Result<Point> {
        self.locate(MarkerKind::Start)
    }

    /// First end marker in row-major order.
    pub fn end_coordinates(&self) -> Result<Point> {
        self.locate(MarkerKind::End)
    }

    /// First occurrence of the `kind` marker in row-major order.
    pub fn locate(&self, kind: MarkerKind) -> Result<Point> {
        let marker = self.markers.marker(kind);
        self.grid
            .find(marker)
            .ok_or(SolveError::MissingMarker { kind, marker })
    }

    /// Like [`locate`](Self::locate), but fails with
    /// [`SolveError::DuplicateMarker`] if the marker occurs twice.
    pub fn locate_unique(&self, kind: MarkerKind) -> Result<Point> {
        let marker = self.markers.marker(kind);
        let mut found = self.grid.positions(marker);
        let first = found
            .next()
            .ok_or(SolveError::MissingMarker { kind, marker })?;
        match found.next() {
            Some(second) => Err(SolveError::DuplicateMarker {
                kind,
                marker,
                first,
                second,
            }),
            None => Ok(first),
        }
    }

    /// The character at `p`, or `None` outside the maze.
    #[inline]
    pub fn node_value(&self, p: Point) -> Option<char> {
        self.grid.at(p)
    }

    /// The kind of cell at `p`, or `None` outside the maze.
    #[inline]
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.node_value(p).map(|ch| self.markers.classify(ch))
    }

    /// Whether `p` is inside the maze and not a wall.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.tile(p).is_some_and(Tile::is_walkable)
    }

    /// Walkable neighbors of `p`, in west, east, south, north order.
    pub fn neighbors(&self, p: Point) -> Vec<Point> {
        cardinal(p, |n| self.is_walkable(n)).collect()
    }
}

impl Pather for Maze {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(cardinal(p, |n| self.is_walkable(n)));
    }
}
