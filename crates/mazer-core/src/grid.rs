//! The [`Grid`] type: a rectangular 2D map of characters.
//!
//! Unlike a shared-buffer view, a `Grid` owns its cells: cloning it yields an
//! independent copy, which is what solution overlays are drawn on.

use std::fmt;

use thiserror::Error;

use crate::geom::{Point, Range, RangeIter};

/// Errors produced while parsing a grid from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The text contained no rows.
    #[error("grid is empty")]
    Empty,
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A rectangular grid of characters, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a new grid of the given dimensions, filled with `fill`.
    pub fn new(width: i32, height: i32, fill: char) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![fill; (w as usize) * (h as usize)],
            width: w,
            height: h,
        }
    }

    /// Parse newline-separated rows of characters.
    ///
    /// Blank lines before the first and after the last row are ignored. Each
    /// remaining row is trimmed of surrounding whitespace, then split into
    /// characters. All rows must end up with the same width.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let Some(first) = lines.iter().position(|l| !l.is_empty()) else {
            return Err(GridError::Empty);
        };
        let last = lines.iter().rposition(|l| !l.is_empty()).unwrap_or(first);

        let mut cells = Vec::with_capacity(text.len());
        let mut width: Option<usize> = None;
        let mut height = 0usize;

        for (row, line) in lines[first..=last].iter().enumerate() {
            let before = cells.len();
            cells.extend(line.chars());
            let found = cells.len() - before;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::Ragged {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        Ok(Self {
            cells,
            width: width as i32,
            height: height as i32,
        })
    }

    /// The bounding range `[(0, 0), (width, height))`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Size of the grid as a `Point` (width, height).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// Read the character at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<char> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the character at `p`. Returns `false` (and does nothing) if `p` is
    /// outside the grid.
    pub fn set(&mut self, p: Point, ch: char) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = ch;
                true
            }
            None => false,
        }
    }

    /// Row-major iterator over `(Point, char)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds().iter(),
        }
    }

    /// Row-major positions of every cell equal to `ch`.
    pub fn positions(&self, ch: char) -> impl Iterator<Item = Point> + '_ {
        self.iter().filter(move |&(_, c)| c == ch).map(|(p, _)| p)
    }

    /// First position (row-major) holding `ch`.
    pub fn find(&self, ch: char) -> Option<Point> {
        self.positions(ch).next()
    }

    /// Iterator over rows as character slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.cells.chunks(self.width.max(1) as usize)
    }
}

/// Rows joined by `'\n'`, no trailing newline.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, char)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, char);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        self.grid.at(p).map(|ch| (p, ch))
    }
}
