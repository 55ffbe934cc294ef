//! Geometry primitives: [`Point`] and [`Range`].
//!
//! A maze coordinate is a [`Point`] whose `x` is the column and `y` the row.
//! A parsed grid covers the half-open [`Range`] `[(0, 0), (width, height))`.

use std::fmt;
use std::ops::Add;

/// A maze coordinate. X grows right (columns), Y grows down (rows).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Unit offsets in expansion order: west, east, south, north.
    pub const CARDINALS: [Point; 4] = [
        Point::new(-1, 0),
        Point::new(1, 0),
        Point::new(0, 1),
        Point::new(0, -1),
    ];

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four cardinal neighbours in [`CARDINALS`](Self::CARDINALS) order.
    /// No bounds checking is done.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        Self::CARDINALS.map(|d| self + d)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major: rows first, then columns. Sorting path cells with it matches
/// the order a grid scan finds them in.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// A half-open rectangle \[min, max).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Build a range from two corners, swapping coordinates as needed so
    /// that `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Row-major iterator over every point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let r = self.range;
        if r.min.x >= r.max.x || self.cur.y >= r.max.y {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= r.max.x {
            self.cur.x = r.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }
}
