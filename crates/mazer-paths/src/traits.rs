use mazer_core::Point;

/// Neighbor enumeration for a searchable grid.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    ///
    /// The order in which neighbors are appended decides which of several
    /// equally short paths a search reports, so it must be deterministic.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

