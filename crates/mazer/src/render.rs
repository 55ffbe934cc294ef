//! Drawing a solution path back onto the maze text.

use mazer_core::{Grid, Point};

use crate::config::Markers;

/// Copy `grid` and overwrite every cell strictly between the first and last
/// point of `path` with the path marker. The endpoints keep their characters.
pub fn render(grid: &Grid, path: &[Point], markers: &Markers) -> Grid {
    let mut canvas = grid.clone();
    if let [_, interior @ .., _] = path {
        for &p in interior {
            canvas.set(p, markers.path);
        }
    }
    canvas
}

/// Rows joined by newlines, with surrounding whitespace trimmed.
pub fn to_text(grid: &Grid) -> String {
    grid.to_string().trim().to_string()
}

/// Row-major positions of every path marker in a rendered grid.
pub fn path_cells(grid: &Grid, markers: &Markers) -> Vec<Point> {
    grid.positions(markers.path).collect()
}
