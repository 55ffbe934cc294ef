//! **mazer** — solve text mazes with breadth-first search.
//!
//! A maze is a rectangle of characters: walls, open floor (space), one start
//! marker (`→`) and one end marker (`@`). [`Solver`] parses the text, runs a
//! breadth-first search from the start, reconstructs the shortest path from
//! the recorded predecessor links, and renders the path back onto the text.
//!
//! ```
//! use mazer::{Solver, SolverConfig};
//!
//! let mut solver = Solver::new("→ #\n# @", SolverConfig::default()).unwrap();
//! assert_eq!(solver.render_solution().unwrap(), "→.#\n#.@");
//! ```
//!
//! Marker characters and search behaviour are configured through
//! [`SolverConfig`]; enable the `serde` feature to load it from a file.

pub mod config;
pub mod error;
pub mod maze;
pub mod render;
pub mod solver;

pub use config::{MarkerKind, Markers, SearchMode, SolverConfig};
pub use error::{Result, SolveError};
pub use maze::{Maze, Tile};
pub use solver::{Solution, Solver};

pub use mazer_core::{Grid, Point};

#[cfg(test)]
pub(crate) mod testdata {
    /// 11x11 maze with a single start on the left edge and the end on the
    /// right edge.
    pub const SMALL_MAZE: &str = "
        ###########
        #         #
        # ##### ###
        →   #     #
        ### # ### #
        #     #   #
        # ##### ###
        # #   #   @
        # ### #####
        #         #
        ###########
    ";

    pub const SMALL_MAZE_SOLVED: &str = "\
###########
#         #
# ##### ###
→...#.....#
###.#.###.#
#  ...#...#
# #####.###
# #   #...@
# ### #####
#         #
###########";

    /// Same frame as [`SMALL_MAZE`] with an open third row; the only
    /// shortest route follows it to the right edge.
    pub const OPEN_ROW_MAZE: &str = "
        ###########
        #         #
        # ####### #
        →         #
        ### # ### #
        #     #   #
        # ##### ###
        # #   #   @
        # ### # ###
        #         #
        ###########
    ";

    pub const OPEN_ROW_MAZE_SOLVED: &str = "\
###########
#         #
# ####### #
→.........#
### # ###.#
#     #...#
# #####.###
# #   #...@
# ### # ###
#         #
###########";
}
