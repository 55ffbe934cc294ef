//! The breadth-first [`Solver`] and its cached [`Solution`].

use std::collections::HashSet;

use log::{debug, warn};
use mazer_core::{Grid, Point};
use mazer_paths::Bfs;

use crate::config::{MarkerKind, SearchMode, SolverConfig};
use crate::error::{Result, SolveError};
use crate::maze::Maze;
use crate::render;

/// A solved maze: the shortest path plus the cells the search reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    path: Vec<Point>,
    visited: HashSet<Point>,
}

impl Solution {
    /// The path from start to end, both included.
    #[inline]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Number of moves, one less than the number of cells on the path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Every cell the search discovered, start included.
    #[inline]
    pub fn visited(&self) -> &HashSet<Point> {
        &self.visited
    }
}

/// Solves one maze with breadth-first search.
///
/// The maze is fixed at construction. The first successful
/// [`solve`](Self::solve) caches its [`Solution`]; later calls return the
/// cached value without searching again. Failures are not cached.
#[derive(Debug, Clone)]
pub struct Solver {
    maze: Maze,
    config: SolverConfig,
    solution: Option<Solution>,
}

impl Solver {
    /// Parse `text` with the configured markers.
    pub fn new(text: &str, config: SolverConfig) -> Result<Self> {
        let maze = Maze::parse(text, config.markers)?;
        Ok(Self {
            maze,
            config,
            solution: None,
        })
    }

    #[inline]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    #[inline]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The cached solution, if [`solve`](Self::solve) has succeeded.
    #[inline]
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Find the shortest path from the start marker to the end marker.
    pub fn solve(&mut self) -> Result<&Solution> {
        let solution = match self.solution.take() {
            Some(cached) => cached,
            None => self.search()?,
        };
        let solution: &Solution = self.solution.insert(solution);
        Ok(solution)
    }

    /// Solve and draw the path onto a copy of the grid.
    pub fn solution_grid(&mut self) -> Result<Grid> {
        let path = self.solve()?.path().to_vec();
        Ok(render::render(self.maze.grid(), &path, self.maze.markers()))
    }

    /// Solve and return the rendered maze as text.
    pub fn render_solution(&mut self) -> Result<String> {
        Ok(render::to_text(&self.solution_grid()?))
    }

    fn endpoint(&self, kind: MarkerKind) -> Result<Point> {
        match self.maze.locate_unique(kind) {
            Err(SolveError::DuplicateMarker {
                kind,
                marker,
                first,
                second,
            }) if !self.config.strict_markers => {
                warn!("ignoring {kind} marker {marker:?} at {second}, using {first}");
                Ok(first)
            }
            other => other,
        }
    }

    fn search(&self) -> Result<Solution> {
        let start = self.endpoint(MarkerKind::Start)?;
        let end = self.endpoint(MarkerKind::End)?;
        let size = self.maze.dimensions();
        debug!(
            "solving {}x{} maze from {start} to {end} ({:?})",
            size.x, size.y, self.config.search
        );

        let mut bfs = Bfs::new(&self.maze, start);
        match self.config.search {
            SearchMode::Exhaustive => bfs.run(),
            SearchMode::StopAtEnd => {
                bfs.run_until(end);
            }
        }

        let tree = bfs.into_tree();
        let path = tree
            .path_to(end)
            .map_err(|_| SolveError::Unreachable { start, end })?;
        let visited = tree.into_visited();
        debug!(
            "found {}-step path, {} cells visited",
            path.len() - 1,
            visited.len()
        );
        Ok(Solution { path, visited })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Markers;
    use crate::testdata::{OPEN_ROW_MAZE, OPEN_ROW_MAZE_SOLVED, SMALL_MAZE, SMALL_MAZE_SOLVED};
    use mazer_paths::{distance_map, manhattan};
    use proptest::prelude::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn small() -> Solver {
        Solver::new(SMALL_MAZE, SolverConfig::default()).unwrap()
    }

    #[test]
    fn new_solver_has_no_solution() {
        let solver = small();
        assert!(solver.solution().is_none());
        assert_eq!(solver.config(), &SolverConfig::default());
    }

    #[test]
    fn solve_visits_start_corridor() {
        let mut solver = small();
        let solution = solver.solve().unwrap();
        assert!(solution.visited().contains(&p(0, 3)));
        assert!(solution.visited().contains(&p(1, 3)));
    }

    #[test]
    fn solution_contains_required_cells() {
        let mut solver = small();
        let path = solver.solve().unwrap().path().to_vec();
        for node in [p(0, 3), p(7, 5), p(7, 6), p(7, 7), p(8, 7), p(9, 7), p(10, 7)] {
            assert!(path.contains(&node), "path misses {node}");
        }
        assert_eq!(path.first(), Some(&p(0, 3)));
        assert_eq!(path.last(), Some(&p(10, 7)));
        assert_eq!(solver.solution().map(Solution::steps), Some(22));
    }

    #[test]
    fn renders_solved_maze() {
        let mut solver = small();
        assert_eq!(solver.render_solution().unwrap(), SMALL_MAZE_SOLVED);
        // The parsed maze itself is untouched.
        assert_eq!(solver.maze().node_value(p(1, 3)), Some(' '));
    }

    #[test]
    fn renders_open_row_maze() {
        let mut solver = Solver::new(OPEN_ROW_MAZE, SolverConfig::default()).unwrap();
        assert_eq!(solver.render_solution().unwrap(), OPEN_ROW_MAZE_SOLVED);
        assert_eq!(solver.solution().map(Solution::steps), Some(18));
    }

    #[test]
    fn path_marker_walls_are_rejected() {
        assert!(matches!(
            Solver::new("→ @\n...", SolverConfig::default()),
            Err(SolveError::InvalidMarkers(_))
        ));
    }

    #[test]
    fn solve_is_idempotent() {
        let mut solver = small();
        let first = solver.solve().unwrap().clone();
        let second = solver.solve().unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn early_exit_reports_same_path() {
        let mut full = small();
        let mut early = Solver::new(
            SMALL_MAZE,
            SolverConfig::default().with_search(SearchMode::StopAtEnd),
        )
        .unwrap();
        let early_solution = early.solve().unwrap().clone();
        let full_solution = full.solve().unwrap();
        assert_eq!(early_solution.path(), full_solution.path());
        assert!(early_solution.visited().len() <= full_solution.visited().len());
    }

    #[test]
    fn unreachable_end_is_an_error() {
        let mut solver = Solver::new(
            "
            #####
            #→#@#
            #####
            ",
            SolverConfig::default(),
        )
        .unwrap();
        assert_eq!(
            solver.solve().unwrap_err(),
            SolveError::Unreachable {
                start: p(1, 1),
                end: p(3, 1)
            }
        );
        assert!(solver.solution().is_none());
    }

    #[test]
    fn missing_end_is_an_error() {
        let mut solver = Solver::new("→  #", SolverConfig::default()).unwrap();
        assert!(matches!(
            solver.solve(),
            Err(SolveError::MissingMarker {
                kind: MarkerKind::End,
                ..
            })
        ));
    }

    #[test]
    fn duplicate_markers_use_first_unless_strict() {
        let text = "→ @ →";
        let mut lenient = Solver::new(text, SolverConfig::default()).unwrap();
        assert_eq!(lenient.solve().unwrap().path(), &[p(0, 0), p(1, 0), p(2, 0)]);

        let mut strict =
            Solver::new(text, SolverConfig::default().with_strict_markers(true)).unwrap();
        assert!(matches!(
            strict.solve(),
            Err(SolveError::DuplicateMarker {
                kind: MarkerKind::Start,
                ..
            })
        ));
    }

    #[test]
    fn adjacent_start_and_end() {
        let mut solver = Solver::new("→@", SolverConfig::default()).unwrap();
        assert_eq!(solver.solve().unwrap().path(), &[p(0, 0), p(1, 0)]);
        assert_eq!(solver.render_solution().unwrap(), "→@");
    }

    #[test]
    fn custom_markers_end_to_end() {
        let markers = Markers::default()
            .with_start('S')
            .with_end('E')
            .with_path('*');
        let mut solver = Solver::new(
            "
            #####
            S   #
            ### #
            E   #
            #####
            ",
            SolverConfig::default().with_markers(markers),
        )
        .unwrap();
        assert_eq!(
            solver.render_solution().unwrap(),
            "#####\nS***#\n###*#\nE***#\n#####"
        );
    }

    #[test]
    fn render_round_trip_recovers_path() {
        let mut solver = small();
        let grid = solver.solution_grid().unwrap();
        let path = solver.solve().unwrap().path().to_vec();
        let mut interior = path[1..path.len() - 1].to_vec();
        interior.sort();
        assert_eq!(render::path_cells(&grid, solver.maze().markers()), interior);
    }

    // -----------------------------------------------------------------------
    // Randomized mazes
    // -----------------------------------------------------------------------

    /// A walled rectangle with random interior walls and distinct start/end.
    fn arb_maze() -> impl Strategy<Value = String> {
        (2usize..9, 2usize..9)
            .prop_flat_map(|(w, h)| {
                let n = w * h;
                (
                    Just((w, h)),
                    proptest::collection::vec(prop::bool::weighted(0.3), n),
                    0..n,
                    0..n,
                )
            })
            .prop_filter("start and end must differ", |(_, _, s, e)| s != e)
            .prop_map(|((w, h), walls, s, e)| {
                let mut text = "#".repeat(w + 2);
                for y in 0..h {
                    text.push_str("\n#");
                    for x in 0..w {
                        let i = y * w + x;
                        text.push(if i == s {
                            '→'
                        } else if i == e {
                            '@'
                        } else if walls[i] {
                            '#'
                        } else {
                            ' '
                        });
                    }
                    text.push('#');
                }
                text.push('\n');
                text.push_str(&"#".repeat(w + 2));
                text
            })
    }

    proptest! {
        #[test]
        fn solutions_are_shortest_valid_paths(text in arb_maze()) {
            let mut solver = Solver::new(&text, SolverConfig::default()).unwrap();
            let maze = solver.maze().clone();
            let start = maze.start_coordinates().unwrap();
            let end = maze.end_coordinates().unwrap();
            let dist = distance_map(&maze, &[start], i32::MAX);

            match solver.solve().map(|s| s.path().to_vec()) {
                Ok(path) => {
                    prop_assert_eq!(path.first(), Some(&start));
                    prop_assert_eq!(path.last(), Some(&end));
                    prop_assert!(path.windows(2).all(|w| manhattan(w[0], w[1]) == 1));
                    prop_assert!(path.iter().all(|&q| maze.is_walkable(q)));
                    prop_assert_eq!(Some(&((path.len() - 1) as i32)), dist.get(&end));
                    prop_assert_eq!(solver.solve().unwrap().path(), path.as_slice());
                }
                Err(err) => {
                    prop_assert_eq!(err, SolveError::Unreachable { start, end });
                    prop_assert!(!dist.contains_key(&end));
                }
            }
        }

        #[test]
        fn early_exit_agrees_with_exhaustive(text in arb_maze()) {
            let mut full = Solver::new(&text, SolverConfig::default()).unwrap();
            let mut early = Solver::new(
                &text,
                SolverConfig::default().with_search(SearchMode::StopAtEnd),
            )
            .unwrap();
            let a = full.solve().map(|s| s.path().to_vec());
            let b = early.solve().map(|s| s.path().to_vec());
            prop_assert_eq!(a, b);
        }

        #[test]
        fn rendering_marks_exactly_the_interior(text in arb_maze()) {
            let mut solver = Solver::new(&text, SolverConfig::default()).unwrap();
            if let Ok(grid) = solver.solution_grid() {
                let path = solver.solve().unwrap().path().to_vec();
                let mut interior = path[1..path.len() - 1].to_vec();
                interior.sort();
                prop_assert_eq!(render::path_cells(&grid, solver.maze().markers()), interior);
            }
        }
    }
}
