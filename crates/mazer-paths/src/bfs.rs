use std::collections::{HashMap, HashSet, VecDeque};

use log::trace;
use mazer_core::Point;

use crate::traits::Pather;
use crate::tree::SearchTree;

/// A single breadth-first traversal from one root.
///
/// All traversal state (frontier, visited set, predecessor links) is owned by
/// the `Bfs` value, so each search starts fresh and nothing leaks between
/// searches. Drive it one node at a time with [`step`](Self::step), or to
/// completion with [`run`](Self::run) / [`run_until`](Self::run_until), then
/// call [`into_tree`](Self::into_tree) to reconstruct paths.
pub struct Bfs<'a, P: Pather> {
    pather: &'a P,
    root: Point,
    frontier: VecDeque<Point>,
    visited: HashSet<Point>,
    predecessors: HashMap<Point, Point>,
    // scratch buffer for neighbor queries
    nbuf: Vec<Point>,
}

impl<'a, P: Pather> Bfs<'a, P> {
    /// Start a traversal at `root`. The root is enqueued and visited, and has
    /// no predecessor.
    pub fn new(pather: &'a P, root: Point) -> Self {
        let mut frontier = VecDeque::new();
        frontier.push_back(root);
        Self {
            pather,
            root,
            frontier,
            visited: HashSet::from([root]),
            predecessors: HashMap::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Record that `to` was reached from `from`.
    ///
    /// If `to` was already visited nothing changes and `false` is returned;
    /// otherwise `to` is marked visited, its predecessor is set to `from` and
    /// it is enqueued. A predecessor, once set, is never overwritten.
    pub fn discover(&mut self, to: Point, from: Point) -> bool {
        if !self.visited.insert(to) {
            return false;
        }
        self.predecessors.insert(to, from);
        self.frontier.push_back(to);
        true
    }

    /// Expand the node at the front of the frontier.
    ///
    /// Returns the expanded point, or `None` once the frontier is empty.
    pub fn step(&mut self) -> Option<Point> {
        let current = self.frontier.pop_front()?;

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.pather.neighbors(current, &mut nbuf);
        for &np in nbuf.iter() {
            self.discover(np, current);
        }
        self.nbuf = nbuf;

        trace!(
            "expanded {current}, frontier {}, visited {}",
            self.frontier.len(),
            self.visited.len()
        );
        Some(current)
    }

    /// Explore the whole component reachable from the root.
    pub fn run(&mut self) {
        while self.step().is_some() {}
    }

    /// Explore until `goal` has been discovered or the frontier runs dry.
    ///
    /// Returns whether `goal` was reached. Stopping early does not change the
    /// predecessor recorded for `goal`.
    pub fn run_until(&mut self, goal: Point) -> bool {
        while !self.visited.contains(&goal) {
            if self.step().is_none() {
                return false;
            }
        }
        true
    }

    /// Whether the frontier is empty.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Whether `p` has been discovered.
    #[inline]
    pub fn is_visited(&self, p: Point) -> bool {
        self.visited.contains(&p)
    }

    /// All discovered points.
    pub fn visited(&self) -> &HashSet<Point> {
        &self.visited
    }

    /// The point `p` was first reached from. `None` for the root and for
    /// undiscovered points.
    pub fn predecessor(&self, p: Point) -> Option<Point> {
        self.predecessors.get(&p).copied()
    }

    /// Finish the traversal, keeping only what path reconstruction needs.
    pub fn into_tree(self) -> SearchTree {
        SearchTree::new(self.root, self.predecessors, self.visited)
    }
}

/// Compute a multi-source breadth-first search distance map.
///
/// Each step has cost 1. Expansion stops when the distance would exceed
/// `max_dist`. The returned map holds every reached point with its distance
/// to the nearest source.
pub fn distance_map<P: Pather>(pather: &P, sources: &[Point], max_dist: i32) -> HashMap<Point, i32> {
    let mut dist: HashMap<Point, i32> = HashMap::new();
    let mut queue: VecDeque<Point> = VecDeque::new();

    for &src in sources {
        if dist.contains_key(&src) {
            continue;
        }
        dist.insert(src, 0);
        queue.push_back(src);
    }

    let mut nbuf = Vec::with_capacity(4);

    while let Some(cp) = queue.pop_front() {
        let nd = dist[&cp] + 1;
        if nd > max_dist {
            continue;
        }

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            if dist.contains_key(&np) {
                continue;
            }
            dist.insert(np, nd);
            queue.push_back(np);
        }
    }

    dist
}
