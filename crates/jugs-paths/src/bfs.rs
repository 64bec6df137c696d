use std::collections::HashSet;

use jugs_core::State;

use crate::node::{Node, backtrack};
use crate::path::Path;
use crate::stats::SearchStats;
use crate::traits::Algorithm;

/// Breadth-first search with parent-link backtracking.
///
/// Every discovered node is appended to an arena and never removed; a cursor
/// slides over the arena in discovery order, which is level order. Each
/// state enters the arena at most once, so the returned path has the
/// fewest possible moves.
#[derive(Debug, Default)]
pub struct BreadthFirst {
    discovered: Vec<Node>,
    seen: HashSet<State>,
    cursor: usize,
    stats: SearchStats,
}

impl BreadthFirst {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes discovered by the last search, in discovery order.
    pub fn discovered(&self) -> &[Node] {
        &self.discovered
    }
}

impl Algorithm for BreadthFirst {
    fn name(&self) -> &'static str {
        "breadth-first"
    }

    fn execute(&mut self, root: State, target: State) -> Option<Path> {
        // Reset.
        self.discovered.clear();
        self.seen.clear();
        self.cursor = 0;
        self.stats = SearchStats::default();

        self.discovered.push(Node::root(root));
        self.seen.insert(root);
        log::debug!("{}: searching {root} -> {target}", self.name());

        while self.cursor < self.discovered.len() {
            let ci = self.cursor;
            self.cursor += 1;
            let current = self.discovered[ci];
            self.stats.expanded += 1;

            if current.state() == target {
                let path = backtrack(&self.discovered, ci);
                log::debug!(
                    "{}: reached {target} at depth {} after {} expansions",
                    self.name(),
                    current.depth(),
                    self.stats.expanded
                );
                return Some(path);
            }

            log::trace!(
                "{}: expanding {} (depth {})",
                self.name(),
                current.state(),
                current.depth()
            );
            for child in current.breed(ci) {
                self.stats.generated += 1;
                if self.seen.insert(child.state()) {
                    self.discovered.push(child);
                }
            }
        }

        log::debug!(
            "{}: {target} unreachable, {} states explored",
            self.name(),
            self.discovered.len()
        );
        None
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn st(ca: i32, qa: i32, cb: i32, qb: i32) -> State {
        State::with_quantities(ca, qa, cb, qb).unwrap()
    }

    #[test]
    fn shortest_four_three() {
        let mut bfs = BreadthFirst::new();
        let path = bfs.execute(st(4, 0, 3, 0), st(4, 2, 3, 0)).unwrap();
        assert_eq!(path.len(), 7);
        assert_eq!(
            bfs.stats(),
            SearchStats {
                expanded: 14,
                generated: 78
            }
        );
    }

    #[test]
    fn levels_are_non_decreasing() {
        let mut bfs = BreadthFirst::new();
        bfs.execute(st(5, 0, 3, 0), st(5, 4, 3, 0)).unwrap();
        let depths: Vec<_> = bfs.discovered().iter().map(Node::depth).collect();
        assert!(depths.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(depths[0], 0);
    }

    #[test]
    fn each_state_discovered_once() {
        let mut bfs = BreadthFirst::new();
        assert!(bfs.execute(st(3, 0, 5, 0), st(3, 3, 5, 5)).is_some());
        let unique: HashSet<State> = bfs.discovered().iter().map(|n| n.state()).collect();
        assert_eq!(unique.len(), bfs.discovered().len());
    }

    #[test]
    fn exhausts_reachable_set_when_unreachable() {
        let mut bfs = BreadthFirst::new();
        assert_eq!(bfs.execute(st(2, 0, 2, 0), st(2, 1, 2, 1)), None);
        // (0,0), (2,0), (0,2), (2,2)
        assert_eq!(bfs.discovered().len(), 4);
        assert_eq!(bfs.stats().expanded, 4);
    }

    #[test]
    fn parents_point_backwards() {
        let mut bfs = BreadthFirst::new();
        bfs.execute(st(4, 0, 3, 0), st(4, 2, 3, 0));
        for (i, node) in bfs.discovered().iter().enumerate().skip(1) {
            let p = node.parent().unwrap();
            assert!(p < i);
            assert_eq!(bfs.discovered()[p].depth() + 1, node.depth());
        }
    }
}
