use std::collections::{HashMap, VecDeque};

use jugs_core::State;

use crate::path::{Path, append, remove_cycles, shortest_of};
use crate::stats::SearchStats;
use crate::traits::Algorithm;

/// Best known path to one state, tagged with the sequence number of its
/// latest insertion.
#[derive(Debug)]
struct Entry {
    seq: u64,
    path: Path,
}

/// Best-first search over whole paths.
///
/// The frontier maps each state to the best path found to it so far, with
/// at most one path per state. Paths leave the frontier in insertion order
/// (FIFO), not by length. When a path to an already queued state is found,
/// the shorter of the two is kept, the queued one winning ties, and the
/// survivor is re-queued at the back. There is no heuristic, so the result
/// is not guaranteed to be a shortest path; use
/// [`BreadthFirst`](crate::BreadthFirst) for that.
#[derive(Debug, Default)]
pub struct BestFirst {
    best: HashMap<State, Entry>,
    order: VecDeque<(u64, State)>,
    seq: u64,
    stats: SearchStats,
}

impl BestFirst {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of paths currently queued.
    pub fn frontier_len(&self) -> usize {
        self.best.len()
    }

    fn push(&mut self, path: Path) {
        let Some(&last) = path.last() else {
            return;
        };
        let seq = self.seq;
        self.seq += 1;
        self.order.push_back((seq, last));
        self.best.insert(last, Entry { seq, path });
    }

    fn pop(&mut self) -> Option<Path> {
        while let Some((seq, state)) = self.order.pop_front() {
            // Skip stale entries.
            if self.best.get(&state).is_some_and(|e| e.seq == seq) {
                return self.best.remove(&state).map(|e| e.path);
            }
        }
        None
    }

    /// Merge the extensions of `current` by `children` into the frontier.
    fn merge(&mut self, current: &[State], children: Vec<State>) {
        for child in children {
            let new_path = append(current, child);
            let kept = match self.best.remove(&child) {
                None => new_path,
                Some(other) => shortest_of(other.path, [new_path]),
            };
            self.push(kept);
        }
    }
}

impl Algorithm for BestFirst {
    fn name(&self) -> &'static str {
        "best-first"
    }

    fn execute(&mut self, root: State, target: State) -> Option<Path> {
        // Reset.
        self.best.clear();
        self.order.clear();
        self.seq = 0;
        self.stats = SearchStats::default();

        self.push(vec![root]);
        log::debug!("{}: searching {root} -> {target}", self.name());

        while let Some(current) = self.pop() {
            self.stats.expanded += 1;
            let Some(&last) = current.last() else {
                continue;
            };

            if last == target {
                log::debug!(
                    "{}: reached {target} with {} states after {} expansions",
                    self.name(),
                    current.len(),
                    self.stats.expanded
                );
                return Some(current);
            }

            let successors = last.successors();
            self.stats.generated += successors.len();
            let children = remove_cycles(successors, current.as_slice());
            log::trace!(
                "{}: expanding {last} (path {}), {} new children",
                self.name(),
                current.len(),
                children.len()
            );
            self.merge(&current, children);
        }

        log::debug!(
            "{}: {target} unreachable after {} expansions",
            self.name(),
            self.stats.expanded
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
    use std::collections::HashSet;

    fn st(ca: i32, qa: i32, cb: i32, qb: i32) -> State {
        State::with_quantities(ca, qa, cb, qb).unwrap()
    }

    #[test]
    fn four_three_expansions() {
        let mut best = BestFirst::new();
        let path = best.execute(st(4, 0, 3, 0), st(4, 2, 3, 0)).unwrap();
        assert_eq!(path.len(), 7);
        // Re-queueing the kept path on every rediscovery shapes the FIFO
        // order; leaving it in place would take 31 expansions instead.
        assert_eq!(best.stats().expanded, 27);
    }

    #[test]
    fn kept_path_wins_ties() {
        let mut best = BestFirst::new();
        let root = vec![st(4, 0, 3, 0)];
        best.push(append(&root, st(4, 4, 3, 0)));
        // Same length, different route: the queued path stays.
        best.merge(&[st(4, 1, 3, 0)], vec![st(4, 4, 3, 0)]);
        assert_eq!(best.frontier_len(), 1);
        let kept = best.pop().unwrap();
        assert_eq!(kept[0].quantities(), (0, 0));
    }

    #[test]
    fn shorter_path_replaces_queued_one() {
        let mut best = BestFirst::new();
        best.push(vec![st(4, 0, 3, 0), st(4, 0, 3, 3), st(4, 3, 3, 0)]);
        best.merge(&[st(4, 0, 3, 0)], vec![st(4, 3, 3, 0)]);
        assert_eq!(best.frontier_len(), 1);
        assert_eq!(best.pop().unwrap().len(), 2);
        assert_eq!(best.pop(), None);
    }

    #[test]
    fn requeued_path_moves_to_back() {
        let mut best = BestFirst::new();
        let a = vec![st(4, 0, 3, 0), st(4, 4, 3, 0)];
        let b = vec![st(4, 0, 3, 0), st(4, 0, 3, 3)];
        best.push(a.clone());
        best.push(b.clone());
        // Longer route to (4, 0) is dropped, but (4, 0) now queues after b.
        best.merge(&[st(4, 1, 3, 0), st(4, 2, 3, 0)], vec![st(4, 4, 3, 0)]);
        assert_eq!(best.pop(), Some(b));
        assert_eq!(best.pop(), Some(a));
    }

    #[test]
    fn paths_never_revisit() {
        let mut best = BestFirst::new();
        let path = best.execute(st(3, 0, 5, 0), st(3, 0, 5, 4)).unwrap();
        let unique: HashSet<_> = path.iter().collect();
        assert_eq!(unique.len(), path.len());
    }

    #[test]
    fn frontier_drained_when_unreachable() {
        let mut best = BestFirst::new();
        assert_eq!(best.execute(st(2, 0, 2, 0), st(2, 1, 2, 1)), None);
        assert_eq!(best.frontier_len(), 0);
    }
}
