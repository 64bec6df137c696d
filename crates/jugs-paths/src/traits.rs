use std::collections::HashSet;

use jugs_core::State;

use crate::node::Node;
use crate::path::Path;
use crate::stats::SearchStats;

/// A path search strategy.
///
/// Implementations own their working storage and reset it at the start of
/// every call, so a single instance can run any number of searches one
/// after another.
pub trait Algorithm {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Search for a path from `root` to `target`.
    ///
    /// Returns the states from `root` to `target` inclusive, or `None` if
    /// the target cannot be reached. A found path always contains at least
    /// the root.
    fn execute(&mut self, root: State, target: State) -> Option<Path>;

    /// Counters for the most recent [`execute`](Self::execute) call.
    fn stats(&self) -> SearchStats;
}

/// A collection that can tell whether a state was already seen.
pub trait Visited {
    fn contains_state(&self, state: &State) -> bool;
}

impl Visited for [State] {
    fn contains_state(&self, state: &State) -> bool {
        self.contains(state)
    }
}

impl Visited for Vec<State> {
    fn contains_state(&self, state: &State) -> bool {
        self.as_slice().contains_state(state)
    }
}

impl Visited for [Node] {
    fn contains_state(&self, state: &State) -> bool {
        self.iter().any(|n| n.state() == *state)
    }
}

impl Visited for HashSet<State> {
    fn contains_state(&self, state: &State) -> bool {
        self.contains(state)
    }
}
