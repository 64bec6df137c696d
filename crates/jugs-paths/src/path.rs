//! Helpers for paths: ordered sequences of states from the root onward.

use std::fmt;

use jugs_core::State;

use crate::traits::Visited;

/// States from the root to the current frontier entry, root first.
pub type Path = Vec<State>;

/// Keep the candidates whose state does not appear in `excluded`.
///
/// Surviving candidates keep their relative order.
pub fn remove_cycles<V>(candidates: impl IntoIterator<Item = State>, excluded: &V) -> Vec<State>
where
    V: Visited + ?Sized,
{
    candidates
        .into_iter()
        .filter(|s| !excluded.contains_state(s))
        .collect()
}

/// A new path made of `path` followed by `state`. `path` is left untouched.
pub fn append(path: &[State], state: State) -> Path {
    let mut next = Vec::with_capacity(path.len() + 1);
    next.extend_from_slice(path);
    next.push(state);
    next
}

/// The first path of minimal length among `first` and `rest`.
///
/// Ties go to the earliest path, so `first` wins against any equally long
/// candidate.
pub fn shortest_of<P: AsRef<[State]>>(first: P, rest: impl IntoIterator<Item = P>) -> P {
    let mut shortest = first;
    for p in rest {
        if p.as_ref().len() < shortest.as_ref().len() {
            shortest = p;
        }
    }
    shortest
}

/// The first path of minimal length in `paths`.
///
/// Returns [`PathError::EmptyCollection`] when `paths` is empty.
pub fn find_shortest<P: AsRef<[State]>>(paths: impl IntoIterator<Item = P>) -> Result<P, PathError> {
    let mut it = paths.into_iter();
    let first = it.next().ok_or(PathError::EmptyCollection)?;
    Ok(shortest_of(first, it))
}

/// Errors raised by the path helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Shortest-path selection was asked to choose among no paths.
    EmptyCollection,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCollection => write!(f, "cannot select a shortest path from no paths"),
        }
    }
}

impl std::error::Error for PathError {}
