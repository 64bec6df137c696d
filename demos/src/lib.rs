//! Shared pieces of the `jugs` demo: the puzzle list and path rendering.

use jugs_core::{BucketError, State};
use jugs_paths::{Algorithm, Path};

/// A two-bucket puzzle: capacities plus start and target quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub capacities: (i32, i32),
    pub start: (i32, i32),
    pub target: (i32, i32),
}

impl Default for Puzzle {
    fn default() -> Self {
        PUZZLES[0]
    }
}

/// Puzzles run by the `jugs` binary.
pub const PUZZLES: [Puzzle; 3] = [
    Puzzle {
        capacities: (4, 3),
        start: (0, 0),
        target: (2, 0),
    },
    Puzzle {
        capacities: (3, 5),
        start: (0, 0),
        target: (0, 4),
    },
    Puzzle {
        capacities: (2, 2),
        start: (0, 0),
        target: (1, 1),
    },
];

impl Puzzle {
    /// Validated root and target states.
    pub fn states(&self) -> Result<(State, State), BucketError> {
        let (ca, cb) = self.capacities;
        let root = State::with_quantities(ca, self.start.0, cb, self.start.1)?;
        let target = State::with_quantities(ca, self.target.0, cb, self.target.1)?;
        Ok((root, target))
    }

    /// Run `algo` on this puzzle.
    pub fn solve(&self, algo: &mut dyn Algorithm) -> Result<Option<Path>, BucketError> {
        let (root, target) = self.states()?;
        Ok(algo.execute(root, target))
    }
}

/// Render a search result: a not-found line, or the path length followed by
/// one state per line.
pub fn render_path(path: Option<&[State]>) -> String {
    let Some(path) = path else {
        return "The target has not been reached\n".to_string();
    };
    let mut out = format!("Path length: {}\n", path.len());
    out.extend(path.iter().map(|state| format!("{state}\n")));
    out
}

/// Solve `puzzle` with `algo` and render a titled report.
pub fn report(puzzle: &Puzzle, algo: &mut dyn Algorithm) -> Result<String, BucketError> {
    let path = puzzle.solve(algo)?;
    let stats = algo.stats();
    log::info!(
        "{}: {} expanded, {} generated",
        algo.name(),
        stats.expanded,
        stats.generated
    );
    let (ca, cb) = puzzle.capacities;
    let mut out = format!(
        "{} [{ca}, {cb}] {:?} -> {:?}\n",
        algo.name(),
        puzzle.start,
        puzzle.target
    );
    out.push_str(&render_path(path.as_deref()));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jugs_paths::{BestFirst, BreadthFirst};

    #[test]
    fn render_not_found() {
        assert_eq!(render_path(None), "The target has not been reached\n");
    }

    #[test]
    fn render_path_lines() {
        let path = vec![
            State::with_quantities(4, 0, 3, 0).unwrap(),
            State::with_quantities(4, 4, 3, 0).unwrap(),
        ];
        assert_eq!(render_path(Some(path.as_slice())), "Path length: 2\n(0, 0)\n(4, 0)\n");
    }

    #[test]
    fn render_single_state() {
        let root = State::with_quantities(4, 0, 3, 0).unwrap();
        assert_eq!(render_path(Some(&[root][..])), "Path length: 1\n(0, 0)\n");
    }

    #[test]
    fn default_puzzle() {
        let (root, target) = Puzzle::default().states().unwrap();
        assert_eq!(root.quantities(), (0, 0));
        assert_eq!(target.quantities(), (2, 0));
        assert_eq!(root.a().capacity(), 4);
        assert_eq!(root.b().capacity(), 3);
    }

    #[test]
    fn invalid_puzzle_is_rejected() {
        let puzzle = Puzzle {
            capacities: (4, 3),
            start: (0, 0),
            target: (5, 0),
        };
        assert_eq!(
            puzzle.solve(&mut BreadthFirst::new()),
            Err(BucketError::QuantityOutOfRange {
                capacity: 4,
                quantity: 5
            })
        );
    }

    #[test]
    fn report_default_puzzle() {
        let text = report(&Puzzle::default(), &mut BestFirst::new()).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("best-first [4, 3] (0, 0) -> (2, 0)"));
        assert_eq!(lines.next(), Some("Path length: 7"));
        assert_eq!(lines.last(), Some("(2, 0)"));
    }

    #[test]
    fn report_unreachable_puzzle() {
        let text = report(&PUZZLES[2], &mut BreadthFirst::new()).unwrap();
        assert!(text.ends_with("The target has not been reached\n"));
    }
}
