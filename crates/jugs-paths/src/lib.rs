//! Path search over two-bucket water jug states.
//!
//! Two interchangeable strategies implement [`Algorithm`]:
//!
//! - **Breadth-first** ([`BreadthFirst`]) expands states level by level and
//!   rebuilds the path from parent links. Returned paths have the fewest
//!   possible steps.
//! - **Best-first** ([`BestFirst`]) keeps whole candidate paths in a FIFO
//!   frontier holding at most one path per state, replacing a path only when
//!   a strictly shorter one to the same state shows up. It carries no
//!   heuristic and is not guaranteed to return a shortest path.
//!
//! Both own their working storage and reset it at the start of every
//! [`Algorithm::execute`] call, so one instance can be reused across
//! searches (but not shared between concurrent ones).
//!
//! # Building blocks
//!
//! | Item | Role |
//! |---|---|
//! | [`Node`] | state + parent handle + depth, breeds six successors |
//! | [`remove_cycles`] | drops successors already in a path or visited set |
//! | [`append`] | extends a path without touching the original |
//! | [`find_shortest`] / [`shortest_of`] | first path of minimal length |

mod best_first;
mod bfs;
mod node;
mod path;
mod stats;
mod traits;

pub use best_first::BestFirst;
pub use bfs::BreadthFirst;
pub use node::Node;
pub use path::{Path, PathError, append, find_shortest, remove_cycles, shortest_of};
pub use stats::SearchStats;
pub use traits::{Algorithm, Visited};
