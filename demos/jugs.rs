//! Solve the built-in water jug puzzles with both search strategies.
//!
//! Run: cargo run --bin jugs
//! Set `RUST_LOG=debug` (or `trace`) to follow the searches.

use jugs_demos::{PUZZLES, report};
use jugs_paths::{Algorithm, BestFirst, BreadthFirst};

fn main() {
    env_logger::init();

    let mut strategies: [Box<dyn Algorithm>; 2] =
        [Box::new(BreadthFirst::new()), Box::new(BestFirst::new())];

    for puzzle in &PUZZLES {
        for algo in strategies.iter_mut() {
            match report(puzzle, algo.as_mut()) {
                Ok(text) => println!("{text}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
