//! Rubik's Cube Library
//!
//! Models an N×N×N twisty cube as a list of cells that move with each slice
//! rotation, and solves the 3×3×3 case with a layer by layer method.
//!
//! ```
//! use rubiks::Puzzle;
//!
//! let mut puzzle = Puzzle::new(3);
//! puzzle.shuffle_with(&mut fastrand::Rng::with_seed(1), 20);
//! puzzle.solve().unwrap();
//! while puzzle.move_to_next_position() {}
//! assert!(puzzle.is_solved());
//! ```

pub mod cell;
pub mod coordinate;
pub mod cube;
pub mod facelet;
pub mod moves;
pub mod path;
pub mod puzzle;
pub mod solver;

pub use cell::{Cell, CellKind};
pub use coordinate::Coordinate;
pub use cube::Cube;
pub use facelet::{Face, Facelet};
pub use moves::{format_moves, parse_moves, Axis, DefinedMove, Move, ParseMoveError, Target};
pub use path::SolvingPath;
pub use puzzle::Puzzle;
pub use solver::{optimize, Phase, SolveError, Solver};
