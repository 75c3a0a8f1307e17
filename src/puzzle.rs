//! The live cube together with the solving path computed for it.

use log::{debug, warn};

use crate::cell::Cell;
use crate::cube::Cube;
use crate::facelet::Face;
use crate::moves::{Axis, DefinedMove};
use crate::path::SolvingPath;
use crate::solver::{SolveError, Solver};

/// A cube that can be scrambled by hand or at random, then solved step by step.
///
/// The solving path is computed against the cube's state at the time of the
/// solve. Moves applied outside that path ([`Puzzle::manual_move`],
/// [`Puzzle::shuffle`], [`Puzzle::reset`]) discard it.
#[derive(Debug, Clone)]
pub struct Puzzle {
    cube: Cube,
    path: Option<SolvingPath>,
    optimize: bool,
}

impl Puzzle {
    pub fn new(size: usize) -> Self {
        Self {
            cube: Cube::new(size),
            path: None,
            optimize: false,
        }
    }

    /// Restores the solved state and drops any solving path.
    pub fn reset(&mut self) {
        self.cube.reset();
        self.discard_path();
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cube.size()
    }

    #[inline]
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// Whether solving paths get optimized. Off by default.
    pub fn set_optimizer(&mut self, optimize: bool) {
        self.optimize = optimize;
    }

    /// Applies a move without touching the solving path.
    pub fn apply_move(&mut self, mv: DefinedMove) {
        self.cube.apply_move(mv);
    }

    pub fn apply_moves<I>(&mut self, moves: I)
    where
        I: IntoIterator<Item = DefinedMove>,
    {
        self.cube.apply_moves(moves);
    }

    /// Applies a move chosen by the user, which invalidates the solving path.
    pub fn manual_move(&mut self, mv: DefinedMove) {
        self.cube.apply_move(mv);
        self.discard_path();
    }

    /// Scrambles the cube with `count` random moves and drops the solving path.
    pub fn shuffle(&mut self, count: usize) -> Vec<DefinedMove> {
        let moves = self.cube.shuffle(count);
        self.discard_path();
        moves
    }

    /// Same as [`Puzzle::shuffle`] with an explicit generator.
    pub fn shuffle_with(&mut self, rng: &mut fastrand::Rng, count: usize) -> Vec<DefinedMove> {
        let moves = self.cube.shuffle_with(rng, count);
        self.discard_path();
        moves
    }

    /// Computes a solving path for the current state, replacing any previous one.
    ///
    /// Returns the path length. The live cube is not moved; replay the path
    /// with [`Puzzle::move_to_next_position`]. On error no path is kept.
    pub fn solve(&mut self) -> Result<usize, SolveError> {
        self.path = None;
        match Solver::new(&self.cube).with_optimizer(self.optimize).solve() {
            Ok(path) => {
                let total = path.total();
                self.path = Some(path);
                Ok(total)
            }
            Err(err) => {
                warn!("no solving path: {err}");
                Err(err)
            }
        }
    }

    /// The path computed by the last solve, if it has not been discarded.
    pub fn solving_path(&self) -> Option<&SolvingPath> {
        self.path.as_ref()
    }

    /// Pops the next move of the solving path without applying it.
    ///
    /// Returns `None` once the path is exhausted, at which point the path is
    /// discarded so that a later solve starts from the live state.
    pub fn next_move(&mut self) -> Option<DefinedMove> {
        let next = self.path.as_mut().and_then(|path| path.next());
        if next.is_none() {
            self.discard_path();
        }
        next
    }

    /// Applies the next move of the solving path, solving first if there is
    /// no path yet. Returns false when there was no move to apply.
    pub fn move_to_next_position(&mut self) -> bool {
        if self.path.is_none() {
            debug!("no solving path computed yet, solving");
            if self.solve().is_err() {
                return false;
            }
        }

        match self.next_move() {
            Some(mv) => {
                self.cube.apply_move(mv);
                true
            }
            None => false,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.cube.is_solved()
    }

    pub fn cell_at(&self, x: usize, y: usize, z: usize) -> Option<&Cell> {
        self.cube.cell_at(x, y, z)
    }

    pub fn cells_on_slice(&self, index: usize, axis: Axis) -> Vec<&Cell> {
        self.cube.cells_on_slice(index, axis)
    }

    pub fn face(&self, face: Face) -> Vec<&Cell> {
        self.cube.face(face)
    }

    fn discard_path(&mut self) {
        if self.path.take().is_some() {
            debug!("solving path discarded");
        }
    }
}
