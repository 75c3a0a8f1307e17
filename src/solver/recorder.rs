//! Applies moves to the working cube while recording them into the path.

use crate::cube::Cube;
use crate::moves::{DefinedMove, Move};

/// How many turns a probe makes before giving up.
const MAX_PROBES: usize = 3;

/// Working cube plus the moves played on it during one phase step.
pub(crate) struct Recorder<'a> {
    cube: &'a mut Cube,
    moves: Vec<DefinedMove>,
}

impl<'a> Recorder<'a> {
    pub fn new(cube: &'a mut Cube) -> Self {
        Self {
            cube,
            moves: Vec::new(),
        }
    }

    #[inline]
    pub fn cube(&self) -> &Cube {
        self.cube
    }

    /// Plays a single move on the slice at `index`.
    pub fn turn(&mut self, kind: Move, index: usize) {
        self.apply(DefinedMove::at(kind, index));
    }

    /// Reorients the whole cube.
    pub fn turn_cube(&mut self, kind: Move) {
        self.apply(DefinedMove::whole(kind));
    }

    /// Plays a fixed algorithm.
    pub fn play(&mut self, algorithm: &[DefinedMove]) {
        for &mv in algorithm {
            self.apply(mv);
        }
    }

    /// Turns with `mv` until `found` holds, at most three times.
    ///
    /// Returns true on a match, leaving the probing turns in the path. When
    /// nothing matched, a fourth turn in the same direction brings the slice
    /// back to where it started and the three probing turns are dropped from
    /// the path.
    pub fn probe<F>(&mut self, mv: DefinedMove, found: F) -> bool
    where
        F: Fn(&Cube) -> bool,
    {
        for attempt in 0..=MAX_PROBES {
            if found(self.cube) {
                return true;
            }
            if attempt < MAX_PROBES {
                self.apply(mv);
            }
        }

        self.cube.apply_move(mv);
        self.moves.truncate(self.moves.len() - MAX_PROBES);
        false
    }

    pub fn into_moves(self) -> Vec<DefinedMove> {
        self.moves
    }

    fn apply(&mut self, mv: DefinedMove) {
        self.cube.apply_move(mv);
        self.moves.push(mv);
    }
}
