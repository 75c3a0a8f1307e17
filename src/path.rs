//! Playback of a computed solution, one move at a time.

use log::debug;

use crate::moves::DefinedMove;

/// The ordered moves of one solve, consumed front to back.
///
/// A path cannot be rewound: once drained it is gone, and the only way to
/// get a new one is to solve again.
#[derive(Debug, Clone)]
pub struct SolvingPath {
    moves: std::vec::IntoIter<DefinedMove>,
    total: usize,
}

impl SolvingPath {
    pub(crate) fn new(moves: Vec<DefinedMove>) -> Self {
        let total = moves.len();
        Self {
            moves: moves.into_iter(),
            total,
        }
    }

    /// Number of moves the path held when it was computed.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of moves already handed out.
    pub fn played(&self) -> usize {
        self.total - self.moves.len()
    }

    /// Moves not yet handed out, in order.
    pub fn remaining(&self) -> &[DefinedMove] {
        self.moves.as_slice()
    }

    pub fn is_finished(&self) -> bool {
        self.moves.len() == 0
    }
}

impl Iterator for SolvingPath {
    type Item = DefinedMove;

    fn next(&mut self) -> Option<DefinedMove> {
        let step = self.played() + 1;
        let next = self.moves.next()?;
        debug!("solving path step {step} on {}: {next}", self.total);
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.moves.size_hint()
    }
}

impl ExactSizeIterator for SolvingPath {}

impl std::iter::FusedIterator for SolvingPath {}
