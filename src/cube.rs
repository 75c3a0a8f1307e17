//! The cube aggregate: N³ cells kept in canonical coordinate order.
//!
//! Every mutation goes through [`Cube::apply_move`]. After each elementary
//! slice rotation the cell list is re-sorted, so for any coordinate `c` the
//! cell at `c` lives at index `c.to_index(size)`. Slice and face extraction
//! rely on this ordering: a face's cells come out row by row.

use log::{trace, warn};

use crate::cell::Cell;
use crate::coordinate::Coordinate;
use crate::facelet::{Face, Facelet};
use crate::moves::{Axis, DefinedMove, Move, Target};

/// Smallest supported cube edge length.
pub const MIN_SIZE: usize = 2;

/// An N×N×N twisty cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    size: usize,
    cells: Vec<Cell>,
}

impl Cube {
    /// Creates a solved cube. Sizes below [`MIN_SIZE`] are clamped with a warning.
    pub fn new(size: usize) -> Self {
        let size = if size < MIN_SIZE {
            warn!("cube size cannot be less than {MIN_SIZE} (got {size}), forcing {MIN_SIZE}");
            MIN_SIZE
        } else {
            size
        };

        Self {
            size,
            cells: solved_cells(size),
        }
    }

    /// Restores the solved configuration.
    pub fn reset(&mut self) {
        self.cells = solved_cells(self.size);
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in canonical order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at the given coordinate, or `None` (with a warning) if out of range.
    pub fn cell_at(&self, x: usize, y: usize, z: usize) -> Option<&Cell> {
        let coordinate = Coordinate::new(x, y, z);
        if !coordinate.is_within(self.size) {
            warn!(
                "cannot get cell at x={x}, y={y}, z={z}: allowed coordinates are in [1-{}]",
                self.size
            );
            return None;
        }
        Some(self.cell(x, y, z))
    }

    /// Unchecked lookup for callers that already know the coordinate is valid.
    #[inline]
    pub(crate) fn cell(&self, x: usize, y: usize, z: usize) -> &Cell {
        let cell = &self.cells[Coordinate::new(x, y, z).to_index(self.size)];
        debug_assert_eq!(cell.coordinate(), Coordinate::new(x, y, z));
        cell
    }

    /// Finds a cell by the coordinate it occupies on a solved cube.
    pub fn cell_from(&self, origin: Coordinate) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.origin() == origin)
    }

    /// Cells whose `axis` component equals `index`, in canonical order.
    ///
    /// Returns an empty list (with a warning) when `index` is outside `1..=size`.
    pub fn cells_on_slice(&self, index: usize, axis: Axis) -> Vec<&Cell> {
        if !self.check_index(index, axis) {
            return Vec::new();
        }
        self.cells
            .iter()
            .filter(|cell| cell.coordinate().along(axis) == index)
            .collect()
    }

    /// The N² cells showing `face`, row by row.
    pub fn face(&self, face: Face) -> Vec<&Cell> {
        let (axis, index) = face.slice(self.size);
        self.cells_on_slice(index, axis)
    }

    /// The colors painted on `face`, in the same order as [`Cube::face`].
    pub fn face_colors(&self, face: Face) -> Vec<Facelet> {
        self.face(face)
            .into_iter()
            .map(|cell| cell.facelet(face))
            .collect()
    }

    pub fn front(&self) -> Vec<&Cell> {
        self.face(Face::Front)
    }

    pub fn back(&self) -> Vec<&Cell> {
        self.face(Face::Back)
    }

    pub fn left(&self) -> Vec<&Cell> {
        self.face(Face::Left)
    }

    pub fn right(&self) -> Vec<&Cell> {
        self.face(Face::Right)
    }

    pub fn top(&self) -> Vec<&Cell> {
        self.face(Face::Top)
    }

    pub fn bottom(&self) -> Vec<&Cell> {
        self.face(Face::Bottom)
    }

    /// True when each of the six faces shows a single color.
    pub fn is_solved(&self) -> bool {
        Face::ALL.iter().all(|&face| {
            let colors = self.face_colors(face);
            colors.windows(2).all(|pair| pair[0] == pair[1])
        })
    }

    /// Applies one move to its slice, or to every slice for a whole-cube move.
    ///
    /// An out-of-range slice index is reported and leaves the cube unchanged.
    pub fn apply_move(&mut self, mv: DefinedMove) {
        match mv.target {
            Target::Slice(index) => self.turn_slice(mv.kind, index),
            Target::WholeCube => {
                for index in 1..=self.size {
                    self.turn_slice(mv.kind, index);
                }
            }
        }
    }

    /// Applies moves in order.
    pub fn apply_moves<I>(&mut self, moves: I)
    where
        I: IntoIterator<Item = DefinedMove>,
    {
        for mv in moves {
            self.apply_move(mv);
        }
    }

    /// Scrambles the cube with `count` random moves from the thread-local generator.
    ///
    /// Returns the moves applied.
    pub fn shuffle(&mut self, count: usize) -> Vec<DefinedMove> {
        self.shuffle_with(&mut fastrand::Rng::new(), count)
    }

    /// Scrambles the cube with `count` moves drawn from `rng`.
    ///
    /// Each move kind is uniform over all nine moves and each slice index
    /// uniform over `1..=size`.
    pub fn shuffle_with(&mut self, rng: &mut fastrand::Rng, count: usize) -> Vec<DefinedMove> {
        let moves: Vec<DefinedMove> = (0..count)
            .map(|_| {
                let kind = Move::ALL[rng.usize(..Move::ALL.len())];
                DefinedMove::at(kind, rng.usize(1..=self.size))
            })
            .collect();

        self.apply_moves(moves.iter().copied());
        moves
    }

    /// Rotates one slice by the move's number of quarter turns.
    ///
    /// The inverse moves really are three forward quarter turns, so
    /// `UNPITCH` and `PITCH` x3 yield identical states by construction.
    fn turn_slice(&mut self, kind: Move, index: usize) {
        let axis = kind.axis();
        if !self.check_index(index, axis) {
            return;
        }

        for _ in 0..kind.quarter_turns() {
            self.rotate_slice(axis, index);
        }
    }

    /// One +90° rotation of a slice, followed by re-sorting the cells.
    fn rotate_slice(&mut self, axis: Axis, index: usize) {
        trace!("rotating slice {index} around {axis:?}");

        let size = self.size;
        for cell in self
            .cells
            .iter_mut()
            .filter(|cell| cell.coordinate().along(axis) == index)
        {
            cell.rotate(axis, size);
        }

        self.cells.sort_unstable_by_key(|cell| cell.coordinate());
    }

    fn check_index(&self, index: usize, axis: Axis) -> bool {
        let valid = (1..=self.size).contains(&index);
        if !valid {
            warn!(
                "slice {index} on {axis:?} axis does not exist: allowed indexes are in [1-{}]",
                self.size
            );
        }
        valid
    }
}

/// Builds the N³ cells of a solved cube in canonical order.
fn solved_cells(size: usize) -> Vec<Cell> {
    (0..size * size * size)
        .map(|index| Cell::solved(Coordinate::from_index(index, size), size))
        .collect()
}
