//! A single cell of the cube and the three elementary rotations.
//!
//! Rotations move the cell to a new coordinate and cycle four of its six
//! facelets. The formulas fix which face maps to which under each axis, and
//! the solver's patterns are written against exactly this correspondence:
//!
//! - pitch (X): `(x, y, z) -> (x, z, N-y+1)`, front <- bottom <- back <- top <- front
//! - yaw (Y):   `(x, y, z) -> (N-z+1, y, x)`, front <- right <- back <- left <- front
//! - roll (Z):  `(x, y, z) -> (y, N-x+1, z)`, top <- left <- bottom <- right <- top

use crate::coordinate::Coordinate;
use crate::facelet::{Face, Facelet};
use crate::moves::Axis;

/// Position class of a cell, fixed by how many real colors it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Corner,
    Edge,
    Center,
    /// Interior cell with no visible side.
    Core,
}

/// One unit cube of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    coordinate: Coordinate,
    origin: Coordinate,
    front: Facelet,
    back: Facelet,
    left: Facelet,
    right: Facelet,
    top: Facelet,
    bottom: Facelet,
}

impl Cell {
    /// The cell found at `coordinate` on a solved cube of the given size.
    ///
    /// Front is red, back orange, left blue, right green, top yellow and
    /// bottom white; sides not on the surface get [`Facelet::None`].
    pub(crate) fn solved(coordinate: Coordinate, size: usize) -> Self {
        let paint = |on_surface: bool, color: Facelet| {
            if on_surface {
                color
            } else {
                Facelet::None
            }
        };

        Self {
            coordinate,
            origin: coordinate,
            front: paint(coordinate.z == size, Facelet::Red),
            back: paint(coordinate.z == 1, Facelet::Orange),
            left: paint(coordinate.x == 1, Facelet::Blue),
            right: paint(coordinate.x == size, Facelet::Green),
            top: paint(coordinate.y == size, Facelet::Yellow),
            bottom: paint(coordinate.y == 1, Facelet::White),
        }
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Where this cell sits on a solved cube. Stable across rotations, so it
    /// identifies the cell while it moves.
    #[inline]
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    #[inline]
    pub fn front(&self) -> Facelet {
        self.front
    }

    #[inline]
    pub fn back(&self) -> Facelet {
        self.back
    }

    #[inline]
    pub fn left(&self) -> Facelet {
        self.left
    }

    #[inline]
    pub fn right(&self) -> Facelet {
        self.right
    }

    #[inline]
    pub fn top(&self) -> Facelet {
        self.top
    }

    #[inline]
    pub fn bottom(&self) -> Facelet {
        self.bottom
    }

    pub fn facelet(&self, face: Face) -> Facelet {
        match face {
            Face::Front => self.front,
            Face::Back => self.back,
            Face::Left => self.left,
            Face::Right => self.right,
            Face::Top => self.top,
            Face::Bottom => self.bottom,
        }
    }

    /// The real colors of this cell (1 to 3 of them, none for a core cell).
    pub fn colors(&self) -> Vec<Facelet> {
        Face::ALL
            .iter()
            .map(|&face| self.facelet(face))
            .filter(|facelet| facelet.is_color())
            .collect()
    }

    pub fn kind(&self) -> CellKind {
        match self.colors().len() {
            0 => CellKind::Core,
            1 => CellKind::Center,
            2 => CellKind::Edge,
            _ => CellKind::Corner,
        }
    }

    /// Applies one +90° rotation around `axis` in a cube of the given size.
    #[inline]
    pub(crate) fn rotate(&mut self, axis: Axis, size: usize) {
        match axis {
            Axis::X => self.pitch(size),
            Axis::Y => self.yaw(size),
            Axis::Z => self.roll(size),
        }
    }

    /// Rotation around X, forward like a front flip.
    pub(crate) fn pitch(&mut self, size: usize) {
        let Coordinate { x, y, z } = self.coordinate;
        self.coordinate = Coordinate::new(x, z, size - y + 1);

        let old_front = self.front;
        self.front = self.bottom;
        self.bottom = self.back;
        self.back = self.top;
        self.top = old_front;
    }

    /// Rotation around Y, clockwise seen from above.
    pub(crate) fn yaw(&mut self, size: usize) {
        let Coordinate { x, y, z } = self.coordinate;
        self.coordinate = Coordinate::new(size - z + 1, y, x);

        let old_front = self.front;
        self.front = self.right;
        self.right = self.back;
        self.back = self.left;
        self.left = old_front;
    }

    /// Rotation around Z, clockwise seen from the front.
    pub(crate) fn roll(&mut self, size: usize) {
        let Coordinate { x, y, z } = self.coordinate;
        self.coordinate = Coordinate::new(y, size - x + 1, z);

        let old_top = self.top;
        self.top = self.left;
        self.left = self.bottom;
        self.bottom = self.right;
        self.right = old_top;
    }
}
