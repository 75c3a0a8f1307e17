//! Cell coordinates inside an N×N×N cube.
//!
//! Coordinates are 1-based on every axis:
//!
//! ```text
//!        y ^
//!          |
//!          +----> x
//!         /
//!      z v        (z = N is the front face)
//! ```
//!
//! The canonical order sorts by z first, then y, then x. The cube keeps its
//! cells in that order, which makes a cell's position in the list a pure
//! function of its coordinate (see [`Coordinate::to_index`]).

use std::cmp::Ordering;
use std::fmt;

use crate::moves::Axis;

/// A position inside the cube, each component in `1..=size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Returns the component selected by `axis`.
    #[inline]
    pub const fn along(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Returns true if every component lies in `1..=size`.
    #[inline]
    pub const fn is_within(&self, size: usize) -> bool {
        self.x >= 1
            && self.x <= size
            && self.y >= 1
            && self.y <= size
            && self.z >= 1
            && self.z <= size
    }

    /// Position of this coordinate in a canonically sorted list of `size³` cells.
    ///
    /// Index order is z-major: `idx = (z-1)·size² + (y-1)·size + (x-1)`.
    #[inline(always)]
    pub const fn to_index(&self, size: usize) -> usize {
        (self.z - 1) * size * size + (self.y - 1) * size + (self.x - 1)
    }

    /// Inverse of [`Coordinate::to_index`].
    #[inline(always)]
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            x: index % size + 1,
            y: (index / size) % size + 1,
            z: index / (size * size) + 1,
        }
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.z, self.y, self.x).cmp(&(other.z, other.y, other.x))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X{}Y{}Z{}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_is_z_then_y_then_x() {
        let mut coords = vec![
            Coordinate::new(1, 1, 2),
            Coordinate::new(2, 1, 1),
            Coordinate::new(1, 2, 1),
            Coordinate::new(1, 1, 1),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(1, 1, 1),
                Coordinate::new(2, 1, 1),
                Coordinate::new(1, 2, 1),
                Coordinate::new(1, 1, 2),
            ]
        );
    }

    #[test]
    fn test_index_conversion_roundtrip_3x3x3() {
        for idx in 0..27 {
            let coord = Coordinate::from_index(idx, 3);
            assert!(coord.is_within(3), "from_index({idx}) produced {coord}");
            assert_eq!(coord.to_index(3), idx, "Roundtrip failed for index {idx}");
        }
    }

    #[test]
    fn test_index_follows_canonical_order_4x4x4() {
        let coords: Vec<Coordinate> = (0..64).map(|idx| Coordinate::from_index(idx, 4)).collect();
        let mut sorted = coords.clone();
        sorted.sort();
        assert_eq!(coords, sorted);
    }

    #[test]
    fn test_bounds() {
        assert!(Coordinate::new(1, 3, 2).is_within(3));
        assert!(!Coordinate::new(0, 1, 1).is_within(3));
        assert!(!Coordinate::new(1, 4, 1).is_within(3));
    }
}
