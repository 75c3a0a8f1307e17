//! Facelet colors and the six outer faces of the cube.

use std::fmt;

use crate::moves::Axis;

/// The color painted on one side of a cell.
///
/// [`Facelet::None`] marks a side that is not on the surface of the cube.
/// It is a placeholder, not a color: pattern matching in the solver never
/// treats it as equal to a real color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facelet {
    #[default]
    None,
    Blue,
    Red,
    Green,
    Yellow,
    White,
    Orange,
}

impl Facelet {
    /// All real colors, in declaration order.
    pub const COLORS: [Facelet; 6] = [
        Facelet::Blue,
        Facelet::Red,
        Facelet::Green,
        Facelet::Yellow,
        Facelet::White,
        Facelet::Orange,
    ];

    #[inline]
    pub const fn is_color(self) -> bool {
        !matches!(self, Facelet::None)
    }
}

impl fmt::Display for Facelet {
    /// One-letter form, e.g. `R` for red and `N` for no color.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Facelet::None => 'N',
            Facelet::Blue => 'B',
            Facelet::Red => 'R',
            Facelet::Green => 'G',
            Facelet::Yellow => 'Y',
            Facelet::White => 'W',
            Facelet::Orange => 'O',
        };
        write!(f, "{letter}")
    }
}

/// One of the six outer faces, named from the viewer's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    /// The slice (axis and index) whose cells show this face.
    pub const fn slice(self, size: usize) -> (Axis, usize) {
        match self {
            Face::Front => (Axis::Z, size),
            Face::Back => (Axis::Z, 1),
            Face::Left => (Axis::X, 1),
            Face::Right => (Axis::X, size),
            Face::Top => (Axis::Y, size),
            Face::Bottom => (Axis::Y, 1),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Face::Front => "FRONT",
            Face::Back => "BACK",
            Face::Left => "LEFT",
            Face::Right => "RIGHT",
            Face::Top => "TOP",
            Face::Bottom => "BOTTOM",
        };
        f.write_str(name)
    }
}
