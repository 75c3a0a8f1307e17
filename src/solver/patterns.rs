//! Predicates telling how far along the layer method a 3×3×3 cube is.
//!
//! Coordinates follow the cube's convention: `x` grows to the right, `y`
//! upward and `z` toward the viewer, so `(3, 3, 3)` is the top front right
//! corner. Each check builds on the previous one, the last being the fully
//! solved cube.

use crate::cell::Cell;
use crate::cube::Cube;
use crate::facelet::Facelet;

/// Read access to the cells of a cube from some point of view.
pub(crate) trait View {
    /// The cell seen at `(x, y, z)`.
    fn at(&self, x: usize, y: usize, z: usize) -> Cell;
}

impl View for Cube {
    #[inline]
    fn at(&self, x: usize, y: usize, z: usize) -> Cell {
        *self.cell(x, y, z)
    }
}

/// A cube seen upside down, the way a whole cube double roll leaves it.
pub(crate) struct UpsideDown<'a>(pub &'a Cube);

impl View for UpsideDown<'_> {
    fn at(&self, x: usize, y: usize, z: usize) -> Cell {
        let size = self.0.size();
        let mut cell = *self.0.cell(size - x + 1, size - y + 1, z);
        cell.roll(size);
        cell.roll(size);
        cell
    }
}

/// Counts how many of the cell's visible sides carry one of `targets`.
///
/// Only one side per axis is looked at: front or else back, right or else
/// left, bottom or else top. On a corner that is every visible side; on an
/// edge or a center the hidden side reads [`Facelet::None`] and never counts.
pub(crate) fn matching_count(cell: &Cell, targets: &[Facelet]) -> usize {
    let pick = |first: Facelet, second: Facelet| {
        if first == Facelet::None {
            second
        } else {
            first
        }
    };

    [
        pick(cell.front(), cell.back()),
        pick(cell.right(), cell.left()),
        pick(cell.bottom(), cell.top()),
    ]
    .into_iter()
    .filter(|facelet| facelet.is_color() && targets.contains(facelet))
    .count()
}

/// True when exactly two visible sides match `first` or `second`.
pub(crate) fn matches_two(cell: &Cell, first: Facelet, second: Facelet) -> bool {
    matching_count(cell, &[first, second]) == 2
}

/// True when all three visible sides of a corner match the given colors.
pub(crate) fn matches_three(cell: &Cell, first: Facelet, second: Facelet, third: Facelet) -> bool {
    matching_count(cell, &[first, second, third]) == 3
}

/// The four top corners sit in place around the top center.
pub(crate) fn top_corners<V: View>(cube: &V) -> bool {
    let front_right = cube.at(3, 3, 3);
    let back_right = cube.at(3, 3, 1);
    let back_left = cube.at(1, 3, 1);
    let front_left = cube.at(1, 3, 3);
    let top = front_right.top();

    cube.at(2, 3, 2).top() == top
        && back_right.top() == top
        && back_right.right() == front_right.right()
        && back_left.top() == top
        && back_left.back() == back_right.back()
        && front_left.top() == top
        && front_left.left() == back_left.left()
        && front_left.front() == front_right.front()
}

/// The top layer corners and edges are all in place.
pub(crate) fn top_edges<V: View>(cube: &V) -> bool {
    if !top_corners(cube) {
        return false;
    }

    let top = cube.at(2, 3, 2).top();
    let front = cube.at(2, 3, 3);
    let right = cube.at(3, 3, 2);
    let back = cube.at(2, 3, 1);
    let left = cube.at(1, 3, 2);

    front.top() == top
        && front.front() == cube.at(3, 3, 3).front()
        && right.top() == top
        && right.right() == cube.at(3, 3, 1).right()
        && back.top() == top
        && back.back() == cube.at(1, 3, 1).back()
        && left.top() == top
        && left.left() == cube.at(1, 3, 3).left()
}

/// The side centers line up under the finished top layer.
pub(crate) fn centers_aligned<V: View>(cube: &V) -> bool {
    top_edges(cube)
        && cube.at(2, 3, 3).front() == cube.at(2, 2, 3).front()
        && cube.at(3, 3, 2).right() == cube.at(3, 2, 2).right()
        && cube.at(2, 3, 1).back() == cube.at(2, 2, 1).back()
        && cube.at(1, 3, 2).left() == cube.at(1, 2, 2).left()
}

/// The top and middle layers are solved.
pub(crate) fn middle_layer<V: View>(cube: &V) -> bool {
    if !centers_aligned(cube) {
        return false;
    }

    let front = cube.at(2, 3, 3).front();
    let right = cube.at(3, 3, 2).right();
    let back = cube.at(2, 3, 1).back();
    let left = cube.at(1, 3, 2).left();
    let (front_left, front_right) = (cube.at(1, 2, 3), cube.at(3, 2, 3));
    let (back_left, back_right) = (cube.at(1, 2, 1), cube.at(3, 2, 1));

    front_left.front() == front
        && front_right.front() == front
        && front_right.right() == right
        && back_right.right() == right
        && back_right.back() == back
        && back_left.back() == back
        && back_left.left() == left
        && front_left.left() == left
}

/// The cube is turned over with the first two layers solved underneath and
/// every top corner in its slot, whatever its twist.
pub(crate) fn corners_placed(cube: &Cube) -> bool {
    if !middle_layer(&UpsideDown(cube)) {
        return false;
    }

    let top = cube.cell(2, 3, 2).top();
    let front_right = cube.cell(3, 2, 3);
    let back_right = cube.cell(3, 2, 1);
    let back_left = cube.cell(1, 2, 1);
    let front_left = cube.cell(1, 2, 3);

    matches_three(cube.cell(3, 3, 3), top, front_right.front(), front_right.right())
        && matches_three(cube.cell(3, 3, 1), top, back_right.back(), back_right.right())
        && matches_three(cube.cell(1, 3, 1), top, back_left.back(), back_left.left())
        && matches_three(cube.cell(1, 3, 3), top, front_left.front(), front_left.left())
}

/// Top corners placed and twisted so the last layer's corners are solved.
pub(crate) fn corners_oriented(cube: &Cube) -> bool {
    corners_placed(cube) && top_corners(cube)
}

/// Every top edge sits in its slot, possibly flipped.
pub(crate) fn edges_placed(cube: &Cube) -> bool {
    if !corners_oriented(cube) {
        return false;
    }

    let top = cube.cell(2, 3, 2).top();
    matches_two(cube.cell(2, 3, 3), top, cube.cell(1, 3, 3).front())
        && matches_two(cube.cell(3, 3, 2), top, cube.cell(3, 3, 3).right())
        && matches_two(cube.cell(2, 3, 1), top, cube.cell(3, 3, 1).back())
        && matches_two(cube.cell(1, 3, 2), top, cube.cell(1, 3, 1).left())
}

/// Number of top edges that are both in their slot and correctly flipped.
pub(crate) fn solved_top_edges(cube: &Cube) -> usize {
    let top = cube.cell(2, 3, 2).top();
    let front = cube.cell(2, 3, 3);
    let right = cube.cell(3, 3, 2);
    let back = cube.cell(2, 3, 1);
    let left = cube.cell(1, 3, 2);

    [
        front.top() == top && front.front() == cube.cell(1, 3, 3).front(),
        right.top() == top && right.right() == cube.cell(3, 3, 3).right(),
        back.top() == top && back.back() == cube.cell(3, 3, 1).back(),
        left.top() == top && left.left() == cube.cell(1, 3, 1).left(),
    ]
    .into_iter()
    .filter(|&solved| solved)
    .count()
}

/// Two opposite edges flipped, front and back.
pub(crate) fn flipped_edges_h(cube: &Cube) -> bool {
    flipped_edges_right_back(cube)
        && cube.cell(1, 3, 2).top() != cube.cell(2, 3, 2).top()
        && cube.cell(2, 3, 3).top() == cube.cell(2, 3, 2).top()
}

/// Two adjacent edges flipped, front and left.
pub(crate) fn flipped_edges_fish(cube: &Cube) -> bool {
    flipped_edges_right_back(cube)
        && cube.cell(2, 3, 3).top() != cube.cell(2, 3, 2).top()
        && cube.cell(1, 3, 2).top() == cube.cell(2, 3, 2).top()
}

fn flipped_edges_right_back(cube: &Cube) -> bool {
    let top = cube.cell(2, 3, 2).top();
    edges_placed(cube) && cube.cell(3, 3, 2).top() != top && cube.cell(2, 3, 1).top() == top
}
