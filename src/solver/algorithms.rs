//! Fixed move sequences played by the layer phases.
//!
//! Slice indices assume a 3×3×3 cube with the working face toward the
//! viewer: index 1 is the left/bottom/back slice, 3 the right/top/front one.

use crate::moves::{DefinedMove, Move};

const fn pitch(index: usize) -> DefinedMove {
    DefinedMove::at(Move::Pitch, index)
}

const fn unpitch(index: usize) -> DefinedMove {
    DefinedMove::at(Move::Unpitch, index)
}

const fn yaw(index: usize) -> DefinedMove {
    DefinedMove::at(Move::Yaw, index)
}

const fn unyaw(index: usize) -> DefinedMove {
    DefinedMove::at(Move::Unyaw, index)
}

const fn roll(index: usize) -> DefinedMove {
    DefinedMove::at(Move::Roll, index)
}

const fn unroll(index: usize) -> DefinedMove {
    DefinedMove::at(Move::Unroll, index)
}

// top corners: bring the corner below the front-right slot up

/// Corner below the slot, top color facing right.
pub const TOP_CORNER_ONE: [DefinedMove; 3] = [unpitch(3), yaw(1), pitch(3)];

/// Corner below the slot, top color facing front.
pub const TOP_CORNER_TWO: [DefinedMove; 4] = [yaw(1), unpitch(3), unyaw(1), pitch(3)];

/// Corner below the slot, top color facing down.
pub const TOP_CORNER_THREE: [DefinedMove; 8] = [
    unpitch(3),
    unyaw(1),
    pitch(3),
    unyaw(1),
    unyaw(1),
    unpitch(3),
    yaw(1),
    pitch(3),
];

/// Corner in the slot, top color facing front.
pub const TOP_CORNER_FOUR: [DefinedMove; 8] = [
    roll(3),
    unyaw(1),
    unroll(3),
    unyaw(1),
    unyaw(1),
    unpitch(3),
    unyaw(1),
    pitch(3),
];

/// Corner in the slot, top color facing right.
pub const TOP_CORNER_FIVE: [DefinedMove; 7] = [
    unpitch(3),
    yaw(1),
    pitch(3),
    unyaw(1),
    unpitch(3),
    yaw(1),
    pitch(3),
];

// top edges: bring an edge up into the front top slot

/// Edge below the slot, top color facing down.
pub const TOP_EDGE_ONE: [DefinedMove; 4] = [unpitch(2), yaw(1), yaw(1), pitch(2)];

/// Edge below the slot, top color facing front.
pub const TOP_EDGE_TWO: [DefinedMove; 4] = [yaw(1), unpitch(2), unyaw(1), pitch(2)];

/// Edge in the front-right middle slot, top color facing right.
pub const TOP_EDGE_THREE: [DefinedMove; 4] = [unyaw(2), roll(3), yaw(2), unroll(3)];

/// Edge in the front-right middle slot, top color facing front.
pub const TOP_EDGE_FOUR: [DefinedMove; 5] = [unyaw(2), unroll(3), yaw(2), yaw(2), roll(3)];

/// Edge in the slot but flipped.
pub const TOP_EDGE_FIVE: [DefinedMove; 8] = [
    unpitch(2),
    yaw(1),
    yaw(1),
    pitch(2),
    yaw(1),
    unpitch(2),
    unyaw(1),
    pitch(2),
];

// middle layer: insert the bottom front edge left or right

pub const MIDDLE_EDGE_LEFT: [DefinedMove; 8] = [
    unyaw(1),
    unpitch(1),
    yaw(1),
    pitch(1),
    yaw(1),
    unroll(3),
    unyaw(1),
    roll(3),
];

pub const MIDDLE_EDGE_RIGHT: [DefinedMove; 8] = [
    yaw(1),
    unpitch(3),
    unyaw(1),
    pitch(3),
    unyaw(1),
    roll(3),
    yaw(1),
    unroll(3),
];

// last layer, on the turned over cube

/// Swaps the two front top corners.
pub const SWITCH_CORNERS_ADJACENT: [DefinedMove; 11] = [
    pitch(1),
    unyaw(3),
    unpitch(1),
    roll(3),
    yaw(3),
    unroll(3),
    pitch(1),
    yaw(3),
    unpitch(1),
    yaw(3),
    yaw(3),
];

/// Swaps the front left top corner with the back right one.
pub const SWITCH_CORNERS_DIAGONAL: [DefinedMove; 11] = [
    yaw(3),
    pitch(1),
    unyaw(3),
    unpitch(1),
    roll(3),
    yaw(3),
    unroll(3),
    pitch(1),
    yaw(3),
    unpitch(1),
    yaw(3),
];

/// Twists three top corners in place.
pub const ORIENT_CORNERS: [DefinedMove; 10] = [
    pitch(1),
    unyaw(3),
    unpitch(1),
    unyaw(3),
    pitch(1),
    unyaw(3),
    unyaw(3),
    unpitch(1),
    unyaw(3),
    unyaw(3),
];

/// Cycles three top edges, keeping the front one.
pub const CYCLE_EDGES: [DefinedMove; 8] = [
    pitch(2),
    unyaw(3),
    unpitch(2),
    unyaw(3),
    unyaw(3),
    pitch(2),
    unyaw(3),
    unpitch(2),
];

/// Flips the front and back top edges.
pub const FLIP_EDGES_H: [DefinedMove; 18] = [
    unpitch(3),
    yaw(2),
    unpitch(3),
    unpitch(3),
    yaw(2),
    yaw(2),
    unpitch(3),
    unyaw(3),
    unyaw(3),
    pitch(3),
    unyaw(2),
    unyaw(2),
    unpitch(3),
    unpitch(3),
    unyaw(2),
    pitch(3),
    unyaw(3),
    unyaw(3),
];

/// Flips the front and left top edges.
pub const FLIP_EDGES_FISH: [DefinedMove; 22] = [
    unroll(3),
    pitch(1),
    unpitch(3),
    yaw(2),
    unpitch(3),
    unpitch(3),
    yaw(2),
    yaw(2),
    unpitch(3),
    unyaw(3),
    unyaw(3),
    pitch(3),
    unyaw(2),
    unyaw(2),
    unpitch(3),
    unpitch(3),
    unyaw(2),
    pitch(3),
    unyaw(3),
    unyaw(3),
    unpitch(1),
    roll(3),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::Cube;

    #[test]
    fn test_fish_wraps_h() {
        assert_eq!(FLIP_EDGES_FISH[2..20], FLIP_EDGES_H);
        assert_eq!(FLIP_EDGES_FISH[..2], [unroll(3), pitch(1)]);
        assert_eq!(FLIP_EDGES_FISH[20..], [unpitch(1), roll(3)]);
    }

    #[test]
    fn test_algorithms_leave_bottom_layer_alone() {
        // last layer algorithms may only disturb the top layer of a solved cube
        for algorithm in [
            &SWITCH_CORNERS_ADJACENT[..],
            &SWITCH_CORNERS_DIAGONAL[..],
            &ORIENT_CORNERS[..],
            &CYCLE_EDGES[..],
            &FLIP_EDGES_H[..],
            &FLIP_EDGES_FISH[..],
        ] {
            let solved = Cube::new(3);
            let mut cube = solved.clone();
            cube.apply_moves(algorithm.iter().copied());
            for y in 1..=2 {
                for z in 1..=3 {
                    for x in 1..=3 {
                        assert_eq!(cube.cell(x, y, z), solved.cell(x, y, z), "{x} {y} {z}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_middle_edge_inserts_keep_top_layer() {
        // seen upside down, the middle layer algorithms only touch the bottom
        // and middle layers' front pieces; the top layer must come back intact
        for algorithm in [&MIDDLE_EDGE_LEFT[..], &MIDDLE_EDGE_RIGHT[..]] {
            let solved = Cube::new(3);
            let mut cube = solved.clone();
            cube.apply_moves(algorithm.iter().copied());
            for z in 1..=3 {
                for x in 1..=3 {
                    assert_eq!(cube.cell(x, 3, z), solved.cell(x, 3, z), "{x} 3 {z}");
                }
            }
        }
    }
}
