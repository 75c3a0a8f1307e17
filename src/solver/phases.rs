//! One step function per phase of the layer method.
//!
//! A step either reports the phase complete or plays some moves that bring
//! the cube closer to it; the driver calls it again until it is done. Steps
//! look at the cube through fixed coordinates, so most of them start by
//! turning a row to bring a new face in front.

use log::{debug, warn};

use super::algorithms::*;
use super::patterns::{self, matches_three, matches_two};
use super::recorder::Recorder;
use crate::cell::Cell;
use crate::coordinate::Coordinate;
use crate::cube::Cube;
use crate::moves::{DefinedMove, Move};

/// Slice index of the top row, right column and front layer.
const OUTER: usize = 3;

/// Consecutive unproductive steps after which a stalling phase forces an algorithm.
const STALL_LIMIT: usize = 4;

/// Outcome of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Progress {
    Done,
    Continue,
}

/// Aligns the top center with the color of the top front right corner.
pub(crate) fn prime(recorder: &mut Recorder<'_>, _stall: &mut usize) -> Progress {
    let target = recorder.cube().cell(3, 3, 3).top();
    let centered = move |cube: &Cube| cube.cell(2, 3, 2).top() == target;

    if !recorder.probe(DefinedMove::at(Move::Roll, 2), centered)
        && !recorder.probe(DefinedMove::at(Move::Pitch, 2), centered)
    {
        warn!("no middle slice brings {target} to the top center");
    }
    Progress::Done
}

/// Places one top corner per step, working on the front right slot.
pub(crate) fn top_corners(recorder: &mut Recorder<'_>, _stall: &mut usize) -> Progress {
    if patterns::top_corners(recorder.cube()) {
        return Progress::Done;
    }

    recorder.turn(Move::Yaw, OUTER);

    // the corner now at the front left is the reference for the slot
    let reference = recorder.cube().cell(1, 3, 3);
    let top = reference.top();
    let front = reference.front();

    if matches_two(recorder.cube().cell(1, 3, 1), front, top) {
        debug!("top corner sits in the back left slot, dropping it");
        recorder.turn(Move::Roll, 1);
    }
    if matches_two(recorder.cube().cell(3, 3, 1), front, top) {
        debug!("top corner sits in the back right slot, dropping it");
        recorder.turn(Move::Unpitch, OUTER);
    }

    let slot = *recorder.cube().cell(3, 3, 3);
    if matches_two(&slot, front, top) {
        if slot.front() == top {
            debug!("top corner in place, twisted toward the front");
            recorder.play(&TOP_CORNER_FOUR);
        } else if slot.right() == top {
            debug!("top corner in place, twisted toward the right");
            recorder.play(&TOP_CORNER_FIVE);
        }
        return Progress::Continue;
    }

    let found = recorder.probe(DefinedMove::at(Move::Yaw, 1), |cube| {
        matches_two(cube.cell(3, 1, 3), top, front)
    });
    if found {
        let corner = recorder.cube().cell(3, 1, 3);
        if corner.right() == top {
            debug!("top corner below the slot, facing right");
            recorder.play(&TOP_CORNER_ONE);
        } else if corner.front() == top {
            debug!("top corner below the slot, facing front");
            recorder.play(&TOP_CORNER_TWO);
        } else {
            debug!("top corner below the slot, facing down");
            recorder.play(&TOP_CORNER_THREE);
        }
    }
    Progress::Continue
}

/// Places one top edge per step, working on the front top slot.
pub(crate) fn top_edges(recorder: &mut Recorder<'_>, _stall: &mut usize) -> Progress {
    if patterns::top_edges(recorder.cube()) {
        return Progress::Done;
    }

    recorder.turn(Move::Yaw, OUTER);

    let reference = recorder.cube().cell(1, 3, 3);
    let top = reference.top();
    let front = reference.front();

    let slot = recorder.cube().cell(2, 3, 3);
    if matches_two(slot, top, front) {
        if slot.front() == top {
            debug!("top edge in place but flipped");
            recorder.play(&TOP_EDGE_FIVE);
        }
        return Progress::Continue;
    }

    let in_middle_row = recorder.probe(DefinedMove::at(Move::Yaw, 2), |cube| {
        matches_two(cube.cell(3, 2, 3), top, front)
    });
    if in_middle_row {
        let edge = recorder.cube().cell(3, 2, 3);
        if edge.right() == top {
            debug!("top edge in the middle row, facing right");
            recorder.play(&TOP_EDGE_THREE);
        } else if edge.front() == top {
            debug!("top edge in the middle row, facing front");
            recorder.play(&TOP_EDGE_FOUR);
        }
        return Progress::Continue;
    }

    // an edge in another top slot is first dropped to the bottom row
    let cube = recorder.cube();
    if matches_two(cube.cell(3, 3, 2), top, front) {
        debug!("top edge in the right slot, dropping it");
        recorder.play(&[
            DefinedMove::at(Move::Roll, 2),
            DefinedMove::at(Move::Yaw, 1),
            DefinedMove::at(Move::Unroll, 2),
        ]);
    } else if matches_two(cube.cell(2, 3, 1), top, front) {
        debug!("top edge in the back slot, dropping it");
        recorder.play(&[
            DefinedMove::at(Move::Pitch, 2),
            DefinedMove::at(Move::Yaw, 1),
            DefinedMove::at(Move::Unpitch, 2),
        ]);
    } else if matches_two(cube.cell(1, 3, 2), top, front) {
        debug!("top edge in the left slot, dropping it");
        recorder.play(&[
            DefinedMove::at(Move::Unroll, 2),
            DefinedMove::at(Move::Yaw, 1),
            DefinedMove::at(Move::Roll, 2),
        ]);
    }

    let in_bottom_row = recorder.probe(DefinedMove::at(Move::Yaw, 1), |cube| {
        matches_two(cube.cell(2, 1, 3), top, front)
    });
    if !in_bottom_row {
        warn!("top edge {top}/{front} not found on the bottom row");
        return Progress::Continue;
    }

    let edge = recorder.cube().cell(2, 1, 3);
    if edge.bottom() == top {
        debug!("top edge in the bottom row, facing down");
        recorder.play(&TOP_EDGE_ONE);
    } else if edge.front() == top {
        debug!("top edge in the bottom row, facing front");
        recorder.play(&TOP_EDGE_TWO);
    }
    Progress::Continue
}

/// Turns the middle row until the side centers line up with the top layer.
pub(crate) fn align_centers(recorder: &mut Recorder<'_>, _stall: &mut usize) -> Progress {
    if patterns::centers_aligned(recorder.cube()) {
        return Progress::Done;
    }
    recorder.turn(Move::Yaw, 2);
    Progress::Continue
}

/// Inserts middle layer edges from the bottom row, one face per step.
///
/// `stall` counts consecutive faces where no edge could be lined up below
/// its center. Once it reaches the limit, an edge is forced out of a wrong
/// middle slot so that it shows up on the bottom row.
pub(crate) fn middle_edges(recorder: &mut Recorder<'_>, stall: &mut usize) -> Progress {
    if patterns::middle_layer(recorder.cube()) {
        return Progress::Done;
    }

    recorder.turn(Move::Yaw, OUTER);
    recorder.turn(Move::Yaw, 2);

    // these cells are followed as they move, not the slots they sit in
    let followed = Followed::front(recorder.cube());

    if *stall >= STALL_LIMIT {
        let Some(cells) = followed.locate(recorder.cube()) else {
            return Progress::Continue;
        };
        if cells.middle_left.front() != cells.upper_left.front()
            || cells.middle_left.left() != cells.upper_left.left()
        {
            debug!("no edge found for {stall} faces, forcing the left edge out");
            recorder.play(&MIDDLE_EDGE_LEFT);
        } else if cells.middle_right.front() != cells.upper_right.front()
            || cells.middle_right.right() != cells.upper_right.right()
        {
            debug!("no edge found for {stall} faces, forcing the right edge out");
            recorder.play(&MIDDLE_EDGE_RIGHT);
        }
    }

    let Some(cells) = followed.locate(recorder.cube()) else {
        return Progress::Continue;
    };
    if cells.middle_left.front() == cells.upper_left.left()
        && cells.middle_left.left() == cells.upper_left.front()
    {
        debug!("left middle edge is flipped, taking it out");
        recorder.play(&MIDDLE_EDGE_LEFT);
    }

    let Some(cells) = followed.locate(recorder.cube()) else {
        return Progress::Continue;
    };
    if cells.middle_right.front() == cells.upper_right.right()
        && cells.middle_right.right() == cells.upper_right.front()
    {
        debug!("right middle edge is flipped, taking it out");
        recorder.play(&MIDDLE_EDGE_RIGHT);
    }

    let found = recorder.probe(DefinedMove::at(Move::Yaw, 1), |cube| {
        let edge = cube.cell(2, 1, 3);
        followed.locate(cube).is_some_and(|cells| {
            edge.front() == cells.upper_left.front()
                && (edge.bottom() == cells.upper_left.left()
                    || edge.bottom() == cells.upper_right.right())
        })
    });
    if !found {
        *stall += 1;
        return Progress::Continue;
    }
    *stall = 0;

    let Some(cells) = followed.locate(recorder.cube()) else {
        return Progress::Continue;
    };
    let bottom = recorder.cube().cell(2, 1, 3).bottom();
    if bottom == cells.upper_left.left() {
        debug!("middle edge below the front center goes left");
        recorder.play(&MIDDLE_EDGE_LEFT);
    } else if bottom == cells.upper_right.right() {
        debug!("middle edge below the front center goes right");
        recorder.play(&MIDDLE_EDGE_RIGHT);
    }
    Progress::Continue
}

/// Turns the cube upside down, bringing the unsolved layer to the top.
pub(crate) fn turn_over(recorder: &mut Recorder<'_>, _stall: &mut usize) -> Progress {
    recorder.turn_cube(Move::DoubleRoll);
    Progress::Done
}

/// Moves the last layer corners into their slots, ignoring their twist.
pub(crate) fn last_layer_corners(recorder: &mut Recorder<'_>, _stall: &mut usize) -> Progress {
    if patterns::corners_placed(recorder.cube()) {
        return Progress::Done;
    }

    let top = recorder.cube().cell(2, 3, 2).top();
    let side_by_side = recorder.probe(DefinedMove::at(Move::Yaw, OUTER), |cube| {
        let front = cube.cell(3, 2, 3).front();
        matches_two(cube.cell(3, 3, 3), top, front) && matches_two(cube.cell(1, 3, 3), top, front)
    });

    let cube = recorder.cube();
    let right = cube.cell(3, 2, 3).right();
    let left = cube.cell(1, 2, 3).left();
    let front = cube.cell(3, 2, 3).front();

    if side_by_side {
        if !matches_three(cube.cell(3, 3, 3), top, front, right) {
            debug!("front corners belong to the front face but are swapped");
            recorder.play(&SWITCH_CORNERS_ADJACENT);
        }
        recorder.turn_cube(Move::DoubleYaw);
    } else if matches_three(cube.cell(1, 3, 3), top, front, left)
        && matches_three(cube.cell(3, 3, 1), top, front, right)
    {
        debug!("front right corner belongs across the diagonal");
        recorder.play(&SWITCH_CORNERS_DIAGONAL);
    } else {
        recorder.turn(Move::Yaw, OUTER);
    }
    Progress::Continue
}

/// Twists the last layer corners until the whole top face shows one color.
///
/// `stall` counts top row turns without a recognizable configuration; after
/// four of them the twisting algorithm is played anyway.
pub(crate) fn orient_corners(recorder: &mut Recorder<'_>, stall: &mut usize) -> Progress {
    if patterns::corners_oriented(recorder.cube()) {
        return Progress::Done;
    }

    let cube = recorder.cube();
    let top = cube.cell(2, 3, 2).top();
    let front_left = cube.cell(1, 3, 3);
    let front_right = cube.cell(3, 3, 3);
    let back_right = cube.cell(3, 3, 1);

    let recognized = (front_left.front() == top && front_right.top() == top)
        || (front_right.right() == top && back_right.right() == top)
        || (front_right.top() == top && back_right.right() == top);

    if *stall == STALL_LIMIT || recognized {
        debug!("twisting last layer corners (stall {stall})");
        recorder.play(&ORIENT_CORNERS);
        *stall = 0;
    } else {
        recorder.turn(Move::Yaw, OUTER);
        *stall += 1;
    }
    Progress::Continue
}

/// Cycles last layer edges until each sits in its slot, flipped or not.
pub(crate) fn partial_edges(recorder: &mut Recorder<'_>, _stall: &mut usize) -> Progress {
    if patterns::edges_placed(recorder.cube()) {
        return Progress::Done;
    }

    let top = recorder.cube().cell(2, 3, 2).top();
    let aligned = recorder.probe(DefinedMove::whole(Move::Yaw), |cube| {
        matches_two(cube.cell(2, 3, 3), top, cube.cell(1, 3, 3).front())
    });
    if !aligned {
        debug!("no last layer edge in place, cycling anyway");
    }
    recorder.play(&CYCLE_EDGES);
    Progress::Continue
}

/// Flips the remaining pair of last layer edges.
pub(crate) fn final_edges(recorder: &mut Recorder<'_>, _stall: &mut usize) -> Progress {
    if recorder.cube().is_solved() {
        return Progress::Done;
    }

    if patterns::solved_top_edges(recorder.cube()) == 0 {
        debug!("all last layer edges flipped, flipping two first");
        recorder.play(&FLIP_EDGES_H);
    }

    let found = recorder.probe(DefinedMove::whole(Move::Yaw), |cube| {
        patterns::flipped_edges_h(cube) || patterns::flipped_edges_fish(cube)
    });
    if !found {
        warn!("no flipped edge pattern found on the last layer");
    } else if patterns::flipped_edges_h(recorder.cube()) {
        debug!("flipping opposite edges");
        recorder.play(&FLIP_EDGES_H);
    } else {
        debug!("flipping adjacent edges");
        recorder.play(&FLIP_EDGES_FISH);
    }
    Progress::Done
}

/// Origins of the front column cells a middle edge step follows.
#[derive(Debug, Clone, Copy)]
struct Followed {
    upper_left: Coordinate,
    upper_right: Coordinate,
    middle_left: Coordinate,
    middle_right: Coordinate,
}

/// Where the followed cells are now.
struct Located<'a> {
    upper_left: &'a Cell,
    upper_right: &'a Cell,
    middle_left: &'a Cell,
    middle_right: &'a Cell,
}

impl Followed {
    fn front(cube: &Cube) -> Self {
        Self {
            upper_left: cube.cell(1, 3, 3).origin(),
            upper_right: cube.cell(3, 3, 3).origin(),
            middle_left: cube.cell(1, 2, 3).origin(),
            middle_right: cube.cell(3, 2, 3).origin(),
        }
    }

    /// Finds the followed cells in `cube`, or `None` when one of them is missing.
    fn locate<'a>(&self, cube: &'a Cube) -> Option<Located<'a>> {
        let find = move |origin: Coordinate| {
            let cell = cube.cell_from(origin);
            if cell.is_none() {
                warn!("no cell started at {origin}");
            }
            cell
        };

        Some(Located {
            upper_left: find(self.upper_left)?,
            upper_right: find(self.upper_right)?,
            middle_left: find(self.middle_left)?,
            middle_right: find(self.middle_right)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{run_phase, Phase};

    /// Last layer corners in their slots but twisted, on a turned over cube.
    fn twisted_corners() -> Cube {
        let mut cube = Cube::new(3);
        cube.apply_move(DefinedMove::whole(Move::DoubleRoll));
        cube.apply_moves(ORIENT_CORNERS);
        cube
    }

    /// A solved cube whose front right middle edge was swapped with a bottom edge.
    fn misplaced_middle_edge() -> Cube {
        let mut cube = Cube::new(3);
        cube.apply_moves(MIDDLE_EDGE_RIGHT);
        cube
    }

    /// Runs one step on a copy of `start`.
    fn single_step(
        start: &Cube,
        step_fn: fn(&mut Recorder<'_>, &mut usize) -> Progress,
        stall: &mut usize,
    ) -> (Progress, Vec<DefinedMove>) {
        let mut cube = start.clone();
        let mut recorder = Recorder::new(&mut cube);
        let progress = step_fn(&mut recorder, stall);
        (progress, recorder.into_moves())
    }

    #[test]
    fn test_orient_corners_turns_the_top_row_when_nothing_is_recognized() {
        let mut cube = twisted_corners();
        cube.apply_move(DefinedMove::at(Move::Yaw, OUTER));
        assert!(!patterns::corners_oriented(&cube));

        let mut stall = 0;
        let (progress, moves) = single_step(&cube, orient_corners, &mut stall);
        assert_eq!(progress, Progress::Continue);
        assert_eq!(moves, [DefinedMove::at(Move::Yaw, OUTER)]);
        assert_eq!(stall, 1);
    }

    #[test]
    fn test_orient_corners_twists_once_stalled() {
        let mut cube = twisted_corners();
        cube.apply_move(DefinedMove::at(Move::Yaw, OUTER));

        let mut stall = STALL_LIMIT;
        let (progress, moves) = single_step(&cube, orient_corners, &mut stall);
        assert_eq!(progress, Progress::Continue);
        assert_eq!(moves, ORIENT_CORNERS);
        assert_eq!(stall, 0);
    }

    #[test]
    fn test_orient_corners_phase_completes() {
        let mut cube = twisted_corners();
        cube.apply_move(DefinedMove::at(Move::Yaw, OUTER));

        let mut recorder = Recorder::new(&mut cube);
        assert_eq!(run_phase(Phase::OrientCorners, &mut recorder), Ok(()));
        assert!(patterns::corners_oriented(&cube));
    }

    #[test]
    fn test_middle_edges_inserts_the_edge_found_below() {
        let start = misplaced_middle_edge();
        assert!(patterns::centers_aligned(&start));
        assert!(!patterns::middle_layer(&start));

        let mut stall = 0;
        let (progress, moves) = single_step(&start, middle_edges, &mut stall);
        assert_eq!(progress, Progress::Continue);
        assert_eq!(
            moves[..4],
            [
                DefinedMove::at(Move::Yaw, OUTER),
                DefinedMove::at(Move::Yaw, 2),
                DefinedMove::at(Move::Yaw, 1),
                DefinedMove::at(Move::Yaw, 1),
            ]
        );
        assert_eq!(stall, 0);
    }

    #[test]
    fn test_middle_edges_forces_the_left_insert_once_stalled() {
        let start = misplaced_middle_edge();

        let mut stall = STALL_LIMIT;
        let (progress, moves) = single_step(&start, middle_edges, &mut stall);
        assert_eq!(progress, Progress::Continue);
        assert_eq!(
            moves[..2],
            [DefinedMove::at(Move::Yaw, OUTER), DefinedMove::at(Move::Yaw, 2)]
        );
        assert_eq!(moves[2..2 + MIDDLE_EDGE_LEFT.len()], MIDDLE_EDGE_LEFT);
        assert_eq!(stall, 0);
    }

    #[test]
    fn test_middle_edges_phase_completes() {
        let mut cube = misplaced_middle_edge();
        let mut recorder = Recorder::new(&mut cube);
        assert_eq!(run_phase(Phase::MiddleEdges, &mut recorder), Ok(()));
        assert!(patterns::middle_layer(&cube));
    }

    #[test_log::test]
    fn test_final_edges_without_flip_pattern_leaves_cube_alone() {
        let start = twisted_corners();
        assert!(!start.is_solved());

        let mut cube = start.clone();
        let mut recorder = Recorder::new(&mut cube);
        assert_eq!(final_edges(&mut recorder, &mut 0), Progress::Done);
        assert!(recorder.into_moves().is_empty());
        assert_eq!(cube, start);
    }

    #[test]
    fn test_followed_cells_are_found_after_moves() {
        let mut cube = Cube::new(3);
        cube.apply_move(DefinedMove::at(Move::Yaw, OUTER));
        let followed = Followed::front(&cube);

        cube.apply_moves(MIDDLE_EDGE_LEFT);
        let cells = followed.locate(&cube).unwrap();
        assert_eq!(cells.upper_left.origin(), followed.upper_left);
        assert_eq!(cells.upper_right.origin(), followed.upper_right);
        assert_eq!(cells.middle_left.origin(), followed.middle_left);
        assert_eq!(cells.middle_right.origin(), followed.middle_right);
        assert_ne!(cells.middle_left.coordinate(), Coordinate::new(1, 2, 3));
    }

    #[test_log::test]
    fn test_missing_followed_cell_is_not_replaced() {
        let followed = Followed::front(&Cube::new(3));
        assert!(followed.locate(&Cube::new(2)).is_none());
    }
}
