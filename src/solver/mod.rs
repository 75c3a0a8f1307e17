//! Layer by layer solver for the 3×3×3 cube.
//!
//! The method works in phases: prime the top center, place the top corners
//! and edges, align the centers, fill the middle layer, turn the cube over,
//! then place, twist and flip the last layer pieces. Each phase repeats a
//! small step until its completion pattern holds. Every move is played on a
//! private copy of the cube and recorded; the recorded list is the solving
//! path.

mod algorithms;
mod optimizer;
mod patterns;
mod phases;
mod recorder;

use std::fmt;
use std::time::Instant;

use log::{debug, info, warn};
use thiserror::Error;

pub use optimizer::optimize;

use crate::cube::Cube;
use crate::moves::DefinedMove;
use crate::path::SolvingPath;
use phases::Progress;
use recorder::Recorder;

/// The only cube size the layer method handles.
pub const SUPPORTED_SIZE: usize = 3;

/// Steps a single phase may take before the solve is abandoned.
const MAX_STEPS: usize = 256;

type StepFn = fn(&mut Recorder<'_>, &mut usize) -> Progress;

/// Stages of the layer method, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Prime,
    TopCorners,
    TopEdges,
    AlignCenters,
    MiddleEdges,
    TurnOver,
    LastLayerCorners,
    OrientCorners,
    PartialEdges,
    FinalEdges,
}

impl Phase {
    pub const ALL: [Phase; 10] = [
        Phase::Prime,
        Phase::TopCorners,
        Phase::TopEdges,
        Phase::AlignCenters,
        Phase::MiddleEdges,
        Phase::TurnOver,
        Phase::LastLayerCorners,
        Phase::OrientCorners,
        Phase::PartialEdges,
        Phase::FinalEdges,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Phase::Prime => "prime",
            Phase::TopCorners => "top corners",
            Phase::TopEdges => "top edges",
            Phase::AlignCenters => "align centers",
            Phase::MiddleEdges => "middle edges",
            Phase::TurnOver => "turn over",
            Phase::LastLayerCorners => "last layer corners",
            Phase::OrientCorners => "orient corners",
            Phase::PartialEdges => "partial edges",
            Phase::FinalEdges => "final edges",
        }
    }

    fn step(self) -> StepFn {
        match self {
            Phase::Prime => phases::prime,
            Phase::TopCorners => phases::top_corners,
            Phase::TopEdges => phases::top_edges,
            Phase::AlignCenters => phases::align_centers,
            Phase::MiddleEdges => phases::middle_edges,
            Phase::TurnOver => phases::turn_over,
            Phase::LastLayerCorners => phases::last_layer_corners,
            Phase::OrientCorners => phases::orient_corners,
            Phase::PartialEdges => phases::partial_edges,
            Phase::FinalEdges => phases::final_edges,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why no solving path could be computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("solving is only available for 3x3x3 cubes, got size {size}")]
    UnsupportedSize { size: usize },
    #[error("{phase} phase did not complete within its step limit")]
    Stalled { phase: Phase },
    #[error("cube is not solved after the last phase")]
    Unsolved,
}

/// Computes a solving path on a copy of a cube.
///
/// ```
/// use rubiks::{Cube, Solver};
///
/// let mut cube = Cube::new(3);
/// cube.shuffle_with(&mut fastrand::Rng::with_seed(3), 25);
///
/// let path = Solver::new(&cube).solve().unwrap();
/// cube.apply_moves(path);
/// assert!(cube.is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    cube: Cube,
    optimize: bool,
}

impl Solver {
    /// Takes a private copy of `cube`; the caller's cube is never touched.
    pub fn new(cube: &Cube) -> Self {
        Self {
            cube: cube.clone(),
            optimize: false,
        }
    }

    /// Runs [`optimize`] over the recorded moves before returning them.
    pub fn with_optimizer(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    pub fn solve(self) -> Result<SolvingPath, SolveError> {
        let size = self.cube.size();
        if size != SUPPORTED_SIZE {
            warn!("cannot solve a cube of size {size}, only size {SUPPORTED_SIZE} is supported");
            return Err(SolveError::UnsupportedSize { size });
        }

        if self.cube.is_solved() {
            info!("cube is already solved");
            return Ok(SolvingPath::new(Vec::new()));
        }

        let start = Instant::now();
        let mut cube = self.cube;
        let mut moves = run_phases(&mut cube, &Phase::ALL)?;

        if self.optimize {
            moves = optimize(&moves);
        }

        info!(
            "cube solved in {} moves in {} ms",
            moves.len(),
            start.elapsed().as_millis()
        );
        Ok(SolvingPath::new(moves))
    }
}

/// Runs `phases` in order and returns the recorded moves, which must leave
/// `cube` solved.
fn run_phases(cube: &mut Cube, phases: &[Phase]) -> Result<Vec<DefinedMove>, SolveError> {
    let mut recorder = Recorder::new(cube);
    for &phase in phases {
        run_phase(phase, &mut recorder)?;
    }

    let moves = recorder.into_moves();
    if !cube.is_solved() {
        warn!("cube is not solved after {} moves", moves.len());
        return Err(SolveError::Unsolved);
    }
    Ok(moves)
}

/// Repeats a phase's step until it reports done.
fn run_phase(phase: Phase, recorder: &mut Recorder<'_>) -> Result<(), SolveError> {
    let step = phase.step();
    let mut stall = 0;

    for steps in 1..=MAX_STEPS {
        if step(recorder, &mut stall) == Progress::Done {
            debug!("{phase} phase done in {steps} steps");
            return Ok(());
        }
    }

    warn!("{phase} phase still incomplete after {MAX_STEPS} steps");
    Err(SolveError::Stalled { phase })
}
