//! Move vocabulary: rotation axes, the nine atomic moves, and moves bound
//! to a slice or to the whole cube.
//!
//! Text notation is `KIND@INDEX` for a single slice (`PITCH@2`) and
//! `KIND@*` for the whole cube (`DOUBLE_ROLL@*`).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rotation axis; also selects which coordinate component a slice filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// The nine atomic moves.
///
/// Pitch turns around X, yaw around Y and roll around Z. The `UN` forms are
/// three quarter turns of the base move, the `DOUBLE` forms two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Pitch,
    DoublePitch,
    Unpitch,
    Yaw,
    DoubleYaw,
    Unyaw,
    Roll,
    DoubleRoll,
    Unroll,
}

impl Move {
    pub const ALL: [Move; 9] = [
        Move::Pitch,
        Move::DoublePitch,
        Move::Unpitch,
        Move::Yaw,
        Move::DoubleYaw,
        Move::Unyaw,
        Move::Roll,
        Move::DoubleRoll,
        Move::Unroll,
    ];

    pub const fn axis(self) -> Axis {
        match self {
            Move::Pitch | Move::DoublePitch | Move::Unpitch => Axis::X,
            Move::Yaw | Move::DoubleYaw | Move::Unyaw => Axis::Y,
            Move::Roll | Move::DoubleRoll | Move::Unroll => Axis::Z,
        }
    }

    /// Number of +90° elementary rotations this move performs.
    pub const fn quarter_turns(self) -> usize {
        match self {
            Move::Pitch | Move::Yaw | Move::Roll => 1,
            Move::DoublePitch | Move::DoubleYaw | Move::DoubleRoll => 2,
            Move::Unpitch | Move::Unyaw | Move::Unroll => 3,
        }
    }

    /// The move undoing this one. Undefined (`None`) for the double moves.
    pub const fn inverse(self) -> Option<Move> {
        match self {
            Move::Pitch => Some(Move::Unpitch),
            Move::Unpitch => Some(Move::Pitch),
            Move::Yaw => Some(Move::Unyaw),
            Move::Unyaw => Some(Move::Yaw),
            Move::Roll => Some(Move::Unroll),
            Move::Unroll => Some(Move::Roll),
            Move::DoublePitch | Move::DoubleYaw | Move::DoubleRoll => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Move::Pitch => "PITCH",
            Move::DoublePitch => "DOUBLE_PITCH",
            Move::Unpitch => "UNPITCH",
            Move::Yaw => "YAW",
            Move::DoubleYaw => "DOUBLE_YAW",
            Move::Unyaw => "UNYAW",
            Move::Roll => "ROLL",
            Move::DoubleRoll => "DOUBLE_ROLL",
            Move::Unroll => "UNROLL",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Move::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseMoveError::UnknownMove(name.to_string()))
    }
}

/// What a move is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// One slice, by 1-based index along the move's axis.
    Slice(usize),
    /// Every slice `1..=size`, i.e. a reorientation of the whole cube.
    WholeCube,
}

/// A move kind bound to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefinedMove {
    pub kind: Move,
    pub target: Target,
}

impl DefinedMove {
    /// A move on the slice at `index`.
    pub const fn at(kind: Move, index: usize) -> Self {
        Self {
            kind,
            target: Target::Slice(index),
        }
    }

    /// A move applied to every slice.
    pub const fn whole(kind: Move) -> Self {
        Self {
            kind,
            target: Target::WholeCube,
        }
    }

    /// Same target, inverse kind. `None` for double moves.
    pub fn inverse(self) -> Option<Self> {
        self.kind.inverse().map(|kind| Self {
            kind,
            target: self.target,
        })
    }

    /// True if `other` exactly undoes `self` (same target, inverse kinds).
    pub fn is_undone_by(self, other: DefinedMove) -> bool {
        self.inverse() == Some(other)
    }
}

impl fmt::Display for DefinedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Target::Slice(index) => write!(f, "{}@{}", self.kind, index),
            Target::WholeCube => write!(f, "{}@*", self.kind),
        }
    }
}

impl FromStr for DefinedMove {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (name, target) = text
            .split_once('@')
            .ok_or_else(|| ParseMoveError::MissingTarget(text.to_string()))?;
        let kind: Move = name.parse()?;

        match target.trim() {
            "*" => Ok(DefinedMove::whole(kind)),
            index => match index.parse::<usize>() {
                Ok(index) if index >= 1 => Ok(DefinedMove::at(kind, index)),
                _ => Err(ParseMoveError::InvalidIndex(index.to_string())),
            },
        }
    }
}

/// Errors from parsing move notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("unknown move `{0}`")]
    UnknownMove(String),
    #[error("move `{0}` has no target, expected `MOVE@INDEX` or `MOVE@*`")]
    MissingTarget(String),
    #[error("invalid slice index `{0}`, expected a number starting at 1 or `*`")]
    InvalidIndex(String),
}

/// Parses a whitespace- or comma-separated list of moves.
pub fn parse_moves(text: &str) -> Result<Vec<DefinedMove>, ParseMoveError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

/// Formats a move list as `[PITCH@1, YAW@*, ...]`.
pub fn format_moves(moves: &[DefinedMove]) -> String {
    let items: Vec<String> = moves.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
