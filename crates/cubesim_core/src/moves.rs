//! Moves and face-turn notation.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::Face;

/// A single 90° rotation of one face in one direction.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face to rotate.
    pub face: Face,
    /// `true` for clockwise, `false` for counter-clockwise.
    pub clockwise: bool,
}

impl Move {
    /// Constructs a clockwise turn of `face`.
    pub fn cw(face: Face) -> Self {
        Self {
            face,
            clockwise: true,
        }
    }

    /// Constructs a counter-clockwise turn of `face`.
    pub fn ccw(face: Face) -> Self {
        Self {
            face,
            clockwise: false,
        }
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            face: self.face,
            clockwise: !self.clockwise,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.clockwise { "" } else { "'" };
        write!(f, "{}{marker}", self.face.symbol())
    }
}

/// Error encountered while parsing a move.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("bad move: {0:?}")]
pub struct MoveParseError(pub String);

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (face_str, clockwise) = match s.strip_suffix('\'') {
            Some(rest) => (rest, false),
            None => (s, true),
        };
        let face = Face::ALL
            .into_iter()
            .find(|f| f.symbol() == face_str)
            .ok_or_else(|| MoveParseError(s.to_string()))?;
        Ok(Self { face, clockwise })
    }
}

/// Formats a sequence of moves as space-separated face-turn notation.
pub fn format_moves(moves: impl IntoIterator<Item = Move>) -> String {
    moves.into_iter().map(|mv| mv.to_string()).join(" ")
}

/// Parses space-separated face-turn notation (`"F R' U"`).
///
/// Only the six base faces with an optional `'` marker are accepted.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, MoveParseError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Returns the sequence that undoes `moves`: reverse order, each direction
/// flipped.
pub fn inverse(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.rev()).collect()
}
