//! Cubelets and the closed sets they are built from: axes, faces, colors.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// 3-dimensional grid axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (back; the front of the puzzle is at z = −1).
    Z = 2,
}

/// One of the six rotatable faces of the puzzle.
///
/// The same six values double as the local face *directions* of a cubelet
/// (the slots of a [`FaceColors`] mapping), so a face identifier keys both
/// the layer-selection predicate and the per-cubelet color lookup.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum Face {
    /// Right (x = +1).
    R = 0,
    /// Left (x = −1).
    L = 1,
    /// Up (y = +1).
    U = 2,
    /// Down (y = −1).
    D = 3,
    /// Front (z = −1).
    F = 4,
    /// Back (z = +1).
    B = 5,
}

impl Face {
    /// All six faces, in index order.
    pub const ALL: [Face; 6] = [Face::R, Face::L, Face::U, Face::D, Face::F, Face::B];

    /// Returns the axis perpendicular to this face.
    pub fn axis(self) -> Axis {
        use Face::*;

        match self {
            R | L => Axis::X,
            U | D => Axis::Y,
            F | B => Axis::Z,
        }
    }

    /// Returns the signed extreme coordinate of this face's layer along
    /// [`Self::axis`].
    pub fn coordinate(self) -> i8 {
        use Face::*;

        match self {
            R | U | B => 1,
            L | D | F => -1,
        }
    }

    /// Returns the face on the opposite side of the puzzle.
    #[must_use]
    pub fn opposite(self) -> Self {
        use Face::*;

        match self {
            R => L,
            L => R,
            U => D,
            D => U,
            F => B,
            B => F,
        }
    }

    /// Face-turn notation symbol.
    pub fn symbol(self) -> &'static str {
        use Face::*;

        match self {
            R => "R",
            L => "L",
            U => "U",
            D => "D",
            F => "F",
            B => "B",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        use Face::*;

        match self {
            R => "Right",
            L => "Left",
            U => "Up",
            D => "Down",
            F => "Front",
            B => "Back",
        }
    }
}

/// One of the six sticker colors.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    /// Up face color in the canonical scheme.
    White = 0,
    /// Down face color in the canonical scheme.
    Yellow = 1,
    /// Left face color in the canonical scheme.
    Orange = 2,
    /// Right face color in the canonical scheme.
    Red = 3,
    /// Front face color in the canonical scheme.
    Blue = 4,
    /// Back face color in the canonical scheme.
    Green = 5,
}

impl Color {
    /// Single-letter abbreviation, for compact display.
    pub fn letter(self) -> char {
        use Color::*;

        match self {
            White => 'W',
            Yellow => 'Y',
            Orange => 'O',
            Red => 'R',
            Blue => 'B',
            Green => 'G',
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        use Color::*;

        match self {
            White => "white",
            Yellow => "yellow",
            Orange => "orange",
            Red => "red",
            Blue => "blue",
            Green => "green",
        }
    }
}

/// Integer grid position of a cubelet, each component in {−1, 0, 1}.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position(pub(crate) [i8; 3]);

impl Position {
    /// Constructs a position from its components.
    pub fn new(x: i8, y: i8, z: i8) -> Self {
        debug_assert!(
            [x, y, z].iter().all(|c| (-1..=1).contains(c)),
            "position component out of range: ({x}, {y}, {z})"
        );
        Self([x, y, z])
    }

    /// Returns the components as an array, axis order.
    pub fn components(self) -> [i8; 3] {
        self.0
    }
}

impl Index<Axis> for Position {
    type Output = i8;

    fn index(&self, axis: Axis) -> &Self::Output {
        &self.0[axis as usize]
    }
}

impl IndexMut<Axis> for Position {
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        &mut self.0[axis as usize]
    }
}

/// Mapping from each of the six local face directions to a color.
///
/// Every slot is always populated, whether or not the corresponding sticker
/// is on the puzzle exterior at the cubelet's current position; this keeps
/// the rotation engine's permutation logic uniform across centers, edges and
/// corners.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FaceColors(pub(crate) [Color; 6]);

impl FaceColors {
    /// The canonical solved-scheme mapping: up white, down yellow, left
    /// orange, right red, front blue, back green.
    pub const CANONICAL: Self = Self([
        Color::Red,    // R
        Color::Orange, // L
        Color::White,  // U
        Color::Yellow, // D
        Color::Blue,   // F
        Color::Green,  // B
    ]);
}

impl Index<Face> for FaceColors {
    type Output = Color;

    fn index(&self, face: Face) -> &Self::Output {
        &self.0[face as usize]
    }
}

impl IndexMut<Face> for FaceColors {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        &mut self.0[face as usize]
    }
}

/// One of the 27 unit cubes composing the puzzle.
///
/// A cubelet has no persistent identity; for one rotation step it is
/// identified by its pre-rotation position.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cubelet {
    /// Grid position.
    pub position: Position,
    /// Color of each local face direction.
    pub faces: FaceColors,
}

impl Cubelet {
    /// Constructs the cubelet at `position` in the solved configuration.
    ///
    /// Every cubelet starts with the identical canonical mapping; only
    /// rotation differentiates them.
    pub fn solved(position: Position) -> Self {
        Self {
            position,
            faces: FaceColors::CANONICAL,
        }
    }

    /// Returns the face directions whose sticker is on the puzzle exterior
    /// at this cubelet's current position.
    pub fn visible_faces(self) -> impl Iterator<Item = Face> {
        Face::iter().filter(move |f| self.position[f.axis()] == f.coordinate())
    }
}
