//! The full cube configuration.

use itertools::{Itertools, iproduct};
use strum::IntoEnumIterator;

use crate::{CUBELET_COUNT, Color, Cubelet, Face, Position};

/// Configuration of the whole puzzle: exactly 27 cubelets, one per grid cell
/// in {−1, 0, 1}³.
///
/// Positions are pairwise distinct and together enumerate all 27 cells at
/// all times; rotation is a bijection on positions and never creates or
/// destroys cubelets. The state is only ever replaced wholesale by the
/// rotation engine's commit, never partially updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    cubelets: Vec<Cubelet>,
}

impl CubeState {
    /// Returns the solved configuration: every cubelet carries the canonical
    /// face-color mapping.
    pub fn solved() -> Self {
        let cubelets = iproduct!(-1..=1i8, -1..=1i8, -1..=1i8)
            .map(|(x, y, z)| Cubelet::solved(Position::new(x, y, z)))
            .collect();
        Self { cubelets }
    }

    /// Assembles a state from a full cubelet collection.
    pub(crate) fn from_cubelets(cubelets: Vec<Cubelet>) -> Self {
        debug_assert_eq!(cubelets.len(), CUBELET_COUNT);
        debug_assert!(cubelets.iter().map(|c| c.position).all_unique());
        Self { cubelets }
    }

    /// All 27 cubelets.
    pub fn cubelets(&self) -> &[Cubelet] {
        &self.cubelets
    }

    /// Returns the cubelet currently at `position`.
    pub fn cubelet_at(&self, position: Position) -> Option<&Cubelet> {
        self.cubelets.iter().find(|c| c.position == position)
    }

    /// Returns the 9 cubelets whose position satisfies `face`'s selection
    /// predicate.
    ///
    /// Edge and corner cubelets belong to more than one layer; no single
    /// ownership is implied here.
    pub fn layer(&self, face: Face) -> impl Iterator<Item = &Cubelet> {
        self.cubelets
            .iter()
            .filter(move |c| c.position[face.axis()] == face.coordinate())
    }

    /// Whether every face currently shows a single uniform color across its
    /// 9 visible slots.
    pub fn is_solved(&self) -> bool {
        Face::iter().all(|face| self.layer(face).map(|c| c.faces[face]).all_equal())
    }

    /// Counts the exterior face-slots showing each color, indexed by the
    /// [`Color`] discriminant.
    ///
    /// Rotations only permute existing stickers, so in any reachable
    /// configuration every count is exactly 9.
    pub fn sticker_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for cubelet in &self.cubelets {
            for face in cubelet.visible_faces() {
                counts[cubelet.faces[face] as usize] += 1;
            }
        }
        counts
    }

    /// Returns the color shown on the exterior sticker of `face` at
    /// `position`, or `None` if that cell is not in the face's layer.
    pub fn sticker(&self, face: Face, position: Position) -> Option<Color> {
        let cubelet = self.cubelet_at(position)?;
        (cubelet.position[face.axis()] == face.coordinate()).then(|| cubelet.faces[face])
    }
}
