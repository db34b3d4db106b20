//! The rotation engine: pure 90° face turns.

use crate::{Axis, CubeState, Cubelet, Face, FaceColors, Move, Position};

/// Applies one 90° face turn to `state`, producing the new state.
///
/// This is a pure transformation: the input is never mutated, the result
/// always contains exactly 27 cubelets, and there are no error conditions
/// (faces and directions are closed sets). Cubelets outside the turned layer
/// pass through unchanged in both position and colors.
#[must_use]
pub fn rotate(state: &CubeState, mv: Move) -> CubeState {
    let cubelets = state
        .cubelets()
        .iter()
        .map(|&cubelet| rotate_cubelet(cubelet, mv))
        .collect();
    CubeState::from_cubelets(cubelets)
}

fn rotate_cubelet(cubelet: Cubelet, mv: Move) -> Cubelet {
    let axis = mv.face.axis();
    if cubelet.position[axis] != mv.face.coordinate() {
        return cubelet;
    }
    Cubelet {
        position: rotate_position(cubelet.position, axis, mv.clockwise),
        faces: cycle_colors(cubelet.faces, axis, mv.clockwise),
    }
}

/// 90° rotation of a grid position about `axis`.
fn rotate_position(position: Position, axis: Axis, clockwise: bool) -> Position {
    let Position([x, y, z]) = position;
    Position(match (axis, clockwise) {
        (Axis::Z, true) => [y, -x, z],
        (Axis::Z, false) => [-y, x, z],
        (Axis::X, true) => [x, -z, y],
        (Axis::X, false) => [x, z, -y],
        (Axis::Y, true) => [-z, y, x],
        (Axis::Y, false) => [z, y, -x],
    })
}

/// The four face slots cycled by a clockwise turn about each axis, in flow
/// order: the color in `cycle[i]` moves to `cycle[i + 1]`. The two slots
/// parallel to the axis are untouched.
fn axis_cycle(axis: Axis) -> [Face; 4] {
    match axis {
        Axis::X => [Face::U, Face::B, Face::D, Face::F],
        Axis::Y => [Face::F, Face::L, Face::B, Face::R],
        Axis::Z => [Face::U, Face::R, Face::D, Face::L],
    }
}

fn cycle_colors(faces: FaceColors, axis: Axis, clockwise: bool) -> FaceColors {
    let cycle = axis_cycle(axis);
    let mut out = faces;
    for (i, &from) in cycle.iter().enumerate() {
        let to = cycle[if clockwise { (i + 1) % 4 } else { (i + 3) % 4 }];
        out[to] = faces[from];
    }
    out
}
