//! ASCII net rendering of a cube state.
//!
//! Standard unfolded layout: up on top, then the left/front/right/back
//! strip, then down. One letter per sticker.

use cubesim_core::{Color, CubeState, Face, Position};

/// Renders `state` as an unfolded net, one letter per sticker.
pub fn render(state: &CubeState) -> String {
    let mut out = String::new();
    for r in 0..3 {
        out.push_str("      ");
        push_row(&mut out, state, Face::U, r);
        out.push('\n');
    }
    for r in 0..3 {
        for (i, face) in [Face::L, Face::F, Face::R, Face::B].into_iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            push_row(&mut out, state, face, r);
        }
        out.push('\n');
    }
    for r in 0..3 {
        out.push_str("      ");
        push_row(&mut out, state, Face::D, r);
        out.push('\n');
    }
    out
}

fn push_row(out: &mut String, state: &CubeState, face: Face, r: usize) {
    for c in 0..3 {
        if c > 0 {
            out.push(' ');
        }
        let letter = state
            .sticker(face, sticker_position(face, r, c))
            .map_or('?', Color::letter);
        out.push(letter);
    }
}

/// Grid cell shown at row `r`, column `c` of `face`'s 3×3 patch, oriented so
/// adjacent patches share their edge rows/columns.
fn sticker_position(face: Face, r: usize, c: usize) -> Position {
    let r = r as i8;
    let c = c as i8;
    match face {
        Face::U => Position::new(c - 1, 1, 1 - r),
        Face::D => Position::new(c - 1, -1, r - 1),
        Face::F => Position::new(c - 1, 1 - r, -1),
        Face::B => Position::new(1 - c, 1 - r, 1),
        Face::L => Position::new(-1, 1 - r, 1 - c),
        Face::R => Position::new(1, 1 - r, c - 1),
    }
}
