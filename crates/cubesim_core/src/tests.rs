use itertools::Itertools;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;

/// All 12 distinct moves.
fn all_moves() -> impl Iterator<Item = Move> {
    Face::ALL
        .into_iter()
        .flat_map(|face| [Move::cw(face), Move::ccw(face)])
}

fn apply_all(state: &CubeState, moves: &[Move]) -> CubeState {
    moves.iter().fold(state.clone(), |s, &mv| rotate(&s, mv))
}

/// A fixed non-trivial configuration for the rotation laws.
fn mixed_state() -> CubeState {
    apply_all(
        &CubeState::solved(),
        &parse_moves("F R' U B L' D").unwrap(),
    )
}

#[test]
fn solved_state_is_well_formed() {
    let solved = CubeState::solved();
    assert_eq!(solved.cubelets().len(), CUBELET_COUNT);
    assert!(solved.cubelets().iter().map(|c| c.position).all_unique());
    for face in Face::ALL {
        assert_eq!(solved.layer(face).count(), LAYER_SIZE);
    }
    assert_eq!(solved.sticker_counts(), [LAYER_SIZE; 6]);
    assert!(solved.is_solved());
}

#[test]
fn visible_faces_match_position_kind() {
    let solved = CubeState::solved();
    let count_at = |x, y, z| {
        solved
            .cubelet_at(Position::new(x, y, z))
            .unwrap()
            .visible_faces()
            .count()
    };
    assert_eq!(count_at(0, 0, 0), 0); // core
    assert_eq!(count_at(1, 0, 0), 1); // face center
    assert_eq!(count_at(1, 1, 0), 2); // edge
    assert_eq!(count_at(1, 1, 1), 3); // corner
}

#[test]
fn front_turn_concrete_scenario() {
    let turned = rotate(&CubeState::solved(), Move::cw(Face::F));

    // The F layer is z = −1; (1,−1,−1) maps to (−1,−1,−1) and its colors
    // cycle up→right→down→left.
    let moved = turned
        .cubelet_at(Position::new(-1, -1, -1))
        .expect("corner cell must stay occupied");
    assert_eq!(moved.faces[Face::U], Color::Orange); // pre-rotation left
    assert_eq!(moved.faces[Face::R], Color::White); // pre-rotation up
    assert_eq!(moved.faces[Face::D], Color::Red); // pre-rotation right
    assert_eq!(moved.faces[Face::L], Color::Yellow); // pre-rotation down
    assert_eq!(moved.faces[Face::F], Color::Blue);
    assert_eq!(moved.faces[Face::B], Color::Green);
}

#[test]
fn front_turn_permutes_positions() {
    // Mark one sticker so the corner is distinguishable from its 26 twins.
    let mut cubelets = CubeState::solved().cubelets().to_vec();
    for cubelet in &mut cubelets {
        if cubelet.position == Position::new(1, -1, -1) {
            cubelet.faces[Face::U] = Color::Green;
        }
    }
    let marked = CubeState::from_cubelets(cubelets);

    let turned = rotate(&marked, Move::cw(Face::F));
    let moved = turned
        .cubelet_at(Position::new(-1, -1, -1))
        .expect("corner cell must stay occupied");
    // The marked sticker traveled with the cubelet and now faces right.
    assert_eq!(moved.faces[Face::R], Color::Green);

    // The vacated cell is filled from (1,1,−1), whose up sticker was white.
    let filled = turned
        .cubelet_at(Position::new(1, -1, -1))
        .expect("corner cell must stay occupied");
    assert_eq!(filled.faces[Face::R], Color::White);
}

#[test]
fn round_trip_law() {
    for base in [CubeState::solved(), mixed_state()] {
        for mv in all_moves() {
            assert_eq!(rotate(&rotate(&base, mv), mv.rev()), base);
        }
    }
}

#[test]
fn order_four_law() {
    let base = mixed_state();
    for mv in all_moves() {
        assert_eq!(apply_all(&base, &[mv; 4]), base);
    }
}

#[test]
fn layer_isolation() {
    let base = mixed_state();
    for mv in all_moves() {
        let turned = rotate(&base, mv);
        for cubelet in base.cubelets() {
            if cubelet.position[mv.face.axis()] != mv.face.coordinate() {
                assert_eq!(turned.cubelet_at(cubelet.position), Some(cubelet));
            }
        }
    }
}

#[test]
fn rotation_is_bijection_on_positions() {
    let base = mixed_state();
    for mv in all_moves() {
        let turned = rotate(&base, mv);
        assert_eq!(turned.cubelets().len(), CUBELET_COUNT);
        assert!(turned.cubelets().iter().map(|c| c.position).all_unique());
    }
}

#[test]
fn solved_detection() {
    let solved = CubeState::solved();
    let turned = rotate(&solved, Move::cw(Face::R));
    assert!(!turned.is_solved());
    assert!(rotate(&turned, Move::ccw(Face::R)).is_solved());
}

#[test]
fn sticker_lookup() {
    let solved = CubeState::solved();
    let up_center = solved.sticker(Face::U, Position::new(0, 1, 0));
    assert_eq!(up_center, Some(Color::White));
    assert_eq!(solved.sticker(Face::U, Position::new(0, 0, 0)), None);
}

#[test]
fn notation_round_trip() {
    for mv in all_moves() {
        assert_eq!(mv.to_string().parse::<Move>(), Ok(mv));
    }
    assert_eq!("F".parse::<Move>(), Ok(Move::cw(Face::F)));
    assert_eq!("F'".parse::<Move>(), Ok(Move::ccw(Face::F)));
}

#[test]
fn notation_errors() {
    for bad in ["", "X", "F2", "f", "FF", "'", "2R"] {
        assert!(bad.parse::<Move>().is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn sequence_notation() {
    let moves = parse_moves("F R' U").unwrap();
    assert_eq!(
        moves,
        vec![Move::cw(Face::F), Move::ccw(Face::R), Move::cw(Face::U)]
    );
    assert_eq!(format_moves(moves), "F R' U");
    assert_eq!(parse_moves(""), Ok(vec![]));
    assert!(parse_moves("F R2").is_err());
}

#[test]
fn inverse_reverses_and_flips() {
    let history = parse_moves("F R' U").unwrap();
    assert_eq!(format_moves(inverse(&history)), "U' R F'");
    assert_eq!(inverse(&[]), vec![]);
}

#[test]
fn scramble_is_seed_stable() {
    let params = ScrambleParams {
        length: 20,
        seed: 42,
    };
    assert_eq!(params.generate(), params.generate());
    assert_eq!(params.generate().len(), 20);
}

#[test]
fn scramble_params_fresh_seed() {
    let params = ScrambleParams::new(DEFAULT_SCRAMBLE_LENGTH);
    assert_eq!(params.length, DEFAULT_SCRAMBLE_LENGTH);
    assert_eq!(params.generate().len(), DEFAULT_SCRAMBLE_LENGTH as usize);
}

prop_compose! {
    fn arbitrary_move()(face_idx in 0..Face::ALL.len(), clockwise in any::<bool>()) -> Move {
        Move { face: Face::ALL[face_idx], clockwise }
    }
}

proptest! {
    #[test]
    fn proptest_sticker_conservation(moves in prop::collection::vec(arbitrary_move(), 0..40)) {
        let state = apply_all(&CubeState::solved(), &moves);
        prop_assert_eq!(state.sticker_counts(), [LAYER_SIZE; 6]);
    }

    #[test]
    fn proptest_inverse_law(moves in prop::collection::vec(arbitrary_move(), 0..40)) {
        let start = CubeState::solved();
        let shuffled = apply_all(&start, &moves);
        let restored = apply_all(&shuffled, &inverse(&moves));
        prop_assert_eq!(restored, start);
    }

    #[test]
    fn proptest_round_trip(
        mv in arbitrary_move(),
        prefix in prop::collection::vec(arbitrary_move(), 0..20),
    ) {
        let state = apply_all(&CubeState::solved(), &prefix);
        prop_assert_eq!(rotate(&rotate(&state, mv), mv.rev()), state);
    }
}
