//! The move engine: applying face turns to cube states.
//!
//! Both state representations implement [`PuzzleState`]:
//! - [`CubeState`] permutes its 54 facelets
//! - [`CubieCube`] permutes and reorients its 20 pieces
//!
//! Both are driven by the same geometric move tables, so applying a sequence
//! to a cubie cube and painting it gives the same facelets as applying the
//! sequence to the painted cube.

use crate::core::{CubeState, CubieCube, FACELET_COUNT};
use crate::moves::tables::MOVE_TABLES;
use crate::moves::Move;

/// A cube representation that face turns act on.
///
/// ## Implementation Notes
///
/// - `apply` is total and deterministic; it never fails
/// - states are values, `apply` returns a new one
pub trait PuzzleState: Clone {
    /// The state after turning one face.
    #[must_use]
    fn apply(&self, mv: Move) -> Self;

    /// The state after a sequence of moves, applied in order.
    #[must_use]
    fn apply_sequence<'a, I>(&self, moves: I) -> Self
    where
        I: IntoIterator<Item = &'a Move>,
    {
        moves.into_iter().fold(self.clone(), |state, &mv| state.apply(mv))
    }

    /// True for the solved cube.
    fn is_solved(&self) -> bool;
}

impl PuzzleState for CubeState {
    fn apply(&self, mv: Move) -> Self {
        let perm = &MOVE_TABLES.facelets[mv.index()];
        let old = self.facelets();
        let mut facelets = *old;
        for i in 0..FACELET_COUNT {
            facelets[i] = old[usize::from(perm[i])];
        }
        CubeState::from_facelets(facelets)
    }

    fn is_solved(&self) -> bool {
        CubeState::is_solved(self)
    }
}

impl PuzzleState for CubieCube {
    fn apply(&self, mv: Move) -> Self {
        let table = &MOVE_TABLES.cubies[mv.index()];
        let mut next = *self;
        for (slot, &(from, twist)) in table.corners.iter().enumerate() {
            let from = usize::from(from);
            next.cp[slot] = self.cp[from];
            next.co[slot] = (self.co[from] + twist) % 3;
        }
        for (slot, &(from, flip)) in table.edges.iter().enumerate() {
            let from = usize::from(from);
            next.ep[slot] = self.ep[from];
            next.eo[slot] = (self.eo[from] + flip) % 2;
        }
        next
    }

    fn is_solved(&self) -> bool {
        *self == CubieCube::solved()
    }
}

/// Apply one move.
#[must_use]
pub fn apply<S: PuzzleState>(state: &S, mv: Move) -> S {
    state.apply(mv)
}

/// Apply moves left to right.
#[must_use]
pub fn apply_sequence<'a, S, I>(state: &S, moves: I) -> S
where
    S: PuzzleState,
    I: IntoIterator<Item = &'a Move>,
{
    state.apply_sequence(moves)
}

/// The move that undoes `mv`.
#[must_use]
pub fn inverse(mv: Move) -> Move {
    mv.inverse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Face, STANDARD_SCHEME};
    use crate::moves::{MoveSequence, Turn};

    fn seq(s: &str) -> MoveSequence {
        s.parse().unwrap()
    }

    #[test]
    fn test_r_four_times_is_identity() {
        let r = Move::new(Face::Right, Turn::Clockwise);
        let state = CubeState::solved();
        let once = apply(&state, r);
        assert_ne!(once, state);
        assert_eq!(apply_sequence(&state, &[r, r, r, r]), state);
    }

    #[test]
    fn test_inverse_undoes_move() {
        let start = CubeState::solved().apply_sequence(&seq("R U F' L2 D B"));
        for mv in Move::ALL {
            assert_eq!(start.apply(mv).apply(inverse(mv)), start, "{mv}");
        }
    }

    #[test]
    fn test_u_turn_moves_front_row_to_left() {
        // Turning U clockwise carries the front top row to the left face.
        let state = CubeState::solved().apply(Move::new(Face::Up, Turn::Clockwise));
        let left = state.face(Face::Left);
        assert_eq!(&left[0..3], &[Color::Red; 3]);
        assert_eq!(&left[3..9], &[Color::Green; 6]);
        assert_eq!(state.face(Face::Up), [Color::Yellow; 9]);
    }

    #[test]
    fn test_r_turn_moves_front_column_up() {
        let state = CubeState::solved().apply(Move::new(Face::Right, Turn::Clockwise));
        let up = state.face(Face::Up);
        assert_eq!([up[2], up[5], up[8]], [Color::Red; 3]);
        let back = state.face(Face::Back);
        assert_eq!([back[0], back[3], back[6]], [Color::Yellow; 3]);
    }

    #[test]
    fn test_cubie_and_facelet_agree() {
        let moves = seq("R U R' U' F2 D L' B U2 R2 F' D' L B2");
        let cubies = CubieCube::solved().apply_sequence(&moves);
        let facelets = CubeState::solved().apply_sequence(&moves);
        assert_eq!(cubies.to_cube_state(&STANDARD_SCHEME), facelets);
    }

    #[test]
    fn test_sexy_move_has_order_six() {
        let sexy = seq("R U R' U'");
        let mut cube = CubieCube::solved();
        for i in 1..=6 {
            cube = cube.apply_sequence(&sexy);
            assert_eq!(cube.is_solved(), i == 6);
        }
    }

    #[test]
    fn test_sequence_then_inverse() {
        let moves = seq("F R2 B' U D2 L");
        let cube = CubieCube::solved().apply_sequence(&moves).apply_sequence(&moves.inverse());
        assert!(PuzzleState::is_solved(&cube));
    }
}
