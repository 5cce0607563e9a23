//! Reachability checks and the facelet → cubie conversion.
//!
//! Center colors define the color scheme, so any cube whose six centers are
//! distinct is accepted, not just the standard scheme. Every sticker is then
//! read as the face its color belongs to, and each corner and edge slot is
//! matched against the twenty pieces.

use crate::core::{Color, Corner, CubeState, CubieCube, Edge, Face};

use super::error::{InvalidCubeError, Piece, TwistDefect};

/// Check that `state` can be reached from solved by face turns.
pub fn validate(state: &CubeState) -> Result<(), InvalidCubeError> {
    to_cubies(state).map(|_| ())
}

/// Run every check and return the cubie view of `state`.
///
/// Checks, in order: color counts, centers, pieces, permutation parity,
/// corner twist, edge flip.
pub fn to_cubies(state: &CubeState) -> Result<CubieCube, InvalidCubeError> {
    check_color_counts(state)?;
    let face_of = face_of_color(state)?;
    let sticker_face = |index: usize| face_of[state.facelet(index).index()];

    let mut cube = CubieCube::solved();
    let mut mirrored = None;

    let mut seen_corners = [false; 8];
    for slot in Corner::ALL {
        let faces = slot.facelets().map(sticker_face);
        let (piece, twist, chiral) =
            read_corner(faces).ok_or(InvalidCubeError::UnknownPiece(Piece::Corner(slot)))?;
        if std::mem::replace(&mut seen_corners[piece.index()], true) {
            return Err(InvalidCubeError::DuplicatePiece(Piece::Corner(piece)));
        }
        if !chiral && mirrored.is_none() {
            mirrored = Some(slot);
        }
        cube.cp[slot.index()] = piece;
        cube.co[slot.index()] = twist;
    }

    let mut seen_edges = [false; 12];
    for slot in Edge::ALL {
        let faces = slot.facelets().map(sticker_face);
        let (piece, flip) =
            read_edge(faces).ok_or(InvalidCubeError::UnknownPiece(Piece::Edge(slot)))?;
        if std::mem::replace(&mut seen_edges[piece.index()], true) {
            return Err(InvalidCubeError::DuplicatePiece(Piece::Edge(piece)));
        }
        cube.ep[slot.index()] = piece;
        cube.eo[slot.index()] = flip;
    }

    let (corners, edges) = (cube.corner_parity(), cube.edge_parity());
    if corners != edges {
        return Err(InvalidCubeError::Parity { corners, edges });
    }
    if let Some(slot) = mirrored {
        return Err(InvalidCubeError::CornerTwist(TwistDefect::Mirrored(slot)));
    }
    if cube.twist() != 0 {
        return Err(InvalidCubeError::CornerTwist(TwistDefect::Sum(cube.twist())));
    }
    if cube.flip() != 0 {
        return Err(InvalidCubeError::EdgeFlip);
    }
    Ok(cube)
}

fn check_color_counts(state: &CubeState) -> Result<(), InvalidCubeError> {
    let mut counts = [0usize; 6];
    for color in state.facelets() {
        counts[color.index()] += 1;
    }
    match Color::ALL.into_iter().find(|c| counts[c.index()] != 9) {
        Some(color) => Err(InvalidCubeError::ColorCount {
            color,
            count: counts[color.index()],
        }),
        None => Ok(()),
    }
}

/// Face each color belongs to, indexed by [`Color::index`].
fn face_of_color(state: &CubeState) -> Result<[Face; 6], InvalidCubeError> {
    let mut face_of = [None; 6];
    for face in Face::ALL {
        let slot = &mut face_of[state.center(face).index()];
        if slot.is_some() {
            return Err(InvalidCubeError::Centers);
        }
        *slot = Some(face);
    }
    let mut out = [Face::Up; 6];
    for (face, found) in out.iter_mut().zip(face_of) {
        *face = found.ok_or(InvalidCubeError::Centers)?;
    }
    Ok(out)
}

fn is_vertical(face: Face) -> bool {
    matches!(face, Face::Up | Face::Down)
}

/// Piece, twist, and whether the stickers run in the piece's own clockwise order.
fn read_corner(faces: [Face; 3]) -> Option<(Corner, u8, bool)> {
    let twist = faces.iter().position(|&f| is_vertical(f))?;
    let mut sorted = faces;
    sorted.sort();
    let piece = Corner::ALL.into_iter().find(|piece| {
        let mut own = piece.faces();
        own.sort();
        own == sorted
    })?;
    let own = piece.faces();
    let chiral = faces[(twist + 1) % 3] == own[1] && faces[(twist + 2) % 3] == own[2];
    Some((piece, twist as u8, chiral))
}

fn read_edge(faces: [Face; 2]) -> Option<(Edge, u8)> {
    Edge::ALL.into_iter().find_map(|piece| {
        let own = piece.faces();
        if faces == own {
            Some((piece, 0))
        } else if faces == [own[1], own[0]] {
            Some((piece, 1))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{facelet_index, STANDARD_SCHEME};
    use crate::engine::PuzzleState;
    use crate::moves::MoveSequence;

    fn scrambled() -> CubeState {
        let moves: MoveSequence = "R U2 F' L D B2 R' U F2 D' L2 B".parse().unwrap();
        CubeState::solved().apply_sequence(&moves)
    }

    fn swap(state: &CubeState, a: usize, b: usize) -> CubeState {
        let mut facelets = *state.facelets();
        facelets.swap(a, b);
        CubeState::from_facelets(facelets)
    }

    #[test]
    fn test_solved_and_scrambled_are_valid() {
        assert_eq!(validate(&CubeState::solved()), Ok(()));
        assert_eq!(to_cubies(&CubeState::solved()), Ok(CubieCube::solved()));
        assert_eq!(validate(&scrambled()), Ok(()));
    }

    #[test]
    fn test_conversion_matches_cubie_moves() {
        let moves: MoveSequence = "R U2 F' L D B2 R' U F2 D' L2 B".parse().unwrap();
        let expected = CubieCube::solved().apply_sequence(&moves);
        assert_eq!(to_cubies(&scrambled()), Ok(expected));
        assert_eq!(expected.to_cube_state(&STANDARD_SCHEME), scrambled());
    }

    #[test]
    fn test_color_count() {
        let mut facelets = *CubeState::solved().facelets();
        facelets[0] = Color::White;
        let err = validate(&CubeState::from_facelets(facelets)).unwrap_err();
        assert_eq!(err, InvalidCubeError::ColorCount { color: Color::White, count: 10 });
    }

    #[test]
    fn test_duplicate_centers() {
        let up = facelet_index(Face::Up, 4);
        let front = facelet_index(Face::Front, 4);
        let state = swap(&CubeState::solved(), up, facelet_index(Face::Front, 0));
        // Counts are intact but two faces now claim red as their center.
        assert_eq!(state.center(Face::Up), state.center(Face::Front));
        assert_eq!(state.facelet(front), Color::Red);
        assert_eq!(validate(&state), Err(InvalidCubeError::Centers));
    }

    #[test]
    fn test_swapped_edge_pieces_fail_parity() {
        // Exchange the UF and UB edges by moving their stickers.
        let (uf, ub) = (Edge::UF.facelets(), Edge::UB.facelets());
        let state = swap(&swap(&CubeState::solved(), uf[0], ub[0]), uf[1], ub[1]);
        assert_eq!(
            validate(&state),
            Err(InvalidCubeError::Parity { corners: 0, edges: 1 })
        );
    }

    #[test]
    fn test_corner_stickers_swapped_in_place() {
        let [a, b, _] = Corner::URF.facelets();
        let state = swap(&scrambled(), a, b);
        assert!(matches!(validate(&state), Err(InvalidCubeError::CornerTwist(_))));
    }

    #[test]
    fn test_twisted_corner() {
        let [a, b, c] = Corner::DFR.facelets();
        let mut facelets = *CubeState::solved().facelets();
        let (x, y, z) = (facelets[a], facelets[b], facelets[c]);
        facelets[a] = z;
        facelets[b] = x;
        facelets[c] = y;
        assert!(matches!(
            validate(&CubeState::from_facelets(facelets)),
            Err(InvalidCubeError::CornerTwist(TwistDefect::Sum(_)))
        ));
    }

    #[test]
    fn test_flipped_edge() {
        let [a, b] = Edge::FR.facelets();
        let state = swap(&CubeState::solved(), a, b);
        assert_eq!(validate(&state), Err(InvalidCubeError::EdgeFlip));
    }

    #[test]
    fn test_unknown_piece() {
        // Two red stickers on one edge: counts balance elsewhere but no such edge exists.
        let uf = Edge::UF.facelets();
        let state = swap(&CubeState::solved(), uf[0], facelet_index(Face::Front, 0));
        assert!(matches!(
            validate(&state),
            Err(InvalidCubeError::UnknownPiece(_))
        ));
    }

    #[test]
    fn test_custom_scheme_is_accepted() {
        let scheme = [Color::White, Color::Red, Color::Green, Color::Yellow, Color::Orange, Color::Blue];
        let moves: MoveSequence = "F2 R' D U' B".parse().unwrap();
        let state = CubeState::solved_with_scheme(&scheme).apply_sequence(&moves);
        assert_eq!(to_cubies(&state), Ok(CubieCube::solved().apply_sequence(&moves)));
    }
}
