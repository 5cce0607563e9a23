//! Cubie-level cube state.
//!
//! ## Pieces and slots
//!
//! The eight corners and twelve edges are named after the faces they touch.
//! A *slot* is a place a piece can sit; slots are named after the piece that
//! belongs there, so `Corner::DFR` is both a piece and a slot.
//!
//! ## Orientation
//!
//! Every slot lists its facelets in a fixed order starting on the Up or Down
//! face (for the four middle edge slots, on Front or Back). A corner's
//! orientation is the position in its slot's list of the piece's Up/Down
//! sticker; an edge's orientation is 1 when its first sticker is off the
//! slot's first facelet. On a reachable cube twists sum to 0 mod 3 and flips
//! to 0 mod 2.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::color::{ColorScheme, Face};
use super::facelet::{facelet_index, CubeState};

/// A corner piece, or the slot it belongs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Corner {
    URF,
    UFL,
    ULB,
    UBR,
    DFR,
    DLF,
    DBL,
    DRB,
}

/// An edge piece, or the slot it belongs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Edge {
    UR,
    UF,
    UL,
    UB,
    DR,
    DF,
    DL,
    DB,
    FR,
    FL,
    BL,
    BR,
}

impl Corner {
    pub const ALL: [Corner; 8] = [
        Corner::URF,
        Corner::UFL,
        Corner::ULB,
        Corner::UBR,
        Corner::DFR,
        Corner::DLF,
        Corner::DBL,
        Corner::DRB,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Faces touched by this corner, clockwise starting on Up/Down.
    #[must_use]
    pub const fn faces(self) -> [Face; 3] {
        CORNER_FACES[self as usize]
    }

    /// Facelet indices of this slot, in the same order as [`Corner::faces`].
    #[must_use]
    pub const fn facelets(self) -> [usize; 3] {
        CORNER_FACELETS[self as usize]
    }
}

impl Edge {
    pub const ALL: [Edge; 12] = [
        Edge::UR,
        Edge::UF,
        Edge::UL,
        Edge::UB,
        Edge::DR,
        Edge::DF,
        Edge::DL,
        Edge::DB,
        Edge::FR,
        Edge::FL,
        Edge::BL,
        Edge::BR,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn faces(self) -> [Face; 2] {
        EDGE_FACES[self as usize]
    }

    #[must_use]
    pub const fn facelets(self) -> [usize; 2] {
        EDGE_FACELETS[self as usize]
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in self.faces() {
            write!(f, "{face}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in self.faces() {
            write!(f, "{face}")?;
        }
        Ok(())
    }
}

use Face::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};

const CORNER_FACES: [[Face; 3]; 8] = [
    [U, R, F],
    [U, F, L],
    [U, L, B],
    [U, B, R],
    [D, F, R],
    [D, L, F],
    [D, B, L],
    [D, R, B],
];

const EDGE_FACES: [[Face; 2]; 12] = [
    [U, R],
    [U, F],
    [U, L],
    [U, B],
    [D, R],
    [D, F],
    [D, L],
    [D, B],
    [F, R],
    [F, L],
    [B, L],
    [B, R],
];

const CORNER_FACELETS: [[usize; 3]; 8] = [
    [facelet_index(U, 8), facelet_index(R, 0), facelet_index(F, 2)],
    [facelet_index(U, 6), facelet_index(F, 0), facelet_index(L, 2)],
    [facelet_index(U, 0), facelet_index(L, 0), facelet_index(B, 2)],
    [facelet_index(U, 2), facelet_index(B, 0), facelet_index(R, 2)],
    [facelet_index(D, 2), facelet_index(F, 8), facelet_index(R, 6)],
    [facelet_index(D, 0), facelet_index(L, 8), facelet_index(F, 6)],
    [facelet_index(D, 6), facelet_index(B, 8), facelet_index(L, 6)],
    [facelet_index(D, 8), facelet_index(R, 8), facelet_index(B, 6)],
];

const EDGE_FACELETS: [[usize; 2]; 12] = [
    [facelet_index(U, 5), facelet_index(R, 1)],
    [facelet_index(U, 7), facelet_index(F, 1)],
    [facelet_index(U, 3), facelet_index(L, 1)],
    [facelet_index(U, 1), facelet_index(B, 1)],
    [facelet_index(D, 5), facelet_index(R, 7)],
    [facelet_index(D, 1), facelet_index(F, 7)],
    [facelet_index(D, 3), facelet_index(L, 7)],
    [facelet_index(D, 7), facelet_index(B, 7)],
    [facelet_index(F, 5), facelet_index(R, 3)],
    [facelet_index(F, 3), facelet_index(L, 5)],
    [facelet_index(B, 5), facelet_index(L, 3)],
    [facelet_index(B, 3), facelet_index(R, 5)],
];

/// Permutation and orientation of every corner and edge.
///
/// `cp[slot]` is the corner sitting in `slot` and `co[slot]` its twist;
/// `ep`/`eo` likewise for edges. Centers never move and are not stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CubieCube {
    pub(crate) cp: [Corner; 8],
    pub(crate) co: [u8; 8],
    pub(crate) ep: [Edge; 12],
    pub(crate) eo: [u8; 12],
}

impl CubieCube {
    #[must_use]
    pub const fn solved() -> Self {
        Self {
            cp: Corner::ALL,
            co: [0; 8],
            ep: Edge::ALL,
            eo: [0; 12],
        }
    }

    /// Corner in `slot` and its twist.
    #[must_use]
    pub fn corner(&self, slot: Corner) -> (Corner, u8) {
        (self.cp[slot.index()], self.co[slot.index()])
    }

    /// Edge in `slot` and its flip.
    #[must_use]
    pub fn edge(&self, slot: Edge) -> (Edge, u8) {
        (self.ep[slot.index()], self.eo[slot.index()])
    }

    /// Slot holding `piece`, and the piece's twist there.
    #[must_use]
    pub fn locate_corner(&self, piece: Corner) -> (Corner, u8) {
        let slot = self.cp.iter().position(|&c| c == piece).unwrap_or(piece.index());
        (Corner::ALL[slot], self.co[slot])
    }

    /// Slot holding `piece`, and the piece's flip there.
    #[must_use]
    pub fn locate_edge(&self, piece: Edge) -> (Edge, u8) {
        let slot = self.ep.iter().position(|&e| e == piece).unwrap_or(piece.index());
        (Edge::ALL[slot], self.eo[slot])
    }

    /// True when `piece` sits in its own slot with zero twist.
    #[must_use]
    pub fn corner_home(&self, piece: Corner) -> bool {
        self.corner(piece) == (piece, 0)
    }

    /// True when `piece` sits in its own slot unflipped.
    #[must_use]
    pub fn edge_home(&self, piece: Edge) -> bool {
        self.edge(piece) == (piece, 0)
    }

    /// Parity (0 even, 1 odd) of the corner permutation.
    #[must_use]
    pub fn corner_parity(&self) -> u8 {
        permutation_parity(&self.cp.map(Corner::index))
    }

    /// Parity (0 even, 1 odd) of the edge permutation.
    #[must_use]
    pub fn edge_parity(&self) -> u8 {
        permutation_parity(&self.ep.map(Edge::index))
    }

    /// Sum of corner twists mod 3.
    #[must_use]
    pub fn twist(&self) -> u8 {
        self.co.iter().sum::<u8>() % 3
    }

    /// Sum of edge flips mod 2.
    #[must_use]
    pub fn flip(&self) -> u8 {
        self.eo.iter().sum::<u8>() % 2
    }

    /// Paint the cube with the given center colors.
    #[must_use]
    pub fn to_cube_state(&self, scheme: &ColorScheme) -> CubeState {
        let mut facelets = *CubeState::solved_with_scheme(scheme).facelets();
        for slot in Corner::ALL {
            let (piece, twist) = self.corner(slot);
            let positions = slot.facelets();
            for (t, face) in piece.faces().into_iter().enumerate() {
                facelets[positions[(t + usize::from(twist)) % 3]] = scheme[face.index()];
            }
        }
        for slot in Edge::ALL {
            let (piece, flip) = self.edge(slot);
            let positions = slot.facelets();
            for (t, face) in piece.faces().into_iter().enumerate() {
                facelets[positions[(t + usize::from(flip)) % 2]] = scheme[face.index()];
            }
        }
        CubeState::from_facelets(facelets)
    }
}

impl Default for CubieCube {
    fn default() -> Self {
        Self::solved()
    }
}

fn permutation_parity(perm: &[usize]) -> u8 {
    let mut inversions = 0usize;
    for i in 0..perm.len() {
        for j in i + 1..perm.len() {
            if perm[i] > perm[j] {
                inversions += 1;
            }
        }
    }
    (inversions % 2) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::STANDARD_SCHEME;

    #[test]
    fn test_slot_facelets_touch_their_faces() {
        for corner in Corner::ALL {
            for (face, facelet) in corner.faces().into_iter().zip(corner.facelets()) {
                assert_eq!(facelet / 9, face.index(), "{corner}");
            }
        }
        for edge in Edge::ALL {
            for (face, facelet) in edge.faces().into_iter().zip(edge.facelets()) {
                assert_eq!(facelet / 9, face.index(), "{edge}");
            }
        }
    }

    #[test]
    fn test_every_non_center_facelet_is_covered_once() {
        let mut seen = [0u8; 54];
        for corner in Corner::ALL {
            for f in corner.facelets() {
                seen[f] += 1;
            }
        }
        for edge in Edge::ALL {
            for f in edge.facelets() {
                seen[f] += 1;
            }
        }
        for (i, count) in seen.iter().enumerate() {
            let expected = u8::from(i % 9 != 4);
            assert_eq!(*count, expected, "facelet {i}");
        }
    }

    #[test]
    fn test_solved_paints_solved() {
        let state = CubieCube::solved().to_cube_state(&STANDARD_SCHEME);
        assert_eq!(state, CubeState::solved());
    }

    #[test]
    fn test_locate() {
        let mut cube = CubieCube::solved();
        cube.cp.swap(Corner::URF.index(), Corner::DRB.index());
        cube.eo[Edge::FL.index()] = 1;

        assert_eq!(cube.locate_corner(Corner::URF), (Corner::DRB, 0));
        assert!(!cube.corner_home(Corner::DRB));
        assert_eq!(cube.locate_edge(Edge::FL), (Edge::FL, 1));
        assert!(!cube.edge_home(Edge::FL));
        assert_eq!(cube.corner_parity(), 1);
        assert_eq!(cube.edge_parity(), 0);
        assert_eq!(cube.flip(), 1);
    }

    #[test]
    fn test_names() {
        assert_eq!(Corner::DLF.to_string(), "DLF");
        assert_eq!(Edge::BR.to_string(), "BR");
    }
}
