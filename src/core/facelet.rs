//! Facelet-level cube state.
//!
//! A [`CubeState`] is the 54 visible stickers of the cube, six faces of nine
//! in face order `U R F D L B`. Within a face the stickers are numbered
//! row-major as seen from outside the cube:
//!
//! ```text
//!              U0 U1 U2
//!              U3 U4 U5
//!              U6 U7 U8
//!   L0 L1 L2   F0 F1 F2   R0 R1 R2   B0 B1 B2
//!   L3 L4 L5   F3 F4 F5   R3 R4 R5   B3 B4 B5
//!   L6 L7 L8   F6 F7 F8   R6 R7 R8   B6 B7 B8
//!              D0 D1 D2
//!              D3 D4 D5
//!              D6 D7 D8
//! ```
//!
//! States are values: moves produce new states (see [`crate::engine`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::color::{Color, ColorScheme, Face, STANDARD_SCHEME};

/// Number of facelets on a 3x3x3 cube.
pub const FACELET_COUNT: usize = 54;

/// Index of the center facelet within a face.
const CENTER: usize = 4;

/// Index of sticker `n` (0..9) of `face`.
#[must_use]
pub const fn facelet_index(face: Face, n: usize) -> usize {
    face.index() * 9 + n
}

/// Error parsing the 54-letter text form of a cube.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCubeError {
    #[error("expected 54 facelets, found {0}")]
    Length(usize),
    #[error("'{letter}' at facelet {index} is not a color letter")]
    Letter { index: usize, letter: char },
}

/// The colors of all 54 stickers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CubeState {
    facelets: [Color; FACELET_COUNT],
}

impl CubeState {
    /// The solved cube in the standard color scheme.
    #[must_use]
    pub fn solved() -> Self {
        Self::solved_with_scheme(&STANDARD_SCHEME)
    }

    /// The solved cube whose face `f` shows `scheme[f.index()]`.
    #[must_use]
    pub fn solved_with_scheme(scheme: &ColorScheme) -> Self {
        let mut facelets = [Color::White; FACELET_COUNT];
        for (i, facelet) in facelets.iter_mut().enumerate() {
            *facelet = scheme[i / 9];
        }
        Self { facelets }
    }

    #[must_use]
    pub const fn from_facelets(facelets: [Color; FACELET_COUNT]) -> Self {
        Self { facelets }
    }

    #[must_use]
    pub const fn facelets(&self) -> &[Color; FACELET_COUNT] {
        &self.facelets
    }

    /// Color of the facelet at `index`.
    ///
    /// # Panics
    /// If `index >= 54`.
    #[must_use]
    pub fn facelet(&self, index: usize) -> Color {
        self.facelets[index]
    }

    /// The nine stickers of a face.
    #[must_use]
    pub fn face(&self, face: Face) -> [Color; 9] {
        let start = face.index() * 9;
        let mut out = [Color::White; 9];
        out.copy_from_slice(&self.facelets[start..start + 9]);
        out
    }

    /// Color of a face's center sticker.
    #[must_use]
    pub fn center(&self, face: Face) -> Color {
        self.facelets[facelet_index(face, CENTER)]
    }

    /// The six center colors, indexed by face.
    #[must_use]
    pub fn scheme(&self) -> ColorScheme {
        Face::ALL.map(|face| self.center(face))
    }

    /// True when every face shows a single color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.facelets
            .chunks_exact(9)
            .all(|face| face.iter().all(|&color| color == face[CENTER]))
    }

    /// Multi-line unfolded net, as drawn in the module docs.
    #[must_use]
    pub fn net(&self) -> String {
        let row = |face: Face, r: usize| -> String {
            (0..3).map(|c| self.facelets[facelet_index(face, r * 3 + c)].letter()).collect()
        };
        let mut out = String::new();
        for r in 0..3 {
            out.push_str(&format!("    {}\n", row(Face::Up, r)));
        }
        for r in 0..3 {
            out.push_str(&format!(
                "{} {} {} {}\n",
                row(Face::Left, r),
                row(Face::Front, r),
                row(Face::Right, r),
                row(Face::Back, r)
            ));
        }
        for r in 0..3 {
            out.push_str(&format!("    {}\n", row(Face::Down, r)));
        }
        out
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.facelets {
            write!(f, "{}", color.letter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CubeState({self})")
    }
}

impl FromStr for CubeState {
    type Err = ParseCubeError;

    /// Parse 54 color letters in facelet order; whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if letters.len() != FACELET_COUNT {
            return Err(ParseCubeError::Length(letters.len()));
        }
        let mut facelets = [Color::White; FACELET_COUNT];
        for (index, (&letter, facelet)) in letters.iter().zip(facelets.iter_mut()).enumerate() {
            *facelet = Color::from_letter(letter).ok_or(ParseCubeError::Letter { index, letter })?;
        }
        Ok(Self { facelets })
    }
}

impl TryFrom<String> for CubeState {
    type Error = ParseCubeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CubeState> for String {
    fn from(state: CubeState) -> Self {
        state.to_string()
    }
}
