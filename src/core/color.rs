//! Faces and sticker colors.
//!
//! Faces are named by their position on the cube (Up, Right, Front, Down,
//! Left, Back); colors are what the stickers show. The two are only related
//! through a color scheme: the six center colors of a concrete cube.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six faces of the cube.
///
/// The declaration order is the facelet order used throughout the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Face {
    Up,
    Right,
    Front,
    Down,
    Left,
    Back,
}

impl Face {
    /// All faces in facelet order.
    pub const ALL: [Face; 6] = [Face::Up, Face::Right, Face::Front, Face::Down, Face::Left, Face::Back];

    /// Index of this face in facelet order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Face at the given index in facelet order.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Face> {
        if index < 6 {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// The face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Right => Face::Left,
            Face::Front => Face::Back,
            Face::Down => Face::Up,
            Face::Left => Face::Right,
            Face::Back => Face::Front,
        }
    }

    /// Single-letter notation (`U R F D L B`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Back => 'B',
        }
    }

    /// Parse a notation letter.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Face> {
        Self::ALL.into_iter().find(|face| face.letter() == letter)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A sticker color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Blue,
    Green,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Blue,
        Color::Green,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter form (`W Y R O B G`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Blue => 'B',
            Color::Green => 'G',
        }
    }

    #[must_use]
    pub fn from_letter(letter: char) -> Option<Color> {
        let upper = letter.to_ascii_uppercase();
        Self::ALL.into_iter().find(|color| color.letter() == upper)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Blue => "blue",
            Color::Green => "green",
        };
        f.write_str(name)
    }
}

/// Center color of every face, indexed by [`Face::index`].
pub type ColorScheme = [Color; 6];

/// Yellow on top, white on the bottom, red in front, blue on the right.
pub const STANDARD_SCHEME: ColorScheme = [
    Color::Yellow, // Up
    Color::Blue,   // Right
    Color::Red,    // Front
    Color::White,  // Down
    Color::Green,  // Left
    Color::Orange, // Back
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites_pair_up() {
        for face in Face::ALL {
            assert_ne!(face, face.opposite());
            assert_eq!(face, face.opposite().opposite());
        }
    }

    #[test]
    fn test_letters_round_trip() {
        for face in Face::ALL {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
        }
        for color in Color::ALL {
            assert_eq!(Color::from_letter(color.letter()), Some(color));
        }
        assert_eq!(Color::from_letter('g'), Some(Color::Green));
        assert_eq!(Face::from_letter('X'), None);
    }

    #[test]
    fn test_standard_scheme_is_a_permutation() {
        let mut seen = [false; 6];
        for color in STANDARD_SCHEME {
            assert!(!seen[color.index()]);
            seen[color.index()] = true;
        }
        assert_eq!(STANDARD_SCHEME[Face::Up.index()], Color::Yellow);
        assert_eq!(STANDARD_SCHEME[Face::Down.index()], Color::White);
    }

    #[test]
    fn test_face_index() {
        for (i, face) in Face::ALL.into_iter().enumerate() {
            assert_eq!(face.index(), i);
            assert_eq!(Face::from_index(i), Some(face));
        }
        assert_eq!(Face::from_index(6), None);
    }
}
