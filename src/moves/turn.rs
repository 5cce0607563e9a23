//! Single face turns and their notation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::core::Face;

/// How far a face is turned, as seen looking at that face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Turn {
    Clockwise,
    Half,
    CounterClockwise,
}

impl Turn {
    pub const ALL: [Turn; 3] = [Turn::Clockwise, Turn::Half, Turn::CounterClockwise];

    /// Number of clockwise quarter turns (1, 2 or 3).
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Turn::Clockwise => 1,
            Turn::Half => 2,
            Turn::CounterClockwise => 3,
        }
    }

    /// Turn for a number of clockwise quarter turns; `None` for a multiple of four.
    #[must_use]
    pub const fn from_quarter_turns(quarters: u8) -> Option<Turn> {
        match quarters % 4 {
            1 => Some(Turn::Clockwise),
            2 => Some(Turn::Half),
            3 => Some(Turn::CounterClockwise),
            _ => None,
        }
    }

    #[must_use]
    pub const fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::Half => Turn::Half,
            Turn::CounterClockwise => Turn::Clockwise,
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::Half => "2",
            Turn::CounterClockwise => "'",
        }
    }
}

/// One of the 18 face turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    /// Every move, face-major in facelet face order, then clockwise, half,
    /// counter-clockwise.
    pub const ALL: [Move; 18] = {
        let mut all = [Move::new(Face::Up, Turn::Clockwise); 18];
        let mut i = 0;
        while i < 18 {
            all[i] = Move::new(Face::ALL[i / 3], Turn::ALL[i % 3]);
            i += 1;
        }
        all
    };

    #[must_use]
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// Position of this move in [`Move::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self.face.index() * 3 + self.turn.quarter_turns() as usize - 1
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Move {
        Move::new(self.face, self.turn.inverse())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.turn.suffix())
    }
}

/// Error parsing move notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("empty move")]
    Empty,
    #[error("unknown face '{0}'")]
    UnknownFace(char),
    #[error("unknown turn suffix '{suffix}' in move '{token}'")]
    UnknownSuffix { token: String, suffix: String },
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parse `R`, `R2` or `R'`. `R2'` is accepted as a half turn.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(ParseMoveError::Empty)?;
        let face = Face::from_letter(letter).ok_or(ParseMoveError::UnknownFace(letter))?;
        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "2" | "2'" => Turn::Half,
            "'" | "’" => Turn::CounterClockwise,
            suffix => {
                return Err(ParseMoveError::UnknownSuffix {
                    token: s.to_string(),
                    suffix: suffix.to_string(),
                })
            }
        };
        Ok(Move::new(face, turn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_moves_distinct_and_indexed() {
        for (i, mv) in Move::ALL.into_iter().enumerate() {
            assert_eq!(mv.index(), i);
        }
        assert_eq!(Move::ALL[0], Move::new(Face::Up, Turn::Clockwise));
        assert_eq!(Move::ALL[17], Move::new(Face::Back, Turn::CounterClockwise));
    }

    #[test]
    fn test_inverse() {
        let r = Move::new(Face::Right, Turn::Clockwise);
        assert_eq!(r.inverse(), Move::new(Face::Right, Turn::CounterClockwise));
        assert_eq!(r.inverse().inverse(), r);
        let f2 = Move::new(Face::Front, Turn::Half);
        assert_eq!(f2.inverse(), f2);
    }

    #[test]
    fn test_quarter_turn_arithmetic() {
        for turn in Turn::ALL {
            assert_eq!(Turn::from_quarter_turns(turn.quarter_turns()), Some(turn));
            let total = turn.quarter_turns() + turn.inverse().quarter_turns();
            assert_eq!(Turn::from_quarter_turns(total), None);
        }
    }

    #[test]
    fn test_notation() {
        for mv in Move::ALL {
            assert_eq!(mv.to_string().parse::<Move>(), Ok(mv));
        }
        assert_eq!("U'".parse::<Move>().unwrap().to_string(), "U'");
        assert_eq!("D2".parse::<Move>().unwrap().turn, Turn::Half);
    }

    #[test]
    fn test_notation_errors() {
        assert_eq!("".parse::<Move>(), Err(ParseMoveError::Empty));
        assert_eq!("x".parse::<Move>(), Err(ParseMoveError::UnknownFace('x')));
        assert!(matches!(
            "R3".parse::<Move>(),
            Err(ParseMoveError::UnknownSuffix { .. })
        ));
    }
}
