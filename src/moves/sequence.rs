//! Ordered lists of moves.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use super::turn::{Move, ParseMoveError, Turn};

/// An ordered list of face turns.
///
/// Most case-table entries fit inline; a full solution spills to the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveSequence(SmallVec<[Move; 16]>);

impl MoveSequence {
    /// The empty (identity) sequence.
    #[must_use]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    #[must_use]
    pub fn from_moves(moves: &[Move]) -> Self {
        Self(SmallVec::from_slice(moves))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, mv: Move) {
        self.0.push(mv);
    }

    /// Append all moves of `other`.
    pub fn extend_from(&mut self, other: &MoveSequence) {
        self.0.extend_from_slice(&other.0);
    }

    /// `self` followed by `other`.
    #[must_use]
    pub fn concat(&self, other: &MoveSequence) -> MoveSequence {
        let mut out = self.clone();
        out.extend_from(other);
        out
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    /// The sequence that undoes this one: reversed, each move inverted.
    #[must_use]
    pub fn inverse(&self) -> MoveSequence {
        self.0.iter().rev().map(|mv| mv.inverse()).collect()
    }

    /// Merge adjacent turns of the same face, dropping those that cancel.
    ///
    /// The result reaches the same state and never has two neighbouring moves
    /// on one face.
    #[must_use]
    pub fn reduced(&self) -> MoveSequence {
        let mut out: SmallVec<[Move; 16]> = SmallVec::with_capacity(self.0.len());
        for &mv in &self.0 {
            match out.last().copied() {
                Some(last) if last.face == mv.face => {
                    let quarters = last.turn.quarter_turns() + mv.turn.quarter_turns();
                    out.pop();
                    if let Some(turn) = Turn::from_quarter_turns(quarters) {
                        out.push(Move::new(mv.face, turn));
                    }
                }
                _ => out.push(mv),
            }
        }
        Self(out)
    }

    /// Quarter-turn count, half turns counting two.
    #[must_use]
    pub fn quarter_turn_count(&self) -> usize {
        self.0
            .iter()
            .map(|mv| if mv.turn == Turn::Half { 2 } else { 1 })
            .sum()
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Move> for MoveSequence {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for MoveSequence {
    type Item = Move;
    type IntoIter = smallvec::IntoIter<[Move; 16]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Move> for MoveSequence {
    fn from(mv: Move) -> Self {
        Self::from_moves(&[mv])
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

impl FromStr for MoveSequence {
    type Err = ParseMoveError;

    /// Parse whitespace-separated notation, e.g. `R U R' U'`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse::<Move>).collect()
    }
}
