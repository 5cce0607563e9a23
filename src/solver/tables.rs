//! Case tables.
//!
//! Every table is generated from the move tables when first needed and is
//! read-only afterwards, so any number of solves may share them.
//!
//! ## Piece tables
//!
//! The first three stages place one piece at a time. Their tables map
//! `(piece, slot, orientation)` to a move sequence that brings the piece home
//! without disturbing the pieces of the stage already placed. Entries are
//! shortest paths, found by searching over the piece's position alone.
//!
//! ## Pattern tables
//!
//! The last-layer stages recognise named cases. The key of each case is
//! computed by undoing its algorithm on a solved cube, then lookups try the
//! four turns of the top face until a key matches.

use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::hash::Hash;
use std::sync::LazyLock;

use crate::core::{Corner, CubieCube, Edge, Face};
use crate::engine::PuzzleState;
use crate::moves::{Move, MoveSequence, Turn};

use super::{corners, cross, last_layer, middle};

/// `U`, `U2`, `U'`.
pub(crate) const U_TURNS: [Move; 3] = [
    Move::new(Face::Up, Turn::Clockwise),
    Move::new(Face::Up, Turn::Half),
    Move::new(Face::Up, Turn::CounterClockwise),
];

/// Case table for a stage that places pieces one at a time.
#[derive(Debug)]
pub(crate) struct PieceTable<P> {
    entries: FxHashMap<(P, P, u8), MoveSequence>,
}

impl<P: Copy + Eq + Hash> PieceTable<P> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, target: P, slot: P, orientation: u8, moves: MoveSequence) {
        self.entries.insert((target, slot, orientation), moves);
    }

    #[must_use]
    pub fn get(&self, target: P, slot: P, orientation: u8) -> Option<&MoveSequence> {
        self.entries.get(&(target, slot, orientation))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Length of the longest entry.
    #[must_use]
    pub fn longest(&self) -> usize {
        self.entries.values().map(MoveSequence::len).max().unwrap_or(0)
    }
}

/// A recognised last-layer case.
#[derive(Clone, Debug)]
pub(crate) struct NamedCase {
    pub name: &'static str,
    pub moves: MoveSequence,
    /// Top-face turn that aligns the layer after the algorithm.
    pub finish: Option<Move>,
}

impl NamedCase {
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len() + usize::from(self.finish.is_some())
    }
}

/// A matched case and the top-face turn applied before it.
pub(crate) struct Recognised<'a> {
    pub setup: Option<Move>,
    pub case: &'a NamedCase,
}

impl Recognised<'_> {
    /// Setup turn, algorithm, finishing turn.
    #[must_use]
    pub fn moves(&self) -> MoveSequence {
        let mut moves = MoveSequence::new();
        moves.extend(self.setup);
        moves.extend_from(&self.case.moves);
        moves.extend(self.case.finish);
        moves
    }
}

/// Case table keyed by a pattern read off the last layer.
pub(crate) struct PatternTable<K> {
    cases: FxHashMap<K, NamedCase>,
    key: fn(&CubieCube) -> K,
}

impl<K: Eq + Hash> PatternTable<K> {
    /// Build from `(name, notation)` pairs. Each algorithm is registered once
    /// per finishing turn in `finishes`; the solved pattern maps to an empty
    /// case named `solved`.
    ///
    /// # Panics
    /// If a notation string does not parse.
    pub fn build(
        algorithms: &[(&'static str, &'static str)],
        finishes: &[Option<Move>],
        key: fn(&CubieCube) -> K,
    ) -> Self {
        let mut cases = FxHashMap::default();
        cases.insert(
            key(&CubieCube::solved()),
            NamedCase {
                name: "solved",
                moves: MoveSequence::new(),
                finish: None,
            },
        );
        for &(name, notation) in algorithms {
            let moves: MoveSequence = notation
                .parse()
                .unwrap_or_else(|err| panic!("algorithm {name} ({notation}): {err}"));
            for &finish in finishes {
                let case = NamedCase {
                    name,
                    moves: moves.clone(),
                    finish,
                };
                let mut full = case.moves.clone();
                full.extend(finish);
                let pattern = key(&CubieCube::solved().apply_sequence(&full.inverse()));
                cases.entry(pattern).or_insert(case);
            }
        }
        Self { cases, key }
    }

    /// Match `cube` against the table, turning the top face first if needed.
    #[must_use]
    pub fn recognise(&self, cube: &CubieCube) -> Option<Recognised<'_>> {
        std::iter::once(None)
            .chain(U_TURNS.map(Some))
            .find_map(|setup| {
                let turned = setup.map_or(*cube, |mv| cube.apply(mv));
                self.cases
                    .get(&(self.key)(&turned))
                    .map(|case| Recognised { setup, case })
            })
    }

    /// The pattern of `cube`, as the table keys it.
    #[must_use]
    pub fn key_of(&self, cube: &CubieCube) -> K {
        (self.key)(cube)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Length of the longest case including its finishing turn.
    #[must_use]
    pub fn longest(&self) -> usize {
        self.cases.values().map(NamedCase::len).max().unwrap_or(0)
    }

    /// Names of the cases, `solved` included, sorted and deduplicated.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.cases.values().map(|case| case.name).collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

/// Cheapest sequence of macros taking a tracked piece from `start` to `goal`.
///
/// States are small integers below `state_count`; `step` gives the state
/// after a macro. Cost is the number of moves. Ties keep the macro listed
/// first.
pub(crate) fn shortest_macro_path(
    start: usize,
    goal: usize,
    state_count: usize,
    macros: &[MoveSequence],
    step: impl Fn(usize, &MoveSequence) -> usize,
) -> Option<MoveSequence> {
    let mut cost = vec![usize::MAX; state_count];
    let mut previous: Vec<Option<(usize, usize)>> = vec![None; state_count];
    let mut done = vec![false; state_count];
    cost[start] = 0;

    loop {
        let current = (0..state_count)
            .filter(|&s| !done[s] && cost[s] != usize::MAX)
            .min_by_key(|&s| cost[s])?;
        if current == goal {
            break;
        }
        done[current] = true;
        for (m, sequence) in macros.iter().enumerate() {
            let next = step(current, sequence);
            let next_cost = cost[current] + sequence.len();
            if next_cost < cost[next] {
                cost[next] = next_cost;
                previous[next] = Some((current, m));
            }
        }
    }

    let mut path = Vec::new();
    let mut state = goal;
    while let Some((from, m)) = previous[state] {
        path.push(m);
        state = from;
    }
    let mut moves = MoveSequence::new();
    for m in path.into_iter().rev() {
        moves.extend_from(&macros[m]);
    }
    Some(moves)
}

/// Breadth-first distances over a packed state space.
///
/// Unreached entries are `u8::MAX`.
pub(crate) fn breadth_first_distances(
    size: usize,
    start: usize,
    step: impl Fn(usize, Move) -> usize,
) -> Vec<u8> {
    let mut distance = vec![u8::MAX; size];
    let mut queue = VecDeque::new();
    distance[start] = 0;
    queue.push_back(start);
    while let Some(state) = queue.pop_front() {
        let next_distance = distance[state] + 1;
        for mv in Move::ALL {
            let next = step(state, mv);
            if distance[next] == u8::MAX {
                distance[next] = next_distance;
                queue.push_back(next);
            }
        }
    }
    distance
}

pub(crate) type PermutationKey = ([Corner; 4], [Edge; 4]);

/// Every case table of the solver.
pub(crate) struct CaseTables {
    pub cross: PieceTable<Edge>,
    pub corners: PieceTable<Corner>,
    pub middle: PieceTable<Edge>,
    pub edge_orientation: PatternTable<[u8; 4]>,
    pub corner_orientation: PatternTable<[u8; 4]>,
    pub permutation: PatternTable<PermutationKey>,
}

impl CaseTables {
    fn build() -> Self {
        let tables = Self {
            cross: cross::build_table(),
            corners: corners::build_table(),
            middle: middle::build_table(),
            edge_orientation: last_layer::edge_orientation_table(),
            corner_orientation: last_layer::corner_orientation_table(),
            permutation: last_layer::permutation_table(),
        };
        log::debug!(
            "case tables ready: cross {}, corners {}, middle edges {}, orientation {}+{}, permutation {}",
            tables.cross.len(),
            tables.corners.len(),
            tables.middle.len(),
            tables.edge_orientation.len(),
            tables.corner_orientation.len(),
            tables.permutation.len(),
        );
        tables
    }

    /// Longest possible answer: the longest entry of every placement repeated
    /// four times, plus the longest case of each last-layer table with its
    /// setup turn.
    #[must_use]
    pub fn worst_case_length(&self) -> usize {
        4 * (self.cross.longest() + self.corners.longest() + self.middle.longest())
            + 1
            + self.edge_orientation.longest()
            + 1
            + self.corner_orientation.longest()
            + 1
            + self.permutation.longest()
    }
}

pub(crate) static CASE_TABLES: LazyLock<CaseTables> = LazyLock::new(CaseTables::build);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        let tables = &*CASE_TABLES;
        assert_eq!(tables.cross.len(), 4 * 24);
        assert_eq!(tables.corners.len(), 4 * 24);
        assert_eq!(tables.middle.len(), 4 * 16);
        assert_eq!(tables.edge_orientation.len(), 4);
        assert_eq!(tables.corner_orientation.len(), 8);
        assert_eq!(tables.permutation.len(), 85);
    }

    #[test]
    fn test_longest_entries() {
        let tables = &*CASE_TABLES;
        assert_eq!(tables.cross.longest(), 6);
        assert_eq!(tables.corners.longest(), 6);
        assert_eq!(tables.middle.longest(), 17);
        assert_eq!(tables.edge_orientation.longest(), 13);
        assert_eq!(tables.corner_orientation.longest(), 11);
        assert_eq!(tables.permutation.longest(), 22);
        assert_eq!(tables.worst_case_length(), 165);
    }

    #[test]
    fn test_shortest_macro_path_on_a_ring() {
        // Four states in a ring; one macro advances by one, another by three.
        let macros: Vec<MoveSequence> = vec!["U".parse().unwrap(), "R U R'".parse().unwrap()];
        let step = |s: usize, m: &MoveSequence| if m.len() == 1 { (s + 1) % 4 } else { (s + 3) % 4 };
        assert_eq!(shortest_macro_path(0, 0, 4, &macros, step), Some(MoveSequence::new()));
        assert_eq!(shortest_macro_path(0, 2, 4, &macros, step).map(|m| m.len()), Some(2));
        assert_eq!(shortest_macro_path(0, 3, 4, &macros, step).map(|m| m.len()), Some(3));
    }

    #[test]
    fn test_unreachable_goal() {
        let macros: Vec<MoveSequence> = vec!["U".parse().unwrap()];
        assert_eq!(shortest_macro_path(0, 1, 2, &macros, |s, _| s), None);
    }

    #[test]
    fn test_breadth_first_distances() {
        // Track a single edge: every one of its 24 placements is reachable.
        let step = |s: usize, mv: Move| {
            let (slot, flip) = crate::moves::tables::track_edge(Edge::ALL[s / 2], (s % 2) as u8, mv);
            slot.index() * 2 + usize::from(flip)
        };
        let distance = breadth_first_distances(24, Edge::UF.index() * 2, step);
        assert!(distance.iter().all(|&d| d != u8::MAX));
        assert_eq!(distance[Edge::UF.index() * 2], 0);
        assert_eq!(distance[Edge::UL.index() * 2], 1);
    }
}
