//! Move tables derived from cube geometry.
//!
//! Every sticker has an integer position on the surface of a cube of side 3
//! centered on the origin (coordinates in `-1..=1`) and the outward normal of
//! its face. A clockwise quarter turn of a face rotates every sticker in that
//! layer by -90° about the face normal. The facelet permutation for each of
//! the 18 moves follows from that, and the cubie tables are read off the
//! facelet permutation, so the two views of the cube can never disagree.
//!
//! Tables are built once, on first use.

use std::sync::LazyLock;

use crate::core::{Corner, Edge, Face, FACELET_COUNT};

use super::turn::Move;

type Vec3 = [i8; 3];

/// `new[i] = old[perm[i]]`.
pub(crate) type FaceletPermutation = [u8; FACELET_COUNT];

/// Per-move effect on pieces.
#[derive(Clone, Debug)]
pub(crate) struct CubieMove {
    /// For each destination slot: source slot and twist added.
    pub corners: [(u8, u8); 8],
    pub edges: [(u8, u8); 12],
    /// For each source slot: destination slot and twist added.
    pub corner_targets: [(u8, u8); 8],
    pub edge_targets: [(u8, u8); 12],
}

pub(crate) struct MoveTables {
    pub facelets: [FaceletPermutation; 18],
    pub cubies: [CubieMove; 18],
}

pub(crate) static MOVE_TABLES: LazyLock<MoveTables> = LazyLock::new(MoveTables::build);

/// Where a corner sitting in `slot` with twist `twist` ends up after `mv`.
pub(crate) fn track_corner(slot: Corner, twist: u8, mv: Move) -> (Corner, u8) {
    let (to, delta) = MOVE_TABLES.cubies[mv.index()].corner_targets[slot.index()];
    (Corner::ALL[usize::from(to)], (twist + delta) % 3)
}

/// Where an edge sitting in `slot` with flip `flip` ends up after `mv`.
pub(crate) fn track_edge(slot: Edge, flip: u8, mv: Move) -> (Edge, u8) {
    let (to, delta) = MOVE_TABLES.cubies[mv.index()].edge_targets[slot.index()];
    (Edge::ALL[usize::from(to)], (flip + delta) % 2)
}

/// Outward normal, then the directions of increasing column and row as the
/// face is seen from outside.
const fn frame(face: Face) -> [Vec3; 3] {
    match face {
        Face::Up => [[0, 1, 0], [1, 0, 0], [0, 0, 1]],
        Face::Right => [[1, 0, 0], [0, 0, -1], [0, -1, 0]],
        Face::Front => [[0, 0, 1], [1, 0, 0], [0, -1, 0]],
        Face::Down => [[0, -1, 0], [1, 0, 0], [0, 0, -1]],
        Face::Left => [[-1, 0, 0], [0, 0, 1], [0, -1, 0]],
        Face::Back => [[0, 0, -1], [-1, 0, 0], [0, -1, 0]],
    }
}

fn dot(a: Vec3, b: Vec3) -> i8 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Rotate `v` by -90° about the unit axis `axis`.
fn rotate_clockwise(axis: Vec3, v: Vec3) -> Vec3 {
    let c = cross(axis, v);
    let d = dot(axis, v);
    [
        axis[0] * d - c[0],
        axis[1] * d - c[1],
        axis[2] * d - c[2],
    ]
}

/// Position and normal of every facelet.
fn stickers() -> [(Vec3, Vec3); FACELET_COUNT] {
    let mut out = [([0; 3], [0; 3]); FACELET_COUNT];
    for face in Face::ALL {
        let [normal, right, down] = frame(face);
        for row in 0..3i8 {
            for col in 0..3i8 {
                let pos = [0, 1, 2].map(|k| normal[k] + (col - 1) * right[k] + (row - 1) * down[k]);
                out[face.index() * 9 + (row * 3 + col) as usize] = (pos, normal);
            }
        }
    }
    out
}

fn quarter_turn(face: Face, stickers: &[(Vec3, Vec3); FACELET_COUNT]) -> FaceletPermutation {
    let mut perm = [0u8; FACELET_COUNT];
    for (i, p) in perm.iter_mut().enumerate() {
        *p = i as u8;
    }
    let axis = frame(face)[0];
    for (i, &(pos, normal)) in stickers.iter().enumerate() {
        if dot(pos, axis) != 1 {
            continue;
        }
        let moved = (rotate_clockwise(axis, pos), rotate_clockwise(axis, normal));
        let dest = stickers
            .iter()
            .position(|&s| s == moved)
            .expect("a rotated sticker lands on another sticker");
        perm[dest] = i as u8;
    }
    perm
}

/// Apply `p`, then `q`.
fn compose(p: &FaceletPermutation, q: &FaceletPermutation) -> FaceletPermutation {
    let mut out = [0u8; FACELET_COUNT];
    for (i, o) in out.iter_mut().enumerate() {
        *o = p[usize::from(q[i])];
    }
    out
}

fn cubie_move(perm: &FaceletPermutation) -> CubieMove {
    // facelet -> (slot, position in slot)
    let mut corner_owner = [(u8::MAX, 0u8); FACELET_COUNT];
    for corner in Corner::ALL {
        for (k, f) in corner.facelets().into_iter().enumerate() {
            corner_owner[f] = (corner.index() as u8, k as u8);
        }
    }
    let mut edge_owner = [(u8::MAX, 0u8); FACELET_COUNT];
    for edge in Edge::ALL {
        for (k, f) in edge.facelets().into_iter().enumerate() {
            edge_owner[f] = (edge.index() as u8, k as u8);
        }
    }

    let mut corners = [(0u8, 0u8); 8];
    let mut corner_targets = [(0u8, 0u8); 8];
    for slot in Corner::ALL {
        let (from, k) = corner_owner[usize::from(perm[slot.facelets()[0]])];
        let twist = (3 - k) % 3;
        corners[slot.index()] = (from, twist);
        corner_targets[usize::from(from)] = (slot.index() as u8, twist);
    }

    let mut edges = [(0u8, 0u8); 12];
    let mut edge_targets = [(0u8, 0u8); 12];
    for slot in Edge::ALL {
        let (from, k) = edge_owner[usize::from(perm[slot.facelets()[0]])];
        let flip = k % 2;
        edges[slot.index()] = (from, flip);
        edge_targets[usize::from(from)] = (slot.index() as u8, flip);
    }

    CubieMove {
        corners,
        edges,
        corner_targets,
        edge_targets,
    }
}

impl MoveTables {
    fn build() -> Self {
        let stickers = stickers();
        let mut facelets = [[0u8; FACELET_COUNT]; 18];
        for face in Face::ALL {
            let quarter = quarter_turn(face, &stickers);
            let mut perm = quarter;
            for t in 0..3 {
                facelets[face.index() * 3 + t] = perm;
                perm = compose(&perm, &quarter);
            }
        }
        let cubies = facelets.each_ref().map(cubie_move);
        log::debug!("built facelet and cubie tables for {} moves", facelets.len());
        Self { facelets, cubies }
    }
}
