//! Named last-layer algorithms.
//!
//! Each is `(name, notation)`. The case an algorithm solves is never written
//! down; it is computed by running the algorithm backwards from solved.

/// Orient the four top edges.
pub(crate) const EDGE_ORIENTATION: [(&str, &str); 3] = [
    ("line", "F R U R' U' F'"),
    ("angle", "F U R U' R' F'"),
    ("dot", "F R U R' U' F' U2 F U R U' R' F'"),
];

/// Orient the four top corners once the edges are oriented.
pub(crate) const CORNER_ORIENTATION: [(&str, &str); 7] = [
    ("sune", "R U R' U R U2 R'"),
    ("antisune", "R U2 R' U' R U' R'"),
    ("h", "R U R' U R U' R' U R U2 R'"),
    ("pi", "R U2 R2 U' R2 U' R2 U2 R"),
    ("headlights", "R2 D' R U2 R' D R U2 R"),
    ("chameleon", "R' F' L F R F' L' F"),
    ("bowtie", "F' L F R' F' L' F R"),
];

/// Permute the top layer once it is fully oriented.
pub(crate) const PERMUTATION: [(&str, &str); 21] = [
    ("Ua", "R U' R U R U R U' R' U' R2"),
    ("Ub", "R2 U R U R' U' R' U' R' U R'"),
    ("H", "R2 U2 R U2 R2 U2 R2 U2 R U2 R2"),
    ("Z", "R U R' U R' U' R' U R U' R' U' R2 U R"),
    ("Aa", "R' F R' B2 R F' R' B2 R2"),
    ("Ab", "R2 B2 R F R' B2 R F' R"),
    ("E", "R B' R' F R B R' F' R B R' F R B' R' F'"),
    ("T", "R U R' U' R' F R2 U' R' U' R U R' F'"),
    ("F", "R' U' F' R U R' U' R' F R2 U' R' U' R U R' U R"),
    ("Ja", "R' U L' U2 R U' R' U2 R L"),
    ("Jb", "R U R' F' R U R' U' R' F R2 U' R'"),
    ("Ra", "R U' R' U' R U R D R' U' R D' R' U2 R'"),
    ("Rb", "R2 F R U R U' R' F' R U2 R' U2 R"),
    ("V", "R' U R' U' B' R' B2 U' B' U B' R B R"),
    ("Y", "F R U' R' U' R U R' F' R U R' U' R' F R F'"),
    ("Na", "R U R' U R U R' F' R U R' U' R' F R2 U' R' U2 R U' R'"),
    ("Nb", "R' U R U' R' F' U' F R U R' F R' F' R U' R"),
    ("Ga", "R2 U R' U R' U' R U' R2 U' D R' U R D'"),
    ("Gb", "R' U' R U D' R2 U R' U R U' R U' R2 D"),
    ("Gc", "R2 U' R U' R U R' U R2 U D' R U' R' D"),
    ("Gd", "R U R' U' D R2 U' R U' R' U R' U R2 D'"),
];
