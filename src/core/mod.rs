//! Core types: faces and colors, facelet and cubie states, RNG, configuration.
//!
//! A cube has two equivalent representations. [`CubeState`] is what a person
//! sees (54 colored stickers) and is the input and output format of the
//! crate. [`CubieCube`] is what the solver reasons about (where each corner
//! and edge sits and how it is turned). The validator converts the first into
//! the second.

pub mod color;
pub mod config;
pub mod cubie;
pub mod facelet;
pub mod rng;

pub use color::{Color, ColorScheme, Face, STANDARD_SCHEME};
pub use config::{PieceOrder, ScrambleConfig, SolverConfig};
pub use cubie::{Corner, CubieCube, Edge};
pub use facelet::{facelet_index, CubeState, ParseCubeError, FACELET_COUNT};
pub use rng::{CubeRng, CubeRngState};
