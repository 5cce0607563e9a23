//! Random scrambles from a seed.

pub mod scrambler;

pub use scrambler::{scramble, Scramble, Scrambler};
