//! Validator: decides whether a facelet state is reachable from solved.
//!
//! A physical cube can be reassembled (or re-stickered) into states no
//! sequence of face turns reaches. Such states are rejected with an
//! [`InvalidCubeError`] before the solver ever sees them.

pub mod error;
pub mod validator;

pub use error::{InvalidCubeError, Piece, TwistDefect};
pub use validator::{to_cubies, validate};
