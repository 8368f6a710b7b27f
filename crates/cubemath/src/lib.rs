//! Exact integer vector, matrix, and quarter-turn rotation primitives for the
//! 3x3x3 cube lattice.
//!
//! Everything here works on small integers. Quarter-turn rotations map lattice
//! points to lattice points exactly, so there is no floating-point rounding
//! anywhere in this crate.

pub mod axis;
pub mod matrix;
pub mod sign;
pub mod trig;
pub mod vector;

/// Structs, traits, and functions.
pub mod prelude {
    pub use crate::axis::{Axis, ParseAxisError};
    pub use crate::matrix::IntMatrix;
    pub use crate::sign::Sign;
    pub use crate::trig::quarter_turn_cos_sin;
    pub use crate::vector::IntVector;
}
pub use prelude::*;
