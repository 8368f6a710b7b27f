//! State of a 3x3x3 twisty puzzle.
//!
//! A [`Cube`] owns 26 [`Piece`]s. Each piece has a position on the lattice
//! {-1, 0, 1}³ (minus the origin) and an identity vector that records which
//! colored stickers are glued to it and which way each one faces. A
//! [`Rotation`] turns some contiguous range of layers about one axis, and
//! [`Cube::flatten()`] projects the pieces onto six 3x3 [`FaceGrid`]s for a
//! renderer.
//!
//! ```
//! # use cubepuzzle::prelude::*;
//! let mut cube = Cube::new();
//! cube.turn(&Rotation::face_twist(Face::R, TwistDirection::Cw));
//! let flat = cube.flatten();
//! assert_eq!(flat[Face::R].uniform_color(), Some(Face::R));
//! assert_eq!(flat[Face::F][(0, 2)], Some(Face::D));
//! ```

pub use cubemath;
#[cfg(all(test, not(feature = "serde")))]
use serde_json as _; // Suppress unused crate warning (it's used in serde tests)

/// Panics in debug builds and logs an error in release builds.
macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => log::error!($($tok)*),
        }
    };
}

mod cube;
mod face;
mod flatten;
mod piece;
mod rotation;

pub use cube::{Cube, CubeInvariantError, PIECE_COUNT};
pub use face::{Face, ParseFaceError};
pub use flatten::{FaceGrid, Flattened};
pub use piece::{Piece, PieceKind};
pub use rotation::{LayerRange, Rotation, TwistDirection};

/// Structs, traits, and constants.
pub mod prelude {
    pub use cubemath::prelude::*;

    pub use crate::{
        Cube, CubeInvariantError, Face, FaceGrid, Flattened, LayerRange, PIECE_COUNT, Piece,
        PieceKind, Rotation, TwistDirection,
    };
}
