//! The cube and its two operations: turning and flattening.

use std::fmt;

use cubemath::prelude::*;
use itertools::Itertools;

use crate::{Flattened, Piece, Rotation};

/// Number of pieces in a 3x3x3 cube, excluding the hidden core.
pub const PIECE_COUNT: usize = 26;

/// State of a 3x3x3 cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Piece>", into = "Vec<Piece>")
)]
pub struct Cube {
    pieces: Box<[Piece]>,
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.flatten(), f)
    }
}

impl TryFrom<Vec<Piece>> for Cube {
    type Error = CubeInvariantError;

    fn try_from(pieces: Vec<Piece>) -> Result<Self, Self::Error> {
        let ret = Self {
            pieces: pieces.into_boxed_slice(),
        };
        ret.validate()?;
        Ok(ret)
    }
}

impl From<Cube> for Vec<Piece> {
    fn from(cube: Cube) -> Self {
        cube.pieces.into_vec()
    }
}

impl Cube {
    /// Constructs a solved cube.
    pub fn new() -> Self {
        Self {
            pieces: IntVector::cube_lattice().map(Piece::new).collect(),
        }
    }

    /// Returns all the pieces of the cube, in a fixed order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
    /// Returns the piece currently at `position`, if there is one.
    pub fn piece_at(&self, position: IntVector) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.position() == position)
    }

    /// Applies a rotation to every piece selected by it. Other pieces are not
    /// modified.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the cube is left in an invalid state. This
    /// can only happen if the rotation matrix is not a rotation of the cube
    /// lattice.
    pub fn turn(&mut self, rotation: &Rotation) {
        log::trace!("turning {rotation}");

        let matrix = rotation.matrix();
        for piece in self.pieces.iter_mut() {
            if rotation.affects(piece.position()) {
                *piece = piece.transformed(matrix);
            }
        }

        if let Err(e) = self.validate() {
            debug_panic!("invalid cube state after {rotation}: {e}");
        }
    }
    /// Applies a sequence of rotations in order.
    pub fn turn_all<'a>(&mut self, rotations: impl IntoIterator<Item = &'a Rotation>) {
        for rotation in rotations {
            self.turn(rotation);
        }
    }

    /// Projects the cube onto six 3x3 grids, one per face, as seen from
    /// outside the cube. See [`crate::Face::up()`] and
    /// [`crate::Face::right()`] for the
    /// orientation of each grid.
    pub fn flatten(&self) -> Flattened {
        let mut ret = Flattened::default();
        for piece in &self.pieces {
            for (face, color) in piece.stickers() {
                let (row, col) = face.cell_of(piece.position());
                let cell = &mut ret[face].0[row][col];
                if cell.is_some() {
                    debug_panic!("two stickers at {face} ({row}, {col})");
                }
                *cell = Some(color);
            }
        }
        ret
    }

    /// Returns whether every face of the cube is a single color.
    ///
    /// A cube that has only been rotated as a whole is still solved.
    pub fn is_solved(&self) -> bool {
        self.flatten()
            .iter()
            .all(|(_, grid)| grid.uniform_color().is_some())
    }

    /// Checks that the pieces exactly fill the 26 outer positions of the cube,
    /// that each of the 26 home positions appears once, and that every piece
    /// carries its own stickers facing outward on exactly the faces it
    /// touches.
    pub fn validate(&self) -> Result<(), CubeInvariantError> {
        if self.pieces.len() != PIECE_COUNT {
            return Err(CubeInvariantError::WrongPieceCount(self.pieces.len()));
        }
        for piece in &self.pieces {
            let position = piece.position();
            let identity = piece.identity();
            if !is_outer_position(position) {
                return Err(CubeInvariantError::PositionOutOfRange(position));
            }
            if !is_outer_position(piece.home()) {
                return Err(CubeInvariantError::HomeOutOfRange(piece.home()));
            }
            if !piece.is_consistent() {
                return Err(CubeInvariantError::StickerMismatch { position, identity });
            }
            if !piece.stickers_face_outward() {
                return Err(CubeInvariantError::StickerFacingInward { position, identity });
            }
            if !piece.has_home_stickers() {
                return Err(CubeInvariantError::WrongStickers {
                    home: piece.home(),
                    identity,
                });
            }
        }
        if let Some(position) = self.pieces.iter().map(|p| p.position()).duplicates().next() {
            return Err(CubeInvariantError::DuplicatePosition(position));
        }
        if let Some(home) = self.pieces.iter().map(|p| p.home()).duplicates().next() {
            return Err(CubeInvariantError::DuplicatePiece(home));
        }
        Ok(())
    }
}

fn is_outer_position(position: IntVector) -> bool {
    !position.is_zero() && position.is_unit_lattice_point()
}

/// Violation of a structural invariant of [`Cube`].
///
/// Turning a valid cube never produces one of these; they indicate a defect in
/// a rotation matrix or a corrupted deserialized piece list.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeInvariantError {
    /// Wrong number of pieces
    #[error("expected 26 pieces; got {0}")]
    WrongPieceCount(usize),
    /// Piece is outside the lattice or at the center
    #[error("piece position {0} is not an outer position of the cube")]
    PositionOutOfRange(IntVector),
    /// Piece has a home position outside the lattice or at the center
    #[error("piece home {0} is not an outer position of the cube")]
    HomeOutOfRange(IntVector),
    /// Two pieces occupy the same position
    #[error("multiple pieces at position {0}")]
    DuplicatePosition(IntVector),
    /// Two pieces have the same home position
    #[error("multiple pieces with home position {0}")]
    DuplicatePiece(IntVector),
    /// Stickers do not match the faces the piece touches
    #[error("piece at {position} has stickers {identity} that do not match its position")]
    StickerMismatch {
        /// Current position of the piece.
        position: IntVector,
        /// Identity vector of the piece.
        identity: IntVector,
    },
    /// A sticker points into the cube
    #[error("piece at {position} has stickers {identity} that do not face outward")]
    StickerFacingInward {
        /// Current position of the piece.
        position: IntVector,
        /// Identity vector of the piece.
        identity: IntVector,
    },
    /// Sticker colors differ from the ones the piece started with
    #[error("piece with home position {home} has stickers {identity} that belong to another piece")]
    WrongStickers {
        /// Home position of the piece.
        home: IntVector,
        /// Identity vector of the piece.
        identity: IntVector,
    },
}
