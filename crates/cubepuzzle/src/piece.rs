//! Pieces of the cube.

use cubemath::prelude::*;
use itertools::Itertools;

use crate::Face;

/// Kind of piece, determined by how many stickers it has.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// Face center with one sticker.
    Center,
    /// Edge with two stickers.
    Edge,
    /// Corner with three stickers.
    Corner,
}

/// One of the 26 small cubes that make up the puzzle.
///
/// `identity` has one component per axis. A nonzero component is the
/// [`Face::code()`] of a sticker color, negated if the sticker currently faces
/// the negative end of that axis. A zero component means the piece has no
/// sticker facing along that axis. Turning a piece multiplies both its
/// position and its identity by the same matrix, so the stickers stay glued to
/// the piece and keep track of which way they face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    home: IntVector,
    position: IntVector,
    identity: IntVector,
}

impl Piece {
    /// Constructs a piece in its solved position `home`.
    pub fn new(home: IntVector) -> Self {
        let mut identity = IntVector::ZERO;
        for axis in Axis::iter() {
            let sign = Sign::of(home[axis]);
            if let Some(face) = Face::from_axis_sign(axis, sign) {
                identity[axis] = sign * face.code() as i8;
            }
        }
        Self {
            home,
            position: home,
            identity,
        }
    }

    /// Constructs a piece from its raw state, without checking that the state
    /// is reachable. [`crate::Cube::validate()`] rejects invalid pieces.
    pub fn from_parts(home: IntVector, position: IntVector, identity: IntVector) -> Self {
        Self {
            home,
            position,
            identity,
        }
    }

    /// Returns the position the piece occupies in the solved state. This never
    /// changes, and uniquely identifies the piece.
    pub fn home(&self) -> IntVector {
        self.home
    }
    /// Returns the position the piece currently occupies.
    pub fn position(&self) -> IntVector {
        self.position
    }
    /// Returns the identity vector of the piece (see [`Piece`]).
    pub fn identity(&self) -> IntVector {
        self.identity
    }

    /// Returns what kind of piece this is.
    pub fn kind(&self) -> PieceKind {
        match self.home.nonzero_count() {
            1 => PieceKind::Center,
            2 => PieceKind::Edge,
            _ => PieceKind::Corner,
        }
    }

    /// Returns the color of the sticker facing along `axis`, or `None` if the
    /// piece has no sticker facing that way.
    pub fn sticker_color(&self, axis: Axis) -> Option<Face> {
        Face::from_code(self.identity[axis].unsigned_abs())
    }
    /// Returns the face that the sticker facing along `axis` is currently
    /// on, or `None` if the piece is not on the outside of the cube along that
    /// axis.
    pub fn sticker_face(&self, axis: Axis) -> Option<Face> {
        Face::from_axis_sign(axis, Sign::of(self.position[axis]))
    }
    /// Returns an iterator over the stickers on the piece, as pairs of
    /// `(face it is on, color)`.
    pub fn stickers(&self) -> impl '_ + Iterator<Item = (Face, Face)> {
        Axis::iter().filter_map(|axis| Some((self.sticker_face(axis)?, self.sticker_color(axis)?)))
    }

    /// Returns whether the piece has a sticker along exactly the axes on
    /// which it touches a face.
    pub fn is_consistent(&self) -> bool {
        std::iter::zip(self.position.signs(), self.identity.signs())
            .all(|(on_face, sticker)| on_face.is_nonzero() == sticker.is_nonzero())
    }
    /// Returns whether every sticker faces the same direction along its axis as
    /// the piece's position, so that no sticker points into the cube.
    pub fn stickers_face_outward(&self) -> bool {
        self.position.signs() == self.identity.signs()
    }
    /// Returns whether the piece carries exactly the sticker colors that it
    /// was constructed with at [`Piece::home()`].
    pub fn has_home_stickers(&self) -> bool {
        let colors = |identity: IntVector| identity.0.map(i8::unsigned_abs).into_iter().sorted();
        colors(self.identity).eq(colors(Piece::new(self.home).identity))
    }

    /// Returns the piece after being transformed by `matrix`.
    #[must_use]
    pub fn transformed(self, matrix: &IntMatrix) -> Self {
        Self {
            home: self.home,
            position: matrix * self.position,
            identity: matrix * self.identity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_piece_stickers() {
        let corner = Piece::new(IntVector::new(1, -1, 1));
        assert_eq!(corner.kind(), PieceKind::Corner);
        assert_eq!(corner.identity(), IntVector::new(1, -4, 5));
        assert_eq!(
            corner.stickers().collect::<Vec<_>>(),
            vec![(Face::R, Face::R), (Face::D, Face::D), (Face::F, Face::F)],
        );

        let edge = Piece::new(IntVector::new(0, 1, -1));
        assert_eq!(edge.kind(), PieceKind::Edge);
        assert_eq!(edge.identity(), IntVector::new(0, 3, -6));

        let center = Piece::new(IntVector::new(-1, 0, 0));
        assert_eq!(center.kind(), PieceKind::Center);
        assert_eq!(center.stickers().collect::<Vec<_>>(), vec![(Face::L, Face::L)]);
    }

    #[test]
    fn test_transformed_piece_keeps_stickers() {
        let piece = Piece::new(IntVector::new(1, 0, 1));
        // Quarter turn about Y moves the front-right edge to the right-back.
        let turned = piece.transformed(&IntMatrix::quarter_turn(Axis::Y, 1));
        assert_eq!(turned.position(), IntVector::new(1, 0, -1));
        assert_eq!(turned.home(), piece.home());
        assert!(turned.is_consistent());
        assert!(turned.stickers_face_outward());
        assert!(turned.has_home_stickers());
        assert_eq!(
            turned.stickers().collect::<Vec<_>>(),
            vec![(Face::R, Face::F), (Face::B, Face::R)],
        );
    }

    #[test]
    fn test_forged_stickers_are_detected() {
        // Right center wearing the left color.
        let mut piece = Piece::new(IntVector::new(1, 0, 0));
        piece.identity = IntVector::new(2, 0, 0);
        assert!(piece.is_consistent());
        assert!(piece.stickers_face_outward());
        assert!(!piece.has_home_stickers());

        // Up center with its sticker facing down.
        let mut piece = Piece::new(IntVector::new(0, 1, 0));
        piece.identity = IntVector::new(0, -3, 0);
        assert!(piece.is_consistent());
        assert!(!piece.stickers_face_outward());
        assert!(piece.has_home_stickers());

        // Edge with its two stickers swapped is still a valid edge.
        let mut piece = Piece::new(IntVector::new(1, 1, 0));
        piece.identity = IntVector::new(3, 1, 0);
        assert!(piece.stickers_face_outward());
        assert!(piece.has_home_stickers());
    }
}
