//! Faces of the cube and their viewing frames.

use std::fmt;
use std::str::FromStr;

use cubemath::prelude::*;
use strum::FromRepr;

/// One of the six outer faces of the cube.
///
/// A face also names a sticker color: in the solved state, every sticker on a
/// face has that face's color. The numeric color code for a face is
/// [`Face::code()`], and is the contract between [`crate::Cube`] and any
/// renderer.
///
/// | Face | Direction | Code |
/// |------|-----------|------|
/// | `R`  | +X        | 1    |
/// | `L`  | -X        | 2    |
/// | `U`  | +Y        | 3    |
/// | `D`  | -Y        | 4    |
/// | `F`  | +Z        | 5    |
/// | `B`  | -Z        | 6    |
#[derive(FromRepr, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Face {
    /// Right (+X).
    #[default]
    R = 0,
    /// Left (-X).
    L = 1,
    /// Up (+Y).
    U = 2,
    /// Down (-Y).
    D = 3,
    /// Front (+Z).
    F = 4,
    /// Back (-Z).
    B = 5,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Face {
    type Err = ParseFaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Face::*;

        match s.trim() {
            "R" | "+x" | "+X" => Ok(R),
            "L" | "-x" | "-X" => Ok(L),
            "U" | "+y" | "+Y" => Ok(U),
            "D" | "-y" | "-Y" => Ok(D),
            "F" | "+z" | "+Z" => Ok(F),
            "B" | "-z" | "-Z" => Ok(B),
            other => Err(ParseFaceError(other.to_owned())),
        }
    }
}

impl Face {
    /// Returns an iterator over all faces, in the order `R L U D F B`.
    pub fn iter() -> impl Clone + Iterator<Item = Face> {
        use Face::*;

        [R, L, U, D, F, B].into_iter()
    }

    /// Returns the index of the face (0 through 5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the face perpendicular to `axis` on the side given by `sign`,
    /// or `None` if `sign` is zero.
    pub fn from_axis_sign(axis: Axis, sign: Sign) -> Option<Face> {
        use Face::*;

        match (axis, sign) {
            (_, Sign::Zero) => None,
            (Axis::X, Sign::Pos) => Some(R),
            (Axis::X, Sign::Neg) => Some(L),
            (Axis::Y, Sign::Pos) => Some(U),
            (Axis::Y, Sign::Neg) => Some(D),
            (Axis::Z, Sign::Pos) => Some(F),
            (Axis::Z, Sign::Neg) => Some(B),
        }
    }
    /// Returns the face whose outward normal is `normal`, or `None` if
    /// `normal` is not a signed unit vector along some axis.
    pub fn from_normal(normal: IntVector) -> Option<Face> {
        Face::iter().find(|face| face.normal() == normal)
    }

    /// Returns the axis perpendicular to the face.
    pub fn axis(self) -> Axis {
        use Face::*;

        match self {
            R | L => Axis::X,
            U | D => Axis::Y,
            F | B => Axis::Z,
        }
    }
    /// Returns which side of the origin the face is on.
    pub fn sign(self) -> Sign {
        use Face::*;

        match self {
            R | U | F => Sign::Pos,
            L | D | B => Sign::Neg,
        }
    }
    /// Returns the outward unit normal of the face.
    pub fn normal(self) -> IntVector {
        self.axis().unit_vector() * self.sign()
    }
    /// Returns the face on the opposite side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        use Face::*;

        match self {
            R => L,
            L => R,
            U => D,
            D => U,
            F => B,
            B => F,
        }
    }

    /// Returns the color code for stickers of this color (1 through 6).
    pub const fn code(self) -> u8 {
        self as u8 + 1
    }
    /// Returns the face with the given color code, or `None` if the code is
    /// not in the range 1 through 6.
    pub fn from_code(code: u8) -> Option<Face> {
        code.checked_sub(1).and_then(Face::from_repr)
    }

    /// Returns the one-letter symbol for the face.
    pub fn symbol(self) -> char {
        use Face::*;

        match self {
            R => 'R',
            L => 'L',
            U => 'U',
            D => 'D',
            F => 'F',
            B => 'B',
        }
    }

    /// Returns the direction that points toward row 0 when the face is viewed
    /// from outside the cube.
    ///
    /// The side faces all have +Y up. `U` has -Z (back) up and `D` has +Z
    /// (front) up, so that both are drawn attached to `F` in a standard net.
    pub fn up(self) -> IntVector {
        use Face::*;

        match self {
            R | L | F | B => Axis::Y.unit_vector(),
            U => -Axis::Z.unit_vector(),
            D => Axis::Z.unit_vector(),
        }
    }
    /// Returns the direction that points toward column 2 when the face is
    /// viewed from outside the cube.
    ///
    /// `right × up` is always the outward normal, so no face is mirrored.
    pub fn right(self) -> IntVector {
        use Face::*;

        match self {
            R => -Axis::Z.unit_vector(),
            L => Axis::Z.unit_vector(),
            U | D | F => Axis::X.unit_vector(),
            B => -Axis::X.unit_vector(),
        }
    }

    /// Returns the `(row, column)` of the grid cell that a piece at `position`
    /// covers on this face.
    ///
    /// Only the two components of `position` parallel to the face matter.
    /// Each of them must be in {-1, 0, 1}.
    pub fn cell_of(self, position: IntVector) -> (usize, usize) {
        let row = 1 - position.dot(self.up());
        let col = 1 + position.dot(self.right());
        (row as usize, col as usize)
    }
    /// Returns the position of the piece whose sticker is drawn at `(row,
    /// col)` on this face. This is the inverse of [`Face::cell_of()`].
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 2.
    pub fn position_of_cell(self, row: usize, col: usize) -> IntVector {
        assert!(row < 3 && col < 3, "cell ({row}, {col}) out of range");
        let up_amount = 1 - row as i8;
        let right_amount = col as i8 - 1;
        self.normal() + self.up() * up_amount + self.right() * right_amount
    }
}

/// Error produced when parsing a face name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid face {0:?}; expected one of `R L U D F B` or `+x -x +y -y +z -z`")]
pub struct ParseFaceError(pub String);
