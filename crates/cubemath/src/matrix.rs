//! 3x3 integer matrix math.

use std::fmt;
use std::ops::Mul;

use crate::{Axis, IntVector, quarter_turn_cos_sin};

/// 3-by-3 matrix with small integer entries, stored in **row-major** order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntMatrix {
    rows: [[i8; 3]; 3],
}

impl Default for IntMatrix {
    fn default() -> Self {
        Self::IDENT
    }
}

impl fmt::Display for IntMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let [a, b, c] = row;
            write!(f, "[{a:>2} {b:>2} {c:>2}]")?;
        }
        Ok(())
    }
}

impl IntMatrix {
    /// Identity matrix.
    pub const IDENT: Self = Self::from_rows([[1, 0, 0], [0, 1, 0], [0, 0, 1]]);

    /// Constructs a matrix from a list of rows.
    pub const fn from_rows(rows: [[i8; 3]; 3]) -> Self {
        Self { rows }
    }
    /// Returns the column for `axis`, which is the image of the unit vector
    /// along that axis.
    pub fn col(&self, axis: Axis) -> IntVector {
        let j = axis.index();
        IntVector(self.rows.map(|row| row[j]))
    }

    /// Constructs the matrix for a rotation of `quarter_turns × 90°` about
    /// `axis`, counterclockwise when viewed looking down from the positive
    /// end of the axis toward the origin.
    ///
    /// ```
    /// # use cubemath::prelude::*;
    /// let m = IntMatrix::quarter_turn(Axis::Z, 1);
    /// assert_eq!(m * IntVector::new(1, 0, 0), IntVector::new(0, 1, 0));
    /// ```
    pub const fn quarter_turn(axis: Axis, quarter_turns: i32) -> Self {
        let (c, s) = quarter_turn_cos_sin(quarter_turns);
        Self::from_rows(match axis {
            Axis::X => [[1, 0, 0], [0, c, -s], [0, s, c]],
            Axis::Y => [[c, 0, s], [0, 1, 0], [-s, 0, c]],
            Axis::Z => [[c, -s, 0], [s, c, 0], [0, 0, 1]],
        })
    }

    /// Returns the transpose of the matrix. For a rotation matrix, this is its
    /// inverse.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_rows(std::array::from_fn(|i| {
            std::array::from_fn(|j| self.rows[j][i])
        }))
    }

    /// Returns the determinant of the matrix.
    pub fn determinant(&self) -> i32 {
        let m = self.rows.map(|row| row.map(i32::from));
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns whether the matrix has exactly one ±1 in each row and column
    /// and zeros everywhere else. These are exactly the matrices that map the
    /// cube lattice onto itself.
    pub fn is_signed_permutation(&self) -> bool {
        let row_ok = |row: [i8; 3]| {
            row.iter().all(|x| (-1..=1).contains(x))
                && row.iter().filter(|&&x| x != 0).count() == 1
        };
        self.rows.into_iter().all(row_ok) && self.transpose().rows.into_iter().all(row_ok)
    }
    /// Returns whether the matrix is a proper rotation of the cube lattice
    /// (signed permutation with determinant +1).
    pub fn is_lattice_rotation(&self) -> bool {
        self.is_signed_permutation() && self.determinant() == 1
    }
}

impl Mul<IntVector> for IntMatrix {
    type Output = IntVector;

    fn mul(self, rhs: IntVector) -> Self::Output {
        IntVector(self.rows.map(|row| IntVector(row).dot(rhs)))
    }
}
impl Mul<IntVector> for &IntMatrix {
    type Output = IntVector;

    fn mul(self, rhs: IntVector) -> Self::Output {
        *self * rhs
    }
}
impl Mul for IntMatrix {
    type Output = IntMatrix;

    fn mul(self, rhs: Self) -> Self::Output {
        let rhs_t = rhs.transpose();
        Self::from_rows(self.rows.map(|row| {
            rhs_t.rows.map(|col| IntVector(row).dot(IntVector(col)))
        }))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_quarter_turn_matrices() {
        assert_eq!(
            IntMatrix::quarter_turn(Axis::X, 1),
            IntMatrix::from_rows([[1, 0, 0], [0, 0, -1], [0, 1, 0]]),
        );
        assert_eq!(
            IntMatrix::quarter_turn(Axis::Y, 1),
            IntMatrix::from_rows([[0, 0, 1], [0, 1, 0], [-1, 0, 0]]),
        );
        assert_eq!(
            IntMatrix::quarter_turn(Axis::Z, -1),
            IntMatrix::from_rows([[0, 1, 0], [-1, 0, 0], [0, 0, 1]]),
        );
        assert_eq!(IntMatrix::quarter_turn(Axis::Y, 4), IntMatrix::IDENT);
    }

    #[test]
    fn test_quarter_turn_follows_perpendiculars() {
        for axis in Axis::iter() {
            let [a, b] = axis.perpendiculars();
            let m = IntMatrix::quarter_turn(axis, 1);
            assert_eq!(m * a.unit_vector(), b.unit_vector());
            assert_eq!(m * b.unit_vector(), -a.unit_vector());
            assert_eq!(m * axis.unit_vector(), axis.unit_vector());
            assert_eq!(m.col(a), b.unit_vector());
        }
    }

    #[test]
    fn test_signed_permutation_check() {
        assert!(IntMatrix::IDENT.is_lattice_rotation());
        let mirror = IntMatrix::from_rows([[-1, 0, 0], [0, 1, 0], [0, 0, 1]]);
        assert!(mirror.is_signed_permutation());
        assert!(!mirror.is_lattice_rotation());
        let shear = IntMatrix::from_rows([[1, 1, 0], [0, 1, 0], [0, 0, 1]]);
        assert!(!shear.is_signed_permutation());
    }

    proptest! {
        #[test]
        fn proptest_quarter_turn_is_exact_rotation(axis: Axis, quarter_turns in -64_i32..64) {
            let m = IntMatrix::quarter_turn(axis, quarter_turns);
            prop_assert!(m.is_lattice_rotation());
            prop_assert_eq!(m * m.transpose(), IntMatrix::IDENT);
            prop_assert_eq!(m * m * m * m, IntMatrix::IDENT);
            prop_assert_eq!(m.transpose(), IntMatrix::quarter_turn(axis, -quarter_turns));
            prop_assert_eq!(
                m * IntMatrix::quarter_turn(axis, 1),
                IntMatrix::quarter_turn(axis, quarter_turns + 1),
            );
        }
    }
}
