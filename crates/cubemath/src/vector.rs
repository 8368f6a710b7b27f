//! Integer 3D vectors.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use itertools::iproduct;

use crate::{Axis, Sign};

/// 3D vector with small integer components.
///
/// Positions on the 3x3x3 lattice use components in {-1, 0, 1}.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntVector(pub [i8; 3]);

impl fmt::Display for IntVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "({x}, {y}, {z})")
    }
}

impl From<[i8; 3]> for IntVector {
    fn from(value: [i8; 3]) -> Self {
        Self(value)
    }
}
impl From<IntVector> for [i8; 3] {
    fn from(value: IntVector) -> Self {
        value.0
    }
}

impl Index<Axis> for IntVector {
    type Output = i8;

    fn index(&self, axis: Axis) -> &Self::Output {
        &self.0[axis.index()]
    }
}
impl IndexMut<Axis> for IntVector {
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        &mut self.0[axis.index()]
    }
}
impl Index<usize> for IntVector {
    type Output = i8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
impl IndexMut<usize> for IntVector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl Neg for IntVector {
    type Output = IntVector;

    fn neg(self) -> Self::Output {
        Self(self.0.map(|x| -x))
    }
}
impl Add for IntVector {
    type Output = IntVector;

    fn add(self, rhs: Self) -> Self::Output {
        Self(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}
impl Sub for IntVector {
    type Output = IntVector;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(std::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}
impl Mul<i8> for IntVector {
    type Output = IntVector;

    fn mul(self, rhs: i8) -> Self::Output {
        Self(self.0.map(|x| x * rhs))
    }
}
impl Mul<Sign> for IntVector {
    type Output = IntVector;

    fn mul(self, rhs: Sign) -> Self::Output {
        self * rhs.int()
    }
}

impl IntVector {
    /// Zero vector.
    pub const ZERO: Self = Self([0; 3]);

    /// Constructs a vector from its components.
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self([x, y, z])
    }

    /// Returns the dot product of two vectors.
    pub fn dot(self, rhs: Self) -> i8 {
        self.0.iter().zip(rhs.0).map(|(&a, b)| a * b).sum()
    }
    /// Returns the cross product of two vectors.
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = rhs.0;
        Self([a2 * b3 - a3 * b2, a3 * b1 - a1 * b3, a1 * b2 - a2 * b1])
    }

    /// Returns the sign of each component.
    pub fn signs(self) -> [Sign; 3] {
        self.0.map(Sign::of)
    }
    /// Returns the number of nonzero components.
    pub fn nonzero_count(self) -> usize {
        self.0.iter().filter(|&&x| x != 0).count()
    }
    /// Returns whether every component is zero.
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
    /// Returns whether every component is in {-1, 0, 1}.
    pub fn is_unit_lattice_point(self) -> bool {
        self.0.iter().all(|x| (-1..=1).contains(x))
    }

    /// Returns an iterator over the 26 points of {-1, 0, 1}³ excluding the
    /// origin, ordered by X, then Y, then Z.
    pub fn cube_lattice() -> impl Iterator<Item = IntVector> {
        iproduct!(-1..=1, -1..=1, -1..=1)
            .map(|(x, y, z)| IntVector::new(x, y, z))
            .filter(|v| !v.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_cube_lattice() {
        let points: HashSet<IntVector> = IntVector::cube_lattice().collect();
        assert_eq!(points.len(), 26);
        assert!(!points.contains(&IntVector::ZERO));
        assert!(points.iter().all(|p| p.is_unit_lattice_point()));
    }

    #[test]
    fn test_vector_products() {
        let x = IntVector::new(1, 0, 0);
        let y = IntVector::new(0, 1, 0);
        assert_eq!(x.cross(y), IntVector::new(0, 0, 1));
        assert_eq!(y.cross(x), IntVector::new(0, 0, -1));
        assert_eq!(IntVector::new(1, -1, 1).dot(IntVector::new(1, 1, -1)), -1);
        assert_eq!(IntVector::new(0, -1, 1).nonzero_count(), 2);
    }
}
