//! Principal axes of 3D space.

use std::fmt;
use std::str::FromStr;

use strum::FromRepr;

use crate::IntVector;

/// 3-dimensional axis.
#[derive(FromRepr, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[repr(u8)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the viewer).
    Z = 2,
}
impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}
impl FromStr for Axis {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" | "0" => Ok(Axis::X),
            "y" | "Y" | "1" => Ok(Axis::Y),
            "z" | "Z" | "2" => Ok(Axis::Z),
            other => Err(ParseAxisError(other.to_owned())),
        }
    }
}
impl Axis {
    /// Returns the index of the axis (0, 1, or 2), which is also the index of
    /// the corresponding component of a vector.
    pub const fn index(self) -> usize {
        self as usize
    }
    /// Returns the axis with the given index, or `None` if it is out of range.
    pub fn from_index(index: usize) -> Option<Axis> {
        u8::try_from(index).ok().and_then(Axis::from_repr)
    }

    /// Returns the two axes perpendicular to this one, in right-handed cyclic
    /// order. A positive quarter turn about `self` rotates the first returned
    /// axis onto the second.
    pub fn perpendiculars(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::Z, Axis::X],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }

    /// Returns an iterator over all axes.
    pub fn iter() -> impl Clone + Iterator<Item = Axis> {
        [Axis::X, Axis::Y, Axis::Z].into_iter()
    }

    /// Returns the unit vector along this axis.
    pub fn unit_vector(self) -> IntVector {
        let mut ret = IntVector::ZERO;
        ret[self] = 1;
        ret
    }
}

/// Error produced when parsing an axis name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid axis {0:?}; expected one of `x`, `y`, `z`, `0`, `1`, `2`")]
pub struct ParseAxisError(pub String);
