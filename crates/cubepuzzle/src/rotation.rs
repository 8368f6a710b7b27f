//! Rotation descriptors for turning some layers of the cube.

use std::fmt;

use cubemath::prelude::*;

use crate::Face;

/// Rotation direction, as seen from outside the face being turned.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TwistDirection {
    /// Clockwise.
    #[default]
    Cw,
    /// Counterclockwise.
    Ccw,
}
impl fmt::Display for TwistDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwistDirection::Cw => Ok(()),
            TwistDirection::Ccw => write!(f, "'"),
        }
    }
}
impl TwistDirection {
    /// Returns the reverse direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Self::Cw => Self::Ccw,
            Self::Ccw => Self::Cw,
        }
    }
    /// Returns the sign of this rotation, according to the mathematical
    /// convention of counterclockwise being positive and clockwise being
    /// negative.
    pub fn sign(self) -> Sign {
        match self {
            Self::Cw => Sign::Neg,
            Self::Ccw => Sign::Pos,
        }
    }
}

/// Inclusive range of layers along an axis, each in {-1, 0, 1}.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LayerRange {
    start: i8,
    end: i8,
}
impl Default for LayerRange {
    fn default() -> Self {
        Self::OUTER
    }
}
impl fmt::Display for LayerRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
impl LayerRange {
    /// Positive outer layer only.
    pub const OUTER: Self = Self { start: 1, end: 1 };
    /// Middle slice only.
    pub const MIDDLE: Self = Self { start: 0, end: 0 };
    /// Every layer (whole-cube rotation).
    pub const ALL: Self = Self { start: -1, end: 1 };

    /// Constructs a layer range from its endpoints.
    ///
    /// Each endpoint is clamped into {-1, 0, 1}, and the endpoints are
    /// swapped if they are given in decreasing order.
    pub fn new(start: i8, end: i8) -> Self {
        let start = start.clamp(-1, 1);
        let end = end.clamp(-1, 1);
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }
    /// Constructs a range containing a single layer.
    pub fn single(layer: i8) -> Self {
        Self::new(layer, layer)
    }

    /// Returns the lowest layer in the range.
    pub fn start(self) -> i8 {
        self.start
    }
    /// Returns the highest layer in the range.
    pub fn end(self) -> i8 {
        self.end
    }
    /// Returns whether `layer` is in the range.
    pub fn contains(self, layer: i8) -> bool {
        (self.start..=self.end).contains(&layer)
    }
}

/// Quarter-turn rotation of a contiguous range of layers about a principal
/// axis.
///
/// A piece is affected iff its coordinate along [`Rotation::axis()`] is within
/// [`Rotation::layers()`]. Affected pieces are transformed by
/// [`Rotation::matrix()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rotation {
    axis: Axis,
    /// Number of counterclockwise quarter turns, in the range 0..4.
    quarter_turns: u8,
    layers: LayerRange,
    matrix: IntMatrix,
}
impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            axis,
            quarter_turns,
            layers,
            ..
        } = self;
        write!(f, "{axis}{quarter_turns} {layers}")
    }
}
impl Rotation {
    /// Constructs a rotation of the positive outer layer along `axis` by
    /// `quarter_turns × 90°`, counterclockwise when viewed from the positive
    /// end of the axis.
    ///
    /// `quarter_turns` is taken modulo 4.
    pub fn new(axis: Axis, quarter_turns: i32) -> Self {
        Self {
            axis,
            quarter_turns: quarter_turns.rem_euclid(4) as u8,
            layers: LayerRange::OUTER,
            matrix: IntMatrix::quarter_turn(axis, quarter_turns),
        }
    }
    /// Constructs a rotation of the whole cube.
    pub fn whole_cube(axis: Axis, quarter_turns: i32) -> Self {
        Self::new(axis, quarter_turns).with_layer_range(LayerRange::ALL)
    }
    /// Constructs a rotation of a single layer.
    pub fn slice(axis: Axis, quarter_turns: i32, layer: i8) -> Self {
        Self::new(axis, quarter_turns).with_layer_range(LayerRange::single(layer))
    }
    /// Constructs a 90-degree turn of the outer layer under `face`, in
    /// `direction` as seen from outside that face.
    pub fn face_twist(face: Face, direction: TwistDirection) -> Self {
        let quarter_turns = (direction.sign() * face.sign()).int();
        Self::slice(face.axis(), quarter_turns.into(), face.sign().int())
    }

    /// Returns the same rotation applied to a different range of layers.
    ///
    /// See [`LayerRange::new()`] for how the endpoints are normalized.
    #[must_use]
    pub fn with_layers(self, start: i8, end: i8) -> Self {
        self.with_layer_range(LayerRange::new(start, end))
    }
    /// Returns the same rotation applied to a different range of layers.
    #[must_use]
    pub fn with_layer_range(mut self, layers: LayerRange) -> Self {
        self.layers = layers;
        self
    }

    /// Returns the rotation that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self::new(self.axis, -i32::from(self.quarter_turns)).with_layer_range(self.layers)
    }

    /// Returns the axis of rotation, whose component selects affected pieces.
    pub fn axis(&self) -> Axis {
        self.axis
    }
    /// Returns the number of counterclockwise quarter turns, in the range
    /// 0..4.
    pub fn quarter_turns(&self) -> u8 {
        self.quarter_turns
    }
    /// Returns the range of layers affected by the rotation.
    pub fn layers(&self) -> LayerRange {
        self.layers
    }
    /// Returns the rotation matrix.
    pub fn matrix(&self) -> &IntMatrix {
        &self.matrix
    }
    /// Returns whether the rotation does nothing.
    pub fn is_identity(&self) -> bool {
        self.quarter_turns == 0
    }

    /// Returns whether a piece at `position` is affected by the rotation.
    pub fn affects(&self, position: IntVector) -> bool {
        self.layers.contains(position[self.axis])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_range_normalization() {
        assert_eq!(LayerRange::new(1, -1), LayerRange::ALL);
        assert_eq!(LayerRange::new(5, 3), LayerRange::OUTER);
        assert_eq!(LayerRange::single(0), LayerRange::MIDDLE);
        assert!(LayerRange::new(0, 1).contains(0));
        assert!(!LayerRange::new(0, 1).contains(-1));
    }

    #[test]
    fn test_rotation_defaults_to_outer_layer() {
        let r = Rotation::new(Axis::Y, 1);
        assert_eq!(r.layers(), LayerRange::OUTER);
        assert!(r.affects(IntVector::new(0, 1, -1)));
        assert!(!r.affects(IntVector::new(1, 0, 1)));
        assert_eq!(r.quarter_turns(), 1);
        assert_eq!(Rotation::new(Axis::Y, -3), r);
        assert!(!r.is_identity());
        assert!(Rotation::new(Axis::Y, 4).is_identity());
        assert_eq!(*Rotation::new(Axis::Y, 4).matrix(), IntMatrix::IDENT);
    }

    #[test]
    fn test_face_twist() {
        // R moves the front of the cube up.
        let r = Rotation::face_twist(Face::R, TwistDirection::Cw);
        assert_eq!(r.matrix() * Face::F.normal(), Face::U.normal());
        assert_eq!(r.layers(), LayerRange::OUTER);

        // L moves the front of the cube down.
        let l = Rotation::face_twist(Face::L, TwistDirection::Cw);
        assert_eq!(l.matrix() * Face::F.normal(), Face::D.normal());
        assert_eq!(l.layers(), LayerRange::single(-1));

        // U moves the front of the cube left.
        let u = Rotation::face_twist(Face::U, TwistDirection::Cw);
        assert_eq!(u.matrix() * Face::F.normal(), Face::L.normal());

        let u_prime = Rotation::face_twist(Face::U, TwistDirection::Ccw);
        assert_eq!(u.inverse(), u_prime);
    }

    #[test]
    fn test_inverse_undoes_matrix() {
        for axis in Axis::iter() {
            for quarter_turns in 0..4 {
                let r = Rotation::new(axis, quarter_turns).with_layers(-1, 0);
                assert_eq!(*r.inverse().matrix() * *r.matrix(), IntMatrix::IDENT);
                assert_eq!(r.inverse().layers(), r.layers());
            }
        }
    }
}
