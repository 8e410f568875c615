//! Unit directions in a frame.

use super::{Frame, FrameId, FrameTree, Framed, Invertible, Orientation, Rotatable, Transformable};
use crate::algebra::{DualQuaternion, Quaternion};
use crate::base::{Axis, LengthUnit, Real};
use crate::error::{FrameError, FrameResult};

/// A unit vector in a frame. Directions are unaffected by translation.
///
/// Deserialized directions go through [`Direction::new`], so they are
/// normalized and a zero vector is rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDirection"))]
pub struct Direction {
    frame: FrameId,
    x: Real,
    y: Real,
    z: Real,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDirection {
    frame: FrameId,
    x: Real,
    y: Real,
    z: Real,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDirection> for Direction {
    type Error = FrameError;

    fn try_from(raw: RawDirection) -> FrameResult<Self> {
        Direction::new(raw.frame, raw.x, raw.y, raw.z)
    }
}

impl Direction {
    /// Normalize `(x, y, z)` into a direction.
    pub fn new(frame: FrameId, x: Real, y: Real, z: Real) -> FrameResult<Self> {
        let norm = x.hypot(y).hypot(z);
        if norm == 0.0 || !norm.is_finite() {
            return Err(FrameError::ZeroDirection);
        }
        Ok(Self {
            frame,
            x: x / norm,
            y: y / norm,
            z: z / norm,
        })
    }

    pub fn from_axis(frame: FrameId, axis: Axis) -> Self {
        let [x, y, z] = axis.unit();
        Self { frame, x, y, z }
    }

    pub fn x(&self) -> Real {
        self.x
    }

    pub fn y(&self) -> Real {
        self.y
    }

    pub fn z(&self) -> Real {
        self.z
    }

    pub fn components(&self) -> [Real; 3] {
        [self.x, self.y, self.z]
    }

    /// Cosine of the angle to `that`. Both must share a frame.
    pub fn dot(&self, that: &Direction) -> FrameResult<Real> {
        if self.frame != that.frame {
            return Err(FrameError::mismatch(self.frame, that.frame));
        }
        Ok(self.x * that.x + self.y * that.y + self.z * that.z)
    }

    /// Angle to `that` in radians, in `[0, π]`.
    pub fn angle_to(&self, that: &Direction) -> FrameResult<Real> {
        Ok(self.dot(that)?.clamp(-1.0, 1.0).acos())
    }

    /// Spherical angles `(phi, theta)`: `phi` from the z axis, `theta` about
    /// it from the x axis.
    pub fn spherical_angles(&self) -> (Real, Real) {
        (self.z.clamp(-1.0, 1.0).acos(), self.y.atan2(self.x))
    }

    fn rotated_by(&self, frame: FrameId, rotation: &Quaternion) -> Self {
        let [x, y, z] = Quaternion::pure(self.components())
            .rotate_by(rotation)
            .vector();
        Self { frame, x, y, z }
    }
}

impl Framed for Direction {
    fn frame(&self) -> FrameId {
        self.frame
    }
}

impl Invertible for Direction {
    /// The opposite direction.
    fn inverse(&self) -> Self {
        Self {
            frame: self.frame,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Rotatable for Direction {
    fn rotate(&self, tree: &FrameTree, offset: &Orientation) -> FrameResult<Self> {
        let offset = offset.transform_to(tree, self.frame)?;
        Ok(self.rotated_by(self.frame, &offset.quat()))
    }
}

impl Transformable for Direction {
    fn transform_to(&self, tree: &FrameTree, target: FrameId) -> FrameResult<Self> {
        let axes = Frame::new(self.frame, LengthUnit::Meter, DualQuaternion::IDENTITY);
        let axes = tree.transform_to(&axes, target)?;
        Ok(self.rotated_by(target, &axes.dual().as_rotation()))
    }

    fn transform_by(&self, tree: &FrameTree, frame: &Frame) -> FrameResult<Self> {
        let that = tree.transform_to(frame, self.frame)?;
        Ok(self.rotated_by(self.frame, &that.dual().as_rotation()))
    }
}
