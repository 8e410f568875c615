//! Rotations in a frame.

use super::{
    Composable, Direction, Frame, FrameId, FrameTree, Framed, Invertible, Rotatable, Transformable,
};
use crate::algebra::Quaternion;
use crate::base::{AngleUnit, Axis, Real};
use crate::error::FrameResult;

/// How three angles combine into an [`Orientation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationConvention {
    /// Rotate about the fixed x, then fixed y, then fixed z axis.
    FixedXyz,
    /// Rotate about z, then the new y, then the new x axis.
    EulerZyx,
}

/// A rotation expressed in a frame, stored as a unit quaternion.
///
/// Deserialization takes `quat` as given; it is not re-normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orientation {
    frame: FrameId,
    quat: Quaternion,
}

impl Orientation {
    pub(crate) fn from_quat(frame: FrameId, quat: Quaternion) -> Self {
        Self { frame, quat }
    }

    /// No rotation.
    pub fn identity(frame: FrameId) -> Self {
        Self::from_quat(frame, Quaternion::IDENTITY)
    }

    /// Rotation by `angle` about `direction`, in the direction's frame.
    pub fn from_angle_direction(angle: Real, unit: AngleUnit, direction: &Direction) -> Self {
        Self::from_quat(
            direction.frame(),
            Quaternion::from_angle_direction(unit.to_radians(angle), direction.components()),
        )
    }

    pub fn from_axis_angle(frame: FrameId, axis: Axis, angle: Real, unit: AngleUnit) -> Self {
        Self::from_angle_direction(angle, unit, &Direction::from_axis(frame, axis))
    }

    /// Rotation by `x`, `y` and `z` about the respective axes.
    ///
    /// Fixed XYZ and Euler ZYX describe the same rotation for the same
    /// angles: `qz * qy * qx`.
    pub fn from_convention(
        frame: FrameId,
        unit: AngleUnit,
        convention: RotationConvention,
        x: Real,
        y: Real,
        z: Real,
    ) -> Self {
        let (x, y, z) = (unit.to_radians(x), unit.to_radians(y), unit.to_radians(z));
        let quat = match convention {
            RotationConvention::FixedXyz | RotationConvention::EulerZyx => {
                Quaternion::from_yaw_pitch_roll(z, y, x)
            }
        };
        Self::from_quat(frame, quat)
    }

    pub fn quat(&self) -> Quaternion {
        self.quat
    }

    /// Rotation angle (radians) and unit axis, or `None` for a degenerate
    /// quaternion.
    pub fn angle_direction(&self) -> Option<(Real, [Real; 3])> {
        self.quat.as_angle_direction()
    }

    /// Angles `(x, y, z)` in radians such that
    /// `from_convention(.., FixedXyz, x, y, z)` reproduces `self`.
    pub fn fixed_xyz_angles(&self) -> (Real, Real, Real) {
        self.quat.as_fixed_xyz_angles()
    }
}

impl Framed for Orientation {
    fn frame(&self) -> FrameId {
        self.frame
    }
}

impl Invertible for Orientation {
    fn inverse(&self) -> Self {
        Self::from_quat(self.frame, self.quat.conjugate())
    }
}

impl Rotatable for Orientation {
    fn rotate(&self, tree: &FrameTree, offset: &Orientation) -> FrameResult<Self> {
        let offset = offset.transform_to(tree, self.frame)?;
        Ok(Self::from_quat(self.frame, self.quat.rotate_by(&offset.quat)))
    }
}

impl Composable for Orientation {
    /// Rotate by `self`, then by `offset`.
    fn compose(&self, tree: &FrameTree, offset: &Self) -> FrameResult<Self> {
        let offset = offset.transform_to(tree, self.frame)?;
        Ok(Self::from_quat(self.frame, offset.quat * self.quat))
    }
}

impl Transformable for Orientation {
    fn transform_to(&self, tree: &FrameTree, target: FrameId) -> FrameResult<Self> {
        if self.frame == target {
            tree.get(target)?;
            return Ok(*self);
        }
        Ok(tree.transform_to(&Frame::from_orientation(self), target)?.orientation())
    }

    fn transform_by(&self, tree: &FrameTree, frame: &Frame) -> FrameResult<Self> {
        Ok(tree.transform_by(&Frame::from_orientation(self), frame)?.orientation())
    }
}
