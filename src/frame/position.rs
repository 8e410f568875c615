//! Points in a frame.

use super::{
    Frame, FrameId, FrameTree, Framed, Invertible, Orientation, Rotatable, Transformable,
    Translatable,
};
use crate::algebra::Quaternion;
use crate::base::{LengthUnit, Real};
use crate::error::{FrameError, FrameResult};

/// A point in a frame, with coordinates in `unit`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    frame: FrameId,
    unit: LengthUnit,
    quat: Quaternion,
}

impl Position {
    pub fn new(frame: FrameId, unit: LengthUnit, x: Real, y: Real, z: Real) -> Self {
        Self {
            frame,
            unit,
            quat: Quaternion::pure([x, y, z]),
        }
    }

    /// The frame's origin.
    pub fn origin(frame: FrameId, unit: LengthUnit) -> Self {
        Self::new(frame, unit, 0.0, 0.0, 0.0)
    }

    pub fn x(&self) -> Real {
        self.quat.q1
    }

    pub fn y(&self) -> Real {
        self.quat.q2
    }

    pub fn z(&self) -> Real {
        self.quat.q3
    }

    pub fn coordinates(&self) -> [Real; 3] {
        self.quat.vector()
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// The coordinates as a pure quaternion, in `unit`.
    pub fn quat(&self) -> Quaternion {
        self.quat
    }

    /// The coordinates as a pure quaternion, in meters.
    pub fn meters(&self) -> Quaternion {
        let [x, y, z] = self.coordinates();
        Quaternion::pure([
            self.unit.to_meters(x),
            self.unit.to_meters(y),
            self.unit.to_meters(z),
        ])
    }

    /// The same point with coordinates in `unit`.
    pub fn convert(&self, unit: LengthUnit) -> Position {
        let [x, y, z] = self.coordinates();
        Position::new(
            self.frame,
            unit,
            unit.convert(x, self.unit),
            unit.convert(y, self.unit),
            unit.convert(z, self.unit),
        )
    }

    /// Distance to `that`, in `self`'s unit. Both must share a frame.
    pub fn distance_to(&self, that: &Position) -> FrameResult<Real> {
        if self.frame != that.frame {
            return Err(FrameError::mismatch(self.frame, that.frame));
        }
        Ok((that.convert(self.unit).quat - self.quat).norm())
    }
}

impl Framed for Position {
    fn frame(&self) -> FrameId {
        self.frame
    }
}

impl Invertible for Position {
    /// The point reflected through the origin.
    fn inverse(&self) -> Self {
        Self {
            quat: -self.quat,
            ..*self
        }
    }
}

impl Translatable for Position {
    /// Offset `self` by `offset`, which is first re-expressed in `self`'s
    /// frame.
    fn translate(&self, tree: &FrameTree, offset: &Position) -> FrameResult<Self> {
        let offset = offset.transform_to(tree, self.frame)?.convert(self.unit);
        Ok(Self {
            quat: self.quat.translate_by(&offset.quat),
            ..*self
        })
    }
}

impl Rotatable for Position {
    /// Rotate `self` about its frame's origin.
    fn rotate(&self, tree: &FrameTree, offset: &Orientation) -> FrameResult<Self> {
        let offset = offset.transform_to(tree, self.frame)?;
        Ok(Self {
            quat: self.quat.rotate_by(&offset.quat()),
            ..*self
        })
    }
}

impl Transformable for Position {
    fn transform_to(&self, tree: &FrameTree, target: FrameId) -> FrameResult<Self> {
        Ok(tree.transform_to(&Frame::from_position(self), target)?.position())
    }

    fn transform_by(&self, tree: &FrameTree, frame: &Frame) -> FrameResult<Self> {
        Ok(tree.transform_by(&Frame::from_position(self), frame)?.position())
    }
}
