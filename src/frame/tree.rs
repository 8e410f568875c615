//! The frame arena and frame-to-frame transforms.
//!
//! Every frame except the root is placed relative to a parent frame by a
//! [`DualQuaternion`] (translation in meters). The root is its own parent and
//! has the identity placement. Frames are identified by [`FrameId`], so two
//! frames with equal placements are still distinct frames.

use std::fmt;

use tracing::{debug, trace};

use super::{Framed, Orientation, Position};
use crate::algebra::DualQuaternion;
use crate::base::LengthUnit;
use crate::error::{FrameError, FrameResult};

/// Unique identifier for a frame in a [`FrameTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameId(pub u32);

impl FrameId {
    /// The root frame of every tree.
    pub const ROOT: FrameId = FrameId(0);

    /// Create a FrameId from an arena index, or `None` if it does not fit.
    pub fn new(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }

    /// Get the index into the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame#{}", self.0)
    }
}

/// A placement relative to a parent frame.
///
/// A `Frame` value need not be stored in a tree: transforms produce new
/// values that describe a placement without allocating a frame for it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    parent: FrameId,
    unit: LengthUnit,
    dual: DualQuaternion,
}

impl Frame {
    pub fn new(parent: FrameId, unit: LengthUnit, dual: DualQuaternion) -> Self {
        Self { parent, unit, dual }
    }

    /// A frame at `position` with the parent's orientation.
    pub fn from_position(position: &Position) -> Self {
        Self::new(
            position.frame(),
            position.unit(),
            DualQuaternion::from_translation(position.meters()),
        )
    }

    /// A frame at the parent's origin with `orientation`.
    pub fn from_orientation(orientation: &Orientation) -> Self {
        Self::new(
            orientation.frame(),
            LengthUnit::Meter,
            DualQuaternion::from_rotation(orientation.quat()),
        )
    }

    /// A frame at `position` with `orientation`. Both must be expressed in
    /// the same frame.
    pub fn from_position_orientation(
        position: &Position,
        orientation: &Orientation,
    ) -> FrameResult<Self> {
        if position.frame() != orientation.frame() {
            return Err(FrameError::mismatch(
                position.frame(),
                orientation.frame(),
            ));
        }
        Ok(Self::new(
            position.frame(),
            position.unit(),
            DualQuaternion::from_rotation_translation(orientation.quat(), position.meters()),
        ))
    }

    pub fn parent(&self) -> FrameId {
        self.parent
    }

    /// The unit positions derived from this frame are reported in.
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    pub fn dual(&self) -> DualQuaternion {
        self.dual
    }

    pub fn with_unit(self, unit: LengthUnit) -> Self {
        Self { unit, ..self }
    }

    /// The origin of this frame, in the parent frame.
    pub fn position(&self) -> Position {
        let t = self.dual.as_translation();
        Position::new(
            self.parent,
            self.unit,
            self.unit.from_meters(t.q1),
            self.unit.from_meters(t.q2),
            self.unit.from_meters(t.q3),
        )
    }

    /// The orientation of this frame, in the parent frame.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_quat(self.parent, self.dual.as_rotation())
    }
}

/// An arena of frames rooted at [`FrameId::ROOT`].
#[derive(Debug, Clone)]
pub struct FrameTree {
    frames: Vec<Frame>,
}

impl Default for FrameTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTree {
    /// Create a tree holding only the root frame.
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::new(
                FrameId::ROOT,
                LengthUnit::Meter,
                DualQuaternion::IDENTITY,
            )],
        }
    }

    pub fn root(&self) -> FrameId {
        FrameId::ROOT
    }

    /// The base of every frame; there is only one.
    pub fn base(&self) -> FrameId {
        FrameId::ROOT
    }

    /// Number of frames, including the root.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn get(&self, id: FrameId) -> FrameResult<&Frame> {
        self.frames
            .get(id.index())
            .ok_or(FrameError::UnknownFrame(id))
    }

    pub fn contains(&self, id: FrameId) -> bool {
        id.index() < self.frames.len()
    }

    /// Store `frame` and return its id. Its parent must already be stored.
    pub fn insert(&mut self, frame: Frame) -> FrameResult<FrameId> {
        self.get(frame.parent)?;
        let id = FrameId::new(self.frames.len()).ok_or(FrameError::TreeFull)?;
        self.frames.push(frame);
        debug!(frame = %id, parent = %frame.parent, "inserted frame");
        Ok(id)
    }

    /// Store a new frame placed at `position` and `orientation`, both of
    /// which are first re-expressed in `parent`.
    pub fn insert_at(
        &mut self,
        parent: FrameId,
        position: &Position,
        orientation: &Orientation,
    ) -> FrameResult<FrameId> {
        let frame = self.frame_in(parent, position, orientation)?;
        self.insert(frame)
    }

    pub fn parent(&self, id: FrameId) -> FrameResult<FrameId> {
        Ok(self.get(id)?.parent)
    }

    /// `true` iff `id` is the root.
    pub fn is_base(&self, id: FrameId) -> FrameResult<bool> {
        Ok(self.parent(id)? == id)
    }

    /// `true` iff `frame` is the parent of `id`.
    pub fn has_frame(&self, id: FrameId, frame: FrameId) -> FrameResult<bool> {
        Ok(self.parent(id)? == frame)
    }

    /// `true` iff `ancestor` is on the parent chain of `id`. The root is its
    /// own ancestor.
    pub fn has_ancestor(&self, id: FrameId, ancestor: FrameId) -> FrameResult<bool> {
        self.get(ancestor)?;
        let mut current = self.parent(id)?;
        loop {
            if current == ancestor {
                return Ok(true);
            }
            let next = self.parent(current)?;
            if next == current {
                return Ok(false);
            }
            current = next;
        }
    }

    /// Number of parent links between `id` and the root.
    pub fn depth(&self, id: FrameId) -> FrameResult<usize> {
        Ok(self.lineage(id)?.len() - 1)
    }

    /// The lowest frame that is `a` or an ancestor of `a`, and likewise for
    /// `b`.
    pub fn common(&self, a: FrameId, b: FrameId) -> FrameResult<FrameId> {
        let lineage_a = self.lineage(a)?;
        let lineage_b = self.lineage(b)?;
        Ok(lineage_b
            .into_iter()
            .find(|id| lineage_a.contains(id))
            .unwrap_or(FrameId::ROOT))
    }

    /// `id` followed by each of its ancestors up to and including the root.
    fn lineage(&self, id: FrameId) -> FrameResult<Vec<FrameId>> {
        let mut lineage = vec![id];
        let mut current = id;
        loop {
            let parent = self.parent(current)?;
            if parent == current {
                return Ok(lineage);
            }
            lineage.push(parent);
            current = parent;
        }
    }

    /// Placement of the stored frame `id` relative to `ancestor`, which must
    /// be `id` itself or one of its ancestors.
    fn placement_of(&self, id: FrameId, ancestor: FrameId) -> FrameResult<DualQuaternion> {
        let mut placement = DualQuaternion::IDENTITY;
        let mut current = id;
        while current != ancestor {
            let frame = self.get(current)?;
            if frame.parent == current {
                return Err(FrameError::not_an_ancestor(id, ancestor));
            }
            placement = frame.dual * placement;
            current = frame.parent;
        }
        Ok(placement)
    }

    /// Placement of `frame` relative to `ancestor`, which must be the
    /// frame's parent or one of the parent's ancestors.
    pub fn placement_in(&self, frame: &Frame, ancestor: FrameId) -> FrameResult<DualQuaternion> {
        Ok(self.placement_of(frame.parent, ancestor)? * frame.dual)
    }

    // ------------------------------------------------------------------------
    // Transforms
    // ------------------------------------------------------------------------

    /// Re-express `frame` with `target` as its parent. The result describes
    /// the *same* physical placement.
    pub fn transform_to(&self, frame: &Frame, target: FrameId) -> FrameResult<Frame> {
        if frame.parent == target {
            self.get(target)?;
            return Ok(*frame);
        }

        let common = self.common(frame.parent, target)?;
        let frame_in_common = self.placement_in(frame, common)?;
        let target_in_common = self.placement_of(target, common)?;
        trace!(from = %frame.parent, to = %target, via = %common, "transform frame");

        Ok(Frame::new(
            target,
            frame.unit,
            target_in_common.inverse() * frame_in_common,
        ))
    }

    /// Apply `offset` to `frame`. The offset is first re-expressed in the
    /// frame's parent; the result describes a *different* physical placement
    /// in that same parent.
    pub fn transform_by(&self, frame: &Frame, offset: &Frame) -> FrameResult<Frame> {
        let that = self.transform_to(offset, frame.parent)?;
        Ok(Frame::new(frame.parent, frame.unit, that.dual * frame.dual))
    }

    /// Compose `offset` after `frame`.
    pub fn compose(&self, frame: &Frame, offset: &Frame) -> FrameResult<Frame> {
        self.transform_by(frame, offset)
    }

    pub fn rotate(&self, frame: &Frame, orientation: &Orientation) -> FrameResult<Frame> {
        self.transform_by(frame, &Frame::from_orientation(orientation))
    }

    pub fn translate(&self, frame: &Frame, position: &Position) -> FrameResult<Frame> {
        self.transform_by(frame, &Frame::from_position(position))
    }

    /// A frame with parent `target` placed at `position` and `orientation`.
    pub fn frame_in(
        &self,
        target: FrameId,
        position: &Position,
        orientation: &Orientation,
    ) -> FrameResult<Frame> {
        let position = self.transform_to(&Frame::from_position(position), target)?;
        let orientation = self.transform_to(&Frame::from_orientation(orientation), target)?;
        Frame::from_position_orientation(&position.position(), &orientation.orientation())
    }

    // ------------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------------

    /// Re-parent the stored frame `id` under `target`, keeping its physical
    /// placement.
    pub fn transformed_to(&mut self, id: FrameId, target: FrameId) -> FrameResult<()> {
        if self.is_base(id)? {
            return Err(FrameError::RootFrame);
        }
        if target == id || self.has_ancestor(target, id)? {
            return Err(FrameError::Cycle { frame: id, target });
        }

        let moved = self.transform_to(self.get(id)?, target)?;
        self.frames[id.index()] = moved;
        debug!(frame = %id, parent = %target, "re-parented frame");
        Ok(())
    }

    /// Move the stored frame `id` to a new placement in its parent. Frames
    /// below `id` move with it.
    pub fn set_placement(&mut self, id: FrameId, dual: DualQuaternion) -> FrameResult<()> {
        if self.is_base(id)? {
            return Err(FrameError::RootFrame);
        }
        self.frames[id.index()].dual = dual;
        debug!(frame = %id, "moved frame");
        Ok(())
    }
}
