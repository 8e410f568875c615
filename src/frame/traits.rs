//! Behaviour shared by values that live in a frame.
//!
//! Frames are stored in a [`FrameTree`], so any operation that walks the
//! frame hierarchy takes the tree explicitly.

use super::{Frame, FrameId, FrameTree, Orientation, Position};
use crate::error::FrameResult;

/// A value expressed in a frame.
pub trait Framed {
    /// The frame `self` is expressed in
    fn frame(&self) -> FrameId;

    /// Check if `frame` is `self`'s frame
    fn has_frame(&self, frame: FrameId) -> bool {
        self.frame() == frame
    }

    /// The base of `self`'s frame
    fn base(&self, tree: &FrameTree) -> FrameId {
        tree.base()
    }

    /// Check if `ancestor` is `self`'s frame or one of its ancestors
    fn has_ancestor(&self, tree: &FrameTree, ancestor: FrameId) -> FrameResult<bool> {
        Ok(self.frame() == ancestor || tree.has_ancestor(self.frame(), ancestor)?)
    }

    /// The lowest frame shared by `self` and `that`
    fn common(&self, tree: &FrameTree, that: &Self) -> FrameResult<FrameId>
    where
        Self: Sized,
    {
        tree.common(self.frame(), that.frame())
    }
}

pub trait Invertible: Framed {
    fn inverse(&self) -> Self;
}

pub trait Composable: Sized {
    /// Apply `offset` after `self`
    fn compose(&self, tree: &FrameTree, offset: &Self) -> FrameResult<Self>;
}

pub trait Transformable: Framed + Sized {
    /// Re-express `self` in `target`. The result represents the *same*
    /// physical quantity.
    fn transform_to(&self, tree: &FrameTree, target: FrameId) -> FrameResult<Self>;

    /// Apply `frame` to `self`. The result represents a *different* physical
    /// quantity, expressed in `self`'s frame.
    fn transform_by(&self, tree: &FrameTree, frame: &Frame) -> FrameResult<Self>;

    fn transformed_to(&mut self, tree: &FrameTree, target: FrameId) -> FrameResult<()> {
        *self = self.transform_to(tree, target)?;
        Ok(())
    }
}

pub trait Rotatable: Framed + Sized {
    fn rotate(&self, tree: &FrameTree, offset: &Orientation) -> FrameResult<Self>;

    fn rotated(&mut self, tree: &FrameTree, offset: &Orientation) -> FrameResult<()> {
        *self = self.rotate(tree, offset)?;
        Ok(())
    }
}

pub trait Translatable: Framed + Sized {
    fn translate(&self, tree: &FrameTree, offset: &Position) -> FrameResult<Self>;

    fn translated(&mut self, tree: &FrameTree, offset: &Position) -> FrameResult<()> {
        *self = self.translate(tree, offset)?;
        Ok(())
    }
}

// ============================================================================
// Frame
// ============================================================================

impl Framed for Frame {
    fn frame(&self) -> FrameId {
        self.parent()
    }
}

impl Invertible for Frame {
    fn inverse(&self) -> Self {
        Frame::new(self.parent(), self.unit(), self.dual().inverse())
    }
}

impl Composable for Frame {
    fn compose(&self, tree: &FrameTree, offset: &Self) -> FrameResult<Self> {
        tree.compose(self, offset)
    }
}

impl Transformable for Frame {
    fn transform_to(&self, tree: &FrameTree, target: FrameId) -> FrameResult<Self> {
        tree.transform_to(self, target)
    }

    fn transform_by(&self, tree: &FrameTree, frame: &Frame) -> FrameResult<Self> {
        tree.transform_by(self, frame)
    }
}

impl Rotatable for Frame {
    fn rotate(&self, tree: &FrameTree, offset: &Orientation) -> FrameResult<Self> {
        tree.rotate(self, offset)
    }
}

impl Translatable for Frame {
    fn translate(&self, tree: &FrameTree, offset: &Position) -> FrameResult<Self> {
        tree.translate(self, offset)
    }
}
