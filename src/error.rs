//! Error types for frame operations.

use thiserror::Error;

use crate::frame::FrameId;

/// Errors that can occur when building or transforming frames.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    /// The id does not name a frame in this tree.
    #[error("Unknown frame: {0}")]
    UnknownFrame(FrameId),

    /// A frame was required to be an ancestor of another and is not.
    #[error("{ancestor} is not an ancestor of {frame}")]
    NotAnAncestor { frame: FrameId, ancestor: FrameId },

    /// Two framed values were required to share a frame.
    #[error("Frame mismatch: expected {expected}, found {found}")]
    FrameMismatch { expected: FrameId, found: FrameId },

    /// The root frame has no placement and cannot be moved or re-parented.
    #[error("The root frame cannot be modified")]
    RootFrame,

    /// Re-parenting would make a frame its own ancestor.
    #[error("Re-parenting {frame} under {target} would create a cycle")]
    Cycle { frame: FrameId, target: FrameId },

    /// A direction was built from a zero-length vector.
    #[error("Direction has zero length")]
    ZeroDirection,

    /// Every `FrameId` is already in use.
    #[error("Frame tree is full")]
    TreeFull,

    /// An axis index outside `0..3`.
    #[error("Invalid axis index: {0}")]
    InvalidAxis(usize),
}

impl FrameError {
    /// Create a frame mismatch error.
    pub fn mismatch(expected: FrameId, found: FrameId) -> Self {
        Self::FrameMismatch { expected, found }
    }

    /// Create a not-an-ancestor error.
    pub fn not_an_ancestor(frame: FrameId, ancestor: FrameId) -> Self {
        Self::NotAnAncestor { frame, ancestor }
    }
}

/// Result alias for frame operations.
pub type FrameResult<T> = Result<T, FrameError>;
