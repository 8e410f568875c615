//! # sbbasis
//!
//! Numeric vocabulary, quaternion algebra and reference frames for
//! spacecraft geometry.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! frame     → FrameTree, Position, Direction, Orientation
//!   ↓
//! algebra   → Vector, Quaternion, DualQuaternion
//!   ↓
//! base      → Real/Index/Integer aliases, Axis, units
//! ```

// ============================================================================
// MODULES (dependency order: base → algebra → frame)
// ============================================================================

/// Foundation types: numeric aliases, axes, units
pub mod base;

/// Linear algebra: vectors, quaternions, dual quaternions
pub mod algebra;

/// Reference frames and framed values
pub mod frame;

/// Errors for frame operations
pub mod error;

// Re-export foundation types
pub use base::{AngleUnit, Axis, Index, Integer, LengthUnit, LongReal, Real, RealFunc, ShortReal};

pub use algebra::{ConjugateKind, DualQuaternion, Quaternion, Vector};
pub use error::{FrameError, FrameResult};
pub use frame::{
    Composable, Direction, Frame, FrameId, FrameTree, Framed, Invertible, Orientation, Position,
    Rotatable, RotationConvention, Transformable, Translatable,
};
