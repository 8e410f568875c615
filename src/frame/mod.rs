//! Reference frames and the values expressed in them.
//!
//! - [`FrameTree`], [`FrameId`], [`Frame`] - The frame hierarchy and placements
//! - [`Position`], [`Direction`], [`Orientation`] - Framed values
//! - [`Framed`], [`Transformable`], ... - Operations shared by framed values
//!
//! A value's coordinates are meaningful only relative to its frame.
//! `transform_to` re-expresses a value in another frame without changing it
//! physically; `transform_by` moves it.

mod direction;
mod orientation;
mod position;
mod traits;
mod tree;

pub use direction::Direction;
pub use orientation::{Orientation, RotationConvention};
pub use position::Position;
pub use traits::{Composable, Framed, Invertible, Rotatable, Transformable, Translatable};
pub use tree::{Frame, FrameId, FrameTree};

#[cfg(test)]
mod tests;
