//! Foundation types for sbbasis.
//!
//! This module provides the vocabulary used throughout the crate:
//! - [`Real`], [`ShortReal`], [`LongReal`] - Floating-point precision tiers
//! - [`Index`], [`Integer`] - Unsigned index and signed 64-bit integer
//! - [`RealFunc`] - Stored unary real transform
//! - [`Axis`] - Cartesian axes
//! - [`LengthUnit`], [`AngleUnit`] - Units for framed values
//!
//! This module has NO dependencies on the algebra or frame modules.

mod axis;
mod types;
mod units;

pub use axis::Axis;
pub use types::{Index, Integer, LongReal, Real, RealFunc, ShortReal};
pub use units::{AngleUnit, LengthUnit};
