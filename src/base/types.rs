//! Numeric type vocabulary shared by every layer of the crate.

/// Reduced-precision real number.
pub type ShortReal = f32;

/// Standard-precision real number.
pub type Real = f64;

/// Highest-precision real number available.
///
/// Stable Rust has no native extended-precision float, so this is the same
/// width as [`Real`].
pub type LongReal = f64;

/// Non-negative indexing or count value.
pub type Index = u32;

/// General-purpose signed 64-bit integer.
pub type Integer = i64;

/// A unary real-to-real transform that can be stored and invoked later.
pub type RealFunc = fn(Real) -> Real;
