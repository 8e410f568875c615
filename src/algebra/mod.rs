//! Linear algebra: vectors, quaternions and dual quaternions.
//!
//! - [`Vector`] - Fixed-count float vectors with sum/norm
//! - [`Quaternion`] - Rotations and pure vectors
//! - [`DualQuaternion`] - Rigid transforms (rotation then translation)

mod dual_quaternion;
mod quaternion;
mod vector;

pub use dual_quaternion::{ConjugateKind, DualQuaternion};
pub use quaternion::Quaternion;
pub use vector::Vector;

#[cfg(test)]
mod tests;
