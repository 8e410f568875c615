//! Dual quaternions for rigid transforms.
//!
//! A dual quaternion `real + ε dual` represents a rotation followed by a
//! translation. With rotation `r` and translation `t` (a pure quaternion),
//! `real = r` and `dual = ½ t r`.

use std::ops::{Add, Mul};

use super::Quaternion;
use crate::base::Real;

/// Which parts to conjugate in [`DualQuaternion::conjugate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConjugateKind {
    /// Quaternion-conjugate both parts.
    Quaternion,
    /// Negate the dual part.
    Dual,
    /// Quaternion-conjugate both parts and negate the dual part.
    DualAndQuaternion,
}

/// A rotation followed by a translation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DualQuaternion {
    pub real: Quaternion,
    pub dual: Quaternion,
}

impl Default for DualQuaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl DualQuaternion {
    /// Zero translation and identity rotation.
    pub const IDENTITY: DualQuaternion = DualQuaternion {
        real: Quaternion::IDENTITY,
        dual: Quaternion::ZERO,
    };

    /// Build from raw parts. `real` must be normalized for the result to be
    /// a rigid transform.
    pub const fn new(real: Quaternion, dual: Quaternion) -> Self {
        Self { real, dual }
    }

    pub fn from_rotation_translation(rotation: Quaternion, translation: Quaternion) -> Self {
        Self::new(rotation, 0.5 * (translation * rotation))
    }

    pub fn from_rotation(rotation: Quaternion) -> Self {
        Self::new(rotation, Quaternion::ZERO)
    }

    pub fn from_translation(translation: Quaternion) -> Self {
        Self::new(Quaternion::IDENTITY, 0.5 * translation)
    }

    // ------------------------------------------------------------------------
    // Norm
    // ------------------------------------------------------------------------

    /// The norm of the real part.
    pub fn norm(&self) -> Real {
        self.real.norm()
    }

    /// `self` scaled to unit norm, or `None` if the norm is zero.
    pub fn normalize(&self) -> Option<DualQuaternion> {
        let norm = self.norm();
        if norm == 0.0 {
            None
        } else {
            let scale = 1.0 / norm;
            Some(DualQuaternion::new(self.real * scale, self.dual * scale))
        }
    }

    /// Normalize in place. Returns `false`, leaving `self` unchanged, if the
    /// norm is zero.
    pub fn normalized(&mut self) -> bool {
        match self.normalize() {
            Some(that) => {
                *self = that;
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------------
    // Conjugates and inverse
    // ------------------------------------------------------------------------

    pub fn conjugate(&self, kind: ConjugateKind) -> DualQuaternion {
        match kind {
            ConjugateKind::Quaternion => {
                DualQuaternion::new(self.real.conjugate(), self.dual.conjugate())
            }
            ConjugateKind::Dual => DualQuaternion::new(self.real, -self.dual),
            ConjugateKind::DualAndQuaternion => {
                DualQuaternion::new(self.real.conjugate(), -self.dual.conjugate())
            }
        }
    }

    /// The inverse of a unit dual quaternion: `self * self.inverse()` is the
    /// identity.
    pub fn inverse(&self) -> DualQuaternion {
        self.conjugate(ConjugateKind::Quaternion)
    }

    // ------------------------------------------------------------------------
    // Transforms
    // ------------------------------------------------------------------------

    /// Apply `self` to the point `translation` (a pure quaternion).
    pub fn transform_translation(&self, translation: Quaternion) -> Quaternion {
        let point = DualQuaternion::new(Quaternion::IDENTITY, translation);
        (*self * point * self.conjugate(ConjugateKind::DualAndQuaternion)).dual
    }

    /// Apply `self` to the rotation `rotation`.
    pub fn transform_rotation(&self, rotation: Quaternion) -> Quaternion {
        let rotation = DualQuaternion::from_rotation(rotation);
        (*self * rotation * self.conjugate(ConjugateKind::DualAndQuaternion)).real
    }

    /// A closure that applies its argument after `self`: `that ↦ that * self`.
    pub fn composer(self) -> impl Fn(DualQuaternion) -> DualQuaternion {
        move |that| that * self
    }

    // ------------------------------------------------------------------------
    // Extraction
    // ------------------------------------------------------------------------

    pub fn as_rotation(&self) -> Quaternion {
        self.real
    }

    pub fn as_translation(&self) -> Quaternion {
        2.0 * (self.dual * self.real.conjugate())
    }

    pub fn as_rotation_and_translation(&self) -> (Quaternion, Quaternion) {
        (self.as_rotation(), self.as_translation())
    }

    /// Zero for any unit dual quaternion.
    pub fn unit_condition(&self) -> Quaternion {
        self.real.conjugate() * self.dual + self.dual.conjugate() * self.real
    }
}

impl Add for DualQuaternion {
    type Output = DualQuaternion;

    fn add(self, rhs: DualQuaternion) -> DualQuaternion {
        DualQuaternion::new(self.real + rhs.real, self.dual + rhs.dual)
    }
}

impl Mul for DualQuaternion {
    type Output = DualQuaternion;

    fn mul(self, rhs: DualQuaternion) -> DualQuaternion {
        DualQuaternion::new(
            self.real * rhs.real,
            self.real * rhs.dual + self.dual * rhs.real,
        )
    }
}
