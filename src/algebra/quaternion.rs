//! Quaternions for spatial rotation.
//!
//! A quaternion is represented as `q0 + q1 i + q2 j + q3 k`. Unit quaternions
//! encode rotations; pure quaternions (`q0 == 0`) encode vectors.
//!
//! See <https://en.wikipedia.org/wiki/Quaternions_and_spatial_rotation>.

use std::ops::{Add, Mul, Neg, Sub};

use crate::base::{Axis, Real};

/// A quaternion with [`Real`] components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub q0: Real,
    pub q1: Real,
    pub q2: Real,
    pub q3: Real,
}

impl Quaternion {
    /// Default tolerance for the `_within` predicates.
    pub const EPSILON: Real = 1e-10;

    /// The rotation that does nothing.
    pub const IDENTITY: Quaternion = Quaternion::new(1.0, 0.0, 0.0, 0.0);

    pub const ZERO: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(q0: Real, q1: Real, q2: Real, q3: Real) -> Self {
        Self { q0, q1, q2, q3 }
    }

    /// A pure quaternion holding the vector `v`.
    pub const fn pure(v: [Real; 3]) -> Self {
        Self::new(0.0, v[0], v[1], v[2])
    }

    /// The vector part `(q1, q2, q3)`.
    pub fn vector(&self) -> [Real; 3] {
        [self.q1, self.q2, self.q3]
    }

    // ------------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------------

    /// `true` if the norm is exactly 1.0.
    pub fn is_unit(&self) -> bool {
        self.norm() == 1.0
    }

    /// `true` if the norm is within `epsilon` of 1.0.
    pub fn is_unit_within(&self, epsilon: Real) -> bool {
        let norm = self.norm();
        1.0 - epsilon <= norm && norm <= 1.0 + epsilon
    }

    /// `true` if the norm is exactly 0.0.
    pub fn is_zero(&self) -> bool {
        self.norm() == 0.0
    }

    /// `true` if the norm is within `epsilon` of 0.0.
    pub fn is_zero_within(&self, epsilon: Real) -> bool {
        let norm = self.norm();
        -epsilon <= norm && norm <= epsilon
    }

    /// `true` if the scalar part is exactly 0.0.
    pub fn is_pure(&self) -> bool {
        self.q0 == 0.0
    }

    /// `true` if the scalar part is within `epsilon` of 0.0.
    pub fn is_pure_within(&self, epsilon: Real) -> bool {
        -epsilon <= self.q0 && self.q0 <= epsilon
    }

    // ------------------------------------------------------------------------
    // Norm
    // ------------------------------------------------------------------------

    /// Euclidean length, computed without intermediate overflow or underflow.
    pub fn norm(&self) -> Real {
        self.q0.hypot(self.q1).hypot(self.q2).hypot(self.q3)
    }

    /// The normalized quaternion, or `None` if the norm is zero.
    pub fn normalize(&self) -> Option<Quaternion> {
        let norm = self.norm();
        if norm == 0.0 {
            None
        } else {
            Some(Quaternion::new(
                self.q0 / norm,
                self.q1 / norm,
                self.q2 / norm,
                self.q3 / norm,
            ))
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
    // Basic operations
    // ------------------------------------------------------------------------

    pub fn dot(&self, that: &Quaternion) -> Real {
        self.q0 * that.q0 + self.q1 * that.q1 + self.q2 * that.q2 + self.q3 * that.q3
    }

    pub fn conjugate(&self) -> Quaternion {
        Quaternion::new(self.q0, -self.q1, -self.q2, -self.q3)
    }

    /// The multiplicative inverse, or `None` for the zero quaternion.
    pub fn inverse(&self) -> Option<Quaternion> {
        let norm = self.norm();
        if norm == 0.0 {
            None
        } else {
            Some(Quaternion::new(
                self.q0 / norm / norm,
                -self.q1 / norm / norm,
                -self.q2 / norm / norm,
                -self.q3 / norm / norm,
            ))
        }
    }

    /// `that * self * conj(that)`. Only meaningful when `self` is pure and
    /// `that` is a unit rotation.
    pub fn rotate_by(&self, that: &Quaternion) -> Quaternion {
        *that * *self * that.conjugate()
    }

    /// `self + that`. Only meaningful when both are pure.
    pub fn translate_by(&self, that: &Quaternion) -> Quaternion {
        *self + *that
    }

    // ------------------------------------------------------------------------
    // Angle + direction
    // ------------------------------------------------------------------------

    /// The rotation angle and unit direction encoded by `self`.
    ///
    /// Returns `None` for the zero quaternion. A zero angle yields a zero
    /// direction.
    pub fn as_angle_direction(&self) -> Option<(Real, [Real; 3])> {
        let that = self.normalize()?;
        let [x, y, z] = self.vector();
        let angle = 2.0 * x.hypot(y).hypot(z).atan2(self.q0);

        if angle == 0.0 {
            return Some((angle, [0.0, 0.0, 0.0]));
        }

        let factor = (angle / 2.0).sin();
        Some((
            angle,
            [that.q1 / factor, that.q2 / factor, that.q3 / factor],
        ))
    }

    /// Rotation by `angle` (radians) about `direction`. A zero or non-finite direction
    /// yields [`Quaternion::IDENTITY`].
    pub fn from_angle_direction(angle: Real, direction: [Real; 3]) -> Quaternion {
        let [x, y, z] = direction;
        let n = x.hypot(y).hypot(z);
        if n == 0.0 || !n.is_finite() {
            return Quaternion::IDENTITY;
        }

        let (s, c) = (angle / 2.0).sin_cos();
        Quaternion::new(c, s * x / n, s * y / n, s * z / n)
    }

    pub fn from_axis_angle(axis: Axis, angle: Real) -> Quaternion {
        Self::from_angle_direction(angle, axis.unit())
    }

    // ------------------------------------------------------------------------
    // Fixed angles
    // ------------------------------------------------------------------------

    /// Fixed XYZ angles `(phi, theta, psi)`: roll about x, pitch about y, yaw
    /// about z.
    pub fn as_fixed_xyz_angles(&self) -> (Real, Real, Real) {
        let Quaternion { q0, q1, q2, q3 } = *self;
        let phi = (2.0 * (q0 * q1 + q2 * q3)).atan2(1.0 - 2.0 * (q1 * q1 + q2 * q2));
        let theta = (2.0 * (q0 * q2 - q3 * q1)).clamp(-1.0, 1.0).asin();
        let psi = (2.0 * (q0 * q3 + q1 * q2)).atan2(1.0 - 2.0 * (q2 * q2 + q3 * q3));
        (phi, theta, psi)
    }

    /// Yaw about z, then pitch about y, then roll about x (intrinsic), i.e.
    /// `qz(yaw) * qy(pitch) * qx(roll)`.
    pub fn from_yaw_pitch_roll(yaw: Real, pitch: Real, roll: Real) -> Quaternion {
        let (ys, yc) = (yaw / 2.0).sin_cos();
        let (ps, pc) = (pitch / 2.0).sin_cos();
        let (rs, rc) = (roll / 2.0).sin_cos();

        Quaternion::new(
            yc * pc * rc + ys * ps * rs,
            yc * pc * rs - ys * ps * rc,
            yc * ps * rc + ys * pc * rs,
            ys * pc * rc - yc * ps * rs,
        )
    }
}

impl Add for Quaternion {
    type Output = Quaternion;

    fn add(self, rhs: Quaternion) -> Quaternion {
        Quaternion::new(
            self.q0 + rhs.q0,
            self.q1 + rhs.q1,
            self.q2 + rhs.q2,
            self.q3 + rhs.q3,
        )
    }
}

impl Sub for Quaternion {
    type Output = Quaternion;

    fn sub(self, rhs: Quaternion) -> Quaternion {
        self + -rhs
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Quaternion {
        Quaternion::new(-self.q0, -self.q1, -self.q2, -self.q3)
    }
}

/// Hamilton product. Not commutative: `a * b` performs `b` then `a`.
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        let (a, b) = (self, rhs);
        Quaternion::new(
            a.q0 * b.q0 - a.q1 * b.q1 - a.q2 * b.q2 - a.q3 * b.q3,
            a.q0 * b.q1 + a.q1 * b.q0 + a.q2 * b.q3 - a.q3 * b.q2,
            a.q0 * b.q2 - a.q1 * b.q3 + a.q2 * b.q0 + a.q3 * b.q1,
            a.q0 * b.q3 + a.q1 * b.q2 - a.q2 * b.q1 + a.q3 * b.q0,
        )
    }
}

impl Mul<Real> for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Real) -> Quaternion {
        Quaternion::new(self.q0 * rhs, self.q1 * rhs, self.q2 * rhs, self.q3 * rhs)
    }
}

impl Mul<Quaternion> for Real {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        rhs * self
    }
}
