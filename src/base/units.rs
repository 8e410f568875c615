//! Length and angle units.
//!
//! Frames store translations in meters and angles in radians; these units
//! convert user-facing values to and from those base units.

use std::f64::consts::PI;

use super::Real;

/// Meters in one astronomical unit (IAU 2012).
const METERS_PER_AU: Real = 149_597_870_700.0;

/// A unit of length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthUnit {
    #[default]
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    AstronomicalUnit,
}

impl LengthUnit {
    pub fn meters_per_unit(self) -> Real {
        match self {
            Self::Meter => 1.0,
            Self::Kilometer => 1_000.0,
            Self::Centimeter => 0.01,
            Self::Millimeter => 0.001,
            Self::AstronomicalUnit => METERS_PER_AU,
        }
    }

    /// Convert `value`, expressed in `self`, to meters.
    pub fn to_meters(self, value: Real) -> Real {
        match self {
            Self::Meter => value,
            _ => value * self.meters_per_unit(),
        }
    }

    /// Convert `value`, expressed in meters, to `self`.
    pub fn from_meters(self, value: Real) -> Real {
        match self {
            Self::Meter => value,
            _ => value / self.meters_per_unit(),
        }
    }

    /// Convert `value`, expressed in `from`, to `self`.
    pub fn convert(self, value: Real, from: LengthUnit) -> Real {
        if self == from {
            value
        } else {
            self.from_meters(from.to_meters(value))
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Meter => "m",
            Self::Kilometer => "km",
            Self::Centimeter => "cm",
            Self::Millimeter => "mm",
            Self::AstronomicalUnit => "au",
        }
    }
}

/// A unit of plane angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AngleUnit {
    #[default]
    Radian,
    Degree,
}

impl AngleUnit {
    /// Convert `value`, expressed in `self`, to radians.
    pub fn to_radians(self, value: Real) -> Real {
        match self {
            Self::Radian => value,
            Self::Degree => value * PI / 180.0,
        }
    }

    /// Convert `value`, expressed in radians, to `self`.
    pub fn from_radians(self, value: Real) -> Real {
        match self {
            Self::Radian => value,
            Self::Degree => value * 180.0 / PI,
        }
    }

    /// Convert `value`, expressed in `from`, to `self`.
    pub fn convert(self, value: Real, from: AngleUnit) -> Real {
        if self == from {
            value
        } else {
            self.from_radians(from.to_radians(value))
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Radian => "rad",
            Self::Degree => "deg",
        }
    }
}
