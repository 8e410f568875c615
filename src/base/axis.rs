//! Cartesian axes.

use std::fmt;

use super::Real;
use crate::error::FrameError;

/// One of the three cartesian axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Number of axes.
    pub const COUNT: usize = 1 + Axis::Z.index();

    /// Position of this axis in a coordinate triple
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        }
    }

    /// The unit basis vector along this axis.
    pub fn unit(self) -> [Real; 3] {
        let mut v = [0.0; 3];
        v[self.index()] = 1.0;
        v
    }
}

impl TryFrom<usize> for Axis {
    type Error = FrameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Axis::ALL
            .get(index)
            .copied()
            .ok_or(FrameError::InvalidAxis(index))
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
