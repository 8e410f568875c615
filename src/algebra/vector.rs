//! Fixed-length contiguous vectors of floating-point values.

use std::ops::{Index, IndexMut};

use num_traits::Float;

use crate::base::{Real, RealFunc};

/// A fixed-count vector of floating-point values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector<V: Float> {
    values: Vec<V>,
}

impl<V: Float> Vector<V> {
    /// Create a vector of `count` zeros.
    pub fn new(count: usize) -> Self {
        Self {
            values: vec![V::zero(); count],
        }
    }

    pub fn from_vec(values: Vec<V>) -> Self {
        Self { values }
    }

    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<V> {
        self.values.get(index).copied()
    }

    /// Set the value at `index`. Returns `false` if `index` is out of range.
    pub fn set(&mut self, index: usize, value: V) -> bool {
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn as_slice(&self) -> &[V] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.values.iter()
    }

    /// Sum of all values.
    pub fn sum(&self) -> V {
        self.values.iter().fold(V::zero(), |acc, &v| acc + v)
    }

    /// Sum of the squares of all values.
    pub fn sum_of_squares(&self) -> V {
        self.values.iter().fold(V::zero(), |acc, &v| acc + v * v)
    }

    /// Euclidean length.
    pub fn norm(&self) -> V {
        self.sum_of_squares().sqrt()
    }
}

impl Vector<Real> {
    /// Apply `f` to every value.
    pub fn map(&self, f: RealFunc) -> Self {
        Self {
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }
}

impl<V: Float> Index<usize> for Vector<V> {
    type Output = V;

    fn index(&self, index: usize) -> &V {
        &self.values[index]
    }
}

impl<V: Float> IndexMut<usize> for Vector<V> {
    fn index_mut(&mut self, index: usize) -> &mut V {
        &mut self.values[index]
    }
}

impl<V: Float> From<Vec<V>> for Vector<V> {
    fn from(values: Vec<V>) -> Self {
        Self::from_vec(values)
    }
}
