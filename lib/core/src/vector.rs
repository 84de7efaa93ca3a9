use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A dense embedding vector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn from_slice(data: &[f32]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![0.0; dim],
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    fn check_dim(&self, other: &Vector) -> Result<()> {
        if self.dim() != other.dim() {
            return Err(Error::DimensionMismatch {
                expected: self.dim(),
                actual: other.dim(),
            });
        }
        Ok(())
    }

    /// Dot product. Fails with `DimensionMismatch` on unequal lengths.
    #[inline]
    pub fn dot(&self, other: &Vector) -> Result<f32> {
        self.check_dim(other)?;
        Ok(self.dot_unchecked(other))
    }

    /// Dot product without the dimension check. Callers must have validated
    /// dimensions up front; used in the projection inner loops.
    #[inline]
    pub(crate) fn dot_unchecked(&self, other: &Vector) -> f32 {
        debug_assert_eq!(self.dim(), other.dim());
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Euclidean (L2) norm
    #[inline]
    #[must_use]
    pub fn norm(&self) -> f32 {
        self.data.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// Cosine similarity in [-1, 1]. Returns 0.0 when either vector has zero
    /// norm; fails with `DimensionMismatch` on unequal lengths.
    #[inline]
    pub fn cosine_similarity(&self, other: &Vector) -> Result<f32> {
        self.check_dim(other)?;

        let norm_a = self.norm();
        let norm_b = other.norm();
        if norm_a == 0.0 || norm_b == 0.0 {
            return Ok(0.0);
        }

        Ok(self.dot_unchecked(other) / (norm_a * norm_b))
    }

    /// Element-wise `self - other` into a fresh vector
    #[inline]
    pub fn difference(&self, other: &Vector) -> Result<Vector> {
        self.check_dim(other)?;
        Ok(self - other)
    }

    /// Element-wise average of the two vectors
    #[inline]
    pub fn midpoint(&self, other: &Vector) -> Result<Vector> {
        self.check_dim(other)?;
        Ok(Vector::new(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| (a + b) * 0.5)
                .collect(),
        ))
    }

    /// Normalize the vector to unit length
    #[inline]
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > f32::EPSILON {
            let inv_norm = 1.0 / norm;
            for x in &mut self.data {
                *x *= inv_norm;
            }
        }
    }

    /// Get normalized copy
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut v = self.clone();
        v.normalize();
        v
    }

    /// `self += other * factor` in place. Accumulator for power iteration
    /// and Gram-Schmidt; dimensions must already match.
    #[inline]
    pub(crate) fn add_scaled(&mut self, other: &Vector, factor: f32) {
        debug_assert_eq!(self.dim(), other.dim());
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a += b * factor;
        }
    }
}

impl Add for &Vector {
    type Output = Vector;

    fn add(self, other: &Vector) -> Vector {
        assert_eq!(self.dim(), other.dim());
        Vector::new(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + b)
                .collect(),
        )
    }
}

impl Sub for &Vector {
    type Output = Vector;

    fn sub(self, other: &Vector) -> Vector {
        assert_eq!(self.dim(), other.dim());
        Vector::new(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a - b)
                .collect(),
        )
    }
}

impl Mul<f32> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f32) -> Vector {
        Vector::new(self.data.iter().map(|x| x * scalar).collect())
    }
}
