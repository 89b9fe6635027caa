use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// A dense embedding vector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
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

    /// Euclidean length
    #[inline]
    pub fn norm(&self) -> f32 {
        crate::simd::norm_simd(&self.data) as f32
    }

    /// Cosine similarity with another vector of the same dimension
    #[inline]
    pub fn cosine_similarity(&self, other: &Vector) -> Result<f32> {
        cosine_similarity(&self.data, &other.data)
    }
}

impl From<Vec<f32>> for Vector {
    fn from(data: Vec<f32>) -> Self {
        Self::new(data)
    }
}

impl Mul<f32> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f32) -> Vector {
        Vector::new(self.data.iter().map(|x| x * scalar).collect())
    }
}

/// Outcome of a cosine computation.
///
/// A zero-magnitude input has no direction, so the ratio is undefined.
/// That case is reported separately instead of producing NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Cosine {
    Defined(f32),
    ZeroMagnitude,
}

impl Cosine {
    /// Similarity value, with `ZeroMagnitude` reading as 0.0
    #[inline]
    pub fn value(self) -> f32 {
        match self {
            Cosine::Defined(v) => v,
            Cosine::ZeroMagnitude => 0.0,
        }
    }

    #[inline]
    pub fn is_zero_magnitude(self) -> bool {
        matches!(self, Cosine::ZeroMagnitude)
    }
}

/// Cosine similarity of two vectors, keeping the zero-magnitude case visible.
///
/// The result is not clamped; for arbitrary real vectors it lies in [-1, 1].
pub fn cosine(a: &[f32], b: &[f32]) -> Result<Cosine> {
    if a.len() != b.len() {
        return Err(Error::InvalidDimension {
            expected: a.len(),
            actual: b.len(),
        });
    }

    if is_zero(a) || is_zero(b) {
        return Ok(Cosine::ZeroMagnitude);
    }

    // f64 keeps squared magnitudes of 1e20 or 1e-25 components representable
    let norm_a = crate::simd::norm_simd(a);
    let norm_b = crate::simd::norm_simd(b);
    let dot = crate::simd::dot_product_simd(a, b);
    Ok(Cosine::Defined((dot / (norm_a * norm_b)) as f32))
}

#[inline]
fn is_zero(v: &[f32]) -> bool {
    v.iter().all(|x| *x == 0.0)
}

/// Cosine similarity of two vectors; a zero vector yields 0.0
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    cosine(a, b).map(Cosine::value)
}
