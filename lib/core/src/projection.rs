//! Principal directions of the guess/target difference cloud.
//!
//! Each guess is reduced to its difference from the target vector; the
//! three dominant directions of that centered cloud become the axes of the
//! semantic map. Directions are extracted by power iteration with deflation
//! against the axes already found. The covariance matrix is never
//! materialized: `cov · v` is accumulated as `sum_i c_i (c_i · v)`, which
//! keeps one pass O(G·D) instead of O(D²).

use crate::error::{Error, Result};
use crate::vector::Vector;
use serde::{Deserialize, Serialize};

/// Default power-iteration count. The output feeds a rendering, so a fixed
/// iteration budget stands in for a convergence test.
pub const DEFAULT_POWER_ITERATIONS: usize = 30;

/// Residual norms below this are treated as exhausted variance
const NORM_EPSILON: f32 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Power-iteration steps per extracted direction
    pub iterations: usize,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_POWER_ITERATIONS,
        }
    }
}

/// Three orthonormal directions spanning the centered difference cloud.
///
/// Always unit length and mutually orthogonal within float tolerance,
/// whatever the guess set looks like; degenerate inputs fall back to
/// deterministic default axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionBasis {
    axes: [Vector; 3],
}

impl ProjectionBasis {
    /// Fit a basis to the current guess set. A pure function of its inputs:
    /// the same target and guesses always produce the same basis (the power
    /// iteration is seeded deterministically, not randomly).
    ///
    /// Degenerate cases:
    /// - no guesses: the standard basis e1, e2, e3
    /// - one guess: its normalized difference vector, completed to an
    ///   orthonormal triple
    /// - rank-deficient cloud: real directions first, deterministic
    ///   completion for the rest
    ///
    /// Fails with `InvalidDomain` for dimensions below 3 and
    /// `DimensionMismatch` when a guess disagrees with the target.
    pub fn fit(target: &Vector, guesses: &[Vector], config: &ProjectionConfig) -> Result<Self> {
        let dim = target.dim();
        if dim < 3 {
            return Err(Error::InvalidDomain(format!(
                "projection requires dimension >= 3, got {dim}"
            )));
        }
        for guess in guesses {
            if guess.dim() != dim {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    actual: guess.dim(),
                });
            }
        }

        if guesses.is_empty() {
            return Self::from_axes(vec![unit(0, dim), unit(1, dim), unit(2, dim)]);
        }

        if guesses.len() == 1 {
            let diff = &guesses[0] - target;
            let mut axes = Vec::with_capacity(3);
            if diff.norm() > NORM_EPSILON {
                axes.push(diff.normalized());
            }
            complete(&mut axes, dim)?;
            return Self::from_axes(axes);
        }

        let diffs: Vec<Vector> = guesses.iter().map(|g| g - target).collect();
        let mut mean = Vector::zeros(dim);
        for diff in &diffs {
            mean.add_scaled(diff, 1.0);
        }
        let mean = &mean * (1.0 / diffs.len() as f32);
        let centered: Vec<Vector> = diffs.iter().map(|d| d - &mean).collect();

        let mut axes = Vec::with_capacity(3);
        for axis_index in 0..3 {
            match power_iteration(&centered, &axes, axis_index, config.iterations) {
                Some(axis) => axes.push(axis),
                // variance exhausted; the remaining axes are completed below
                None => break,
            }
        }
        complete(&mut axes, dim)?;
        Self::from_axes(axes)
    }

    fn from_axes(axes: Vec<Vector>) -> Result<Self> {
        let mut iter = axes.into_iter();
        match (iter.next(), iter.next(), iter.next()) {
            (Some(a), Some(b), Some(c)) => Ok(Self { axes: [a, b, c] }),
            _ => Err(Error::InvalidDomain(
                "could not construct a full 3D basis".to_string(),
            )),
        }
    }

    #[inline]
    #[must_use]
    pub fn axes(&self) -> &[Vector; 3] {
        &self.axes
    }

    /// Project `vector`'s difference from the target onto the three axes.
    /// The magnitude of the result carries no fixed scale; only the
    /// direction is meaningful.
    pub fn apply(&self, vector: &Vector, target: &Vector) -> Result<[f32; 3]> {
        let diff = vector.difference(target)?;
        Ok([
            diff.dot(&self.axes[0])?,
            diff.dot(&self.axes[1])?,
            diff.dot(&self.axes[2])?,
        ])
    }
}

/// Standard basis vector e_k
fn unit(k: usize, dim: usize) -> Vector {
    let mut data = vec![0.0; dim];
    data[k] = 1.0;
    Vector::new(data)
}

/// Dense deterministic seed for power iteration. A fixed sin/cos pattern
/// rather than an RNG so refitting the same guess set is reproducible.
fn seed_axis(axis_index: usize, dim: usize) -> Vector {
    let data = (0..dim)
        .map(|i| {
            (((axis_index + i + 7) as f32) * 0.123).sin()
                + (((axis_index * i) as f32) * 0.456).cos()
        })
        .collect();
    Vector::new(data)
}

/// Extract one dominant direction of the centered cloud, orthogonal to all
/// of `previous`. Returns `None` once the cloud has no variance left
/// outside the span of `previous` (rank-deficient guess sets).
fn power_iteration(
    centered: &[Vector],
    previous: &[Vector],
    axis_index: usize,
    iterations: usize,
) -> Option<Vector> {
    let dim = centered[0].dim();

    let mut axis = seed_axis(axis_index, dim);
    orthogonalize(&mut axis, previous);
    if axis.norm() <= NORM_EPSILON {
        return None;
    }
    axis.normalize();

    for _ in 0..iterations {
        // next = cov · axis, up to a scale that normalization removes
        let mut next = Vector::zeros(dim);
        for c in centered {
            next.add_scaled(c, c.dot_unchecked(&axis));
        }
        // deflation: keep the iterate out of the span of found axes
        orthogonalize(&mut next, previous);

        let norm = next.norm();
        if norm <= NORM_EPSILON {
            return None;
        }
        axis = &next * (1.0 / norm);
    }

    // one last cleanup so the returned axis is orthonormal to float precision
    orthogonalize(&mut axis, previous);
    let norm = axis.norm();
    if norm <= NORM_EPSILON {
        return None;
    }
    Some(&axis * (1.0 / norm))
}

/// Gram-Schmidt step: remove from `v` its projection on each basis vector
fn orthogonalize(v: &mut Vector, basis: &[Vector]) {
    for b in basis {
        let overlap = v.dot_unchecked(b);
        v.add_scaled(b, -overlap);
    }
}

/// Extend `axes` to three orthonormal vectors using standard-basis
/// candidates. For dim >= 3 a suitable candidate always exists.
fn complete(axes: &mut Vec<Vector>, dim: usize) -> Result<()> {
    let mut candidate_index = 0;
    while axes.len() < 3 {
        if candidate_index >= dim {
            return Err(Error::InvalidDomain(
                "no orthogonal direction found".to_string(),
            ));
        }
        let mut candidate = unit(candidate_index, dim);
        candidate_index += 1;

        orthogonalize(&mut candidate, axes);
        let norm = candidate.norm();
        if norm > 1e-6 {
            axes.push(&candidate * (1.0 / norm));
        }
    }
    Ok(())
}
