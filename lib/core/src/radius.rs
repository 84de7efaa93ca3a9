use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_RADIUS: f32 = 0.1;
pub const DEFAULT_MAX_RADIUS: f32 = 1.0;

/// Log-scale mapping from similarity rank to a visual radius, shared by the
/// 2D and 3D renderings.
///
/// Rank 1 (the target itself) sits at the origin; every other rank lands on
/// a log10 scale anchored at the vocabulary size, so the near field gets
/// most of the visual range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusScale {
    pub min_radius: f32,
    pub max_radius: f32,
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self {
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
        }
    }
}

impl RadiusScale {
    #[must_use]
    pub fn new(min_radius: f32, max_radius: f32) -> Self {
        Self {
            min_radius,
            max_radius,
        }
    }

    /// Radius for `rank` in a vocabulary of `vocab_size` words.
    /// Defined for rank >= 1 and vocab_size >= 2; `InvalidDomain` otherwise.
    pub fn radius(&self, rank: usize, vocab_size: usize) -> Result<f32> {
        if rank < 1 {
            return Err(Error::InvalidDomain(format!(
                "rank must be >= 1, got {rank}"
            )));
        }
        if vocab_size < 2 {
            return Err(Error::InvalidDomain(format!(
                "vocabulary size must be >= 2, got {vocab_size}"
            )));
        }
        if rank == 1 {
            return Ok(0.0);
        }

        let fraction = (rank as f32).log10() / (vocab_size as f32).log10();
        Ok(self.min_radius + fraction * (self.max_radius - self.min_radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_one_is_origin() {
        let scale = RadiusScale::default();
        assert_eq!(scale.radius(1, 2).unwrap(), 0.0);
        assert_eq!(scale.radius(1, 100_000).unwrap(), 0.0);
    }

    #[test]
    fn test_monotone_in_rank() {
        let scale = RadiusScale::default();
        let mut previous = 0.0;
        for rank in 1..=1000 {
            let radius = scale.radius(rank, 1000).unwrap();
            assert!(radius >= previous, "radius decreased at rank {rank}");
            previous = radius;
        }
    }

    #[test]
    fn test_last_rank_hits_max_radius() {
        let scale = RadiusScale::new(0.2, 5.0);
        let radius = scale.radius(1000, 1000).unwrap();
        assert!((radius - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_domain_errors() {
        let scale = RadiusScale::default();
        assert!(matches!(
            scale.radius(0, 100),
            Err(Error::InvalidDomain(_))
        ));
        assert!(matches!(
            scale.radius(5, 1),
            Err(Error::InvalidDomain(_))
        ));
    }
}
