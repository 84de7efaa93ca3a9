use crate::error::{Error, Result};
use crate::guess::GuessRecord;
use crate::projection::ProjectionBasis;
use crate::radius::RadiusScale;
use crate::vector::Vector;
use serde::{Deserialize, Serialize};

/// A renderable guess position: the projected direction scaled to the
/// rank-derived radius. Derived on every refresh, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub word: String,
    pub rank: usize,
    pub position: [f32; 3],
}

/// Combine projection and radius mapping into plot coordinates for the
/// current guess set. The raw projection magnitude carries no meaning, so
/// each direction is normalized before the radius is applied; a guess that
/// projects to the origin stays at the origin.
pub fn plot_points(
    records: &[GuessRecord],
    vectors: &[Vector],
    target: &Vector,
    basis: &ProjectionBasis,
    scale: &RadiusScale,
    vocab_size: usize,
) -> Result<Vec<PlotPoint>> {
    if records.len() != vectors.len() {
        return Err(Error::InvalidDomain(format!(
            "{} guess records but {} vectors",
            records.len(),
            vectors.len()
        )));
    }

    let mut points = Vec::with_capacity(records.len());
    for (record, vector) in records.iter().zip(vectors) {
        let raw = basis.apply(vector, target)?;
        let radius = scale.radius(record.rank, vocab_size)?;

        let magnitude = (raw[0] * raw[0] + raw[1] * raw[1] + raw[2] * raw[2]).sqrt();
        let position = if magnitude > 1e-9 {
            let k = radius / magnitude;
            [raw[0] * k, raw[1] * k, raw[2] * k]
        } else {
            [0.0; 3]
        };

        points.push(PlotPoint {
            word: record.word.clone(),
            rank: record.rank,
            position,
        });
    }
    Ok(points)
}
