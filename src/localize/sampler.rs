//! Neighborhood sampling around a spike's triggering channel.

use crate::config::{Config, Neighborhood};
use crate::error::{LocalizeError, Result};
use crate::geometry::{within_radius, ProbeGeometry};
use crate::spike::Spike;
use crate::types::{AmplitudeSample, Offset, Weight};

/// Build the (weight, offset) samples for one spike.
///
/// The triggering channel always comes first with offset zero, followed by
/// the neighborhood's readings in the order the spike lists them. Readings
/// outside the neighborhood are ignored, as is a neighbor reading on the
/// triggering channel itself. A channel listed more than once contributes
/// only its first reading.
///
/// # Errors
///
/// - `MissingGeometry` if the triggering channel, or a neighbor reading that
///   needs a position, is absent from `geometry`.
/// - `InvalidInput` if a used amplitude, or the weight derived from it, is
///   not finite.
pub fn sample_neighborhood(
    spike: &Spike,
    geometry: &ProbeGeometry,
    config: &Config,
) -> Result<Vec<AmplitudeSample>> {
    let origin = geometry.require(spike.channel)?;
    let mut weights = Vec::with_capacity(spike.neighbors.len() + 1);
    let mut offsets = Vec::with_capacity(spike.neighbors.len() + 1);
    let mut channels = Vec::with_capacity(spike.neighbors.len() + 1);

    channels.push(spike.channel);
    weights.push(weigh(spike.amplitude, config)?);
    offsets.push(Offset::ZERO);

    let adjacent = geometry.neighbors(spike.channel);
    for reading in &spike.neighbors {
        if channels.contains(&reading.channel) {
            continue;
        }
        let included = match config.neighborhood {
            Neighborhood::Radius(radius) => {
                within_radius(origin, geometry.require(reading.channel)?, radius)
            }
            Neighborhood::Adjacency => adjacent.contains(&reading.channel),
        };
        if !included {
            continue;
        }

        let position = geometry.require(reading.channel)?;
        channels.push(reading.channel);
        weights.push(weigh(reading.amplitude, config)?);
        offsets.push(position.offset_from(origin));
    }

    if config.subtract_median {
        let baseline = median(&weights);
        for w in &mut weights {
            *w = (*w - baseline).max(0.0);
        }
    }

    Ok(channels
        .into_iter()
        .zip(weights)
        .zip(offsets)
        .map(|((channel, w), offset)| AmplitudeSample::new(channel, Weight::new(w), offset))
        .collect())
}

fn weigh(amplitude: f64, config: &Config) -> Result<f64> {
    if !amplitude.is_finite() {
        return Err(LocalizeError::InvalidInput(format!(
            "non-finite amplitude {amplitude}"
        )));
    }
    let weight = config.weighting.weigh(amplitude);
    if !weight.is_finite() {
        return Err(LocalizeError::InvalidInput(format!(
            "amplitude {amplitude} overflows its {:?} weight",
            config.weighting
        )));
    }
    Ok(weight)
}

/// Median of a non-empty slice (mean of the middle pair for even lengths).
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        0.5 * (sorted[n / 2 - 1] + sorted[n / 2])
    }
}
