//! Localization pipeline for a single spike.
//!
//! 1. **Sampling** ([`sampler`]): triggering channel plus neighborhood,
//!    weighted and centered on the triggering electrode
//! 2. **Center of mass** ([`centroid`]): weighted mean of the offsets
//!
//! [`localize_spike`] composes both and translates the result back to
//! absolute array coordinates.

mod centroid;
mod sampler;

pub use centroid::center_of_mass;
pub use sampler::sample_neighborhood;

use crate::config::Config;
use crate::error::Result;
use crate::geometry::ProbeGeometry;
use crate::spike::Spike;
use crate::types::Centroid;

/// Estimate the absolute origin of `spike`.
///
/// # Errors
///
/// `MissingGeometry` if a needed channel has no position; `InvalidInput` for
/// non-finite amplitudes.
pub fn localize_spike(spike: &Spike, geometry: &ProbeGeometry, config: &Config) -> Result<Centroid> {
    let origin = geometry.require(spike.channel)?;
    let samples = sample_neighborhood(spike, geometry, config)?;
    let offset = center_of_mass(&samples)?;
    Ok(origin.translate(offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LocalizeError;
    use crate::types::{ChannelId, ElectrodePosition};

    #[test]
    fn test_end_to_end_example() {
        let geometry = ProbeGeometry::new(vec![
            ElectrodePosition::new(10.0, 10.0),
            ElectrodePosition::new(12.0, 10.0),
            ElectrodePosition::new(10.0, 12.0),
        ]);
        let spike = Spike::new(0, 1234, -4.0)
            .with_reading(1, -1.0)
            .with_reading(2, -1.0);

        let centroid = localize_spike(&spike, &geometry, &Config::default()).unwrap();
        assert!((centroid.x - (10.0 + 1.0 / 3.0)).abs() < 1e-9);
        assert!((centroid.y - (10.0 + 1.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_weights_resolve_to_trigger_position() {
        let geometry = ProbeGeometry::grid(2, 2, 5.0);
        let spike = Spike::new(3, 0, 0.0).with_reading(0, 0.0);
        let centroid = localize_spike(&spike, &geometry, &Config::default()).unwrap();
        assert_eq!(centroid, Centroid::new(5.0, 5.0));
    }

    #[test]
    fn test_missing_trigger_geometry() {
        let geometry = ProbeGeometry::grid(2, 2, 1.0);
        let err = localize_spike(&Spike::new(99, 0, -1.0), &geometry, &Config::default()).unwrap_err();
        assert!(matches!(err, LocalizeError::MissingGeometry { channel: ChannelId(99) }));
    }
}
