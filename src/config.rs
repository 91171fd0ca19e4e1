//! Configuration for spike localization.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_NEIGHBORHOOD_RADIUS;

/// Configuration options for [`Localizer`](crate::Localizer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Which channels around the triggering channel contribute
    /// (default: `Radius(2.0)`).
    pub neighborhood: Neighborhood,

    /// How raw amplitudes become non-negative weights (default: `Absolute`).
    pub weighting: WeightPolicy,

    /// Subtract the neighborhood's median weight before averaging
    /// (default: false).
    ///
    /// Channels at or below the median end up with zero weight, so only the
    /// channels that stand out from background activity pull the estimate.
    pub subtract_median: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            neighborhood: Neighborhood::Radius(DEFAULT_NEIGHBORHOOD_RADIUS),
            weighting: WeightPolicy::Absolute,
            subtract_median: false,
        }
    }
}

/// Neighborhood selection around the triggering channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Neighborhood {
    /// Channels whose electrode lies within this Euclidean distance
    /// (inclusive) of the triggering electrode.
    Radius(f64),

    /// Channels listed in the probe's neighbor table for the triggering
    /// channel.
    Adjacency,
}

/// Conversion of a signed peak amplitude into a centroid weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeightPolicy {
    /// `|a|`: deflections of either sign count by magnitude.
    #[default]
    Absolute,

    /// `max(-a, 0)`: only negative (downward) deflections count.
    ///
    /// Extracellular spikes are negative-going on most probes; positive
    /// rebounds on distant channels then carry no weight.
    Rectified,

    /// `a²`: emphasises the channels with the largest deflections.
    Squared,
}

impl WeightPolicy {
    /// Apply the policy to a raw amplitude.
    pub fn weigh(&self, amplitude: f64) -> f64 {
        match self {
            Self::Absolute => amplitude.abs(),
            Self::Rectified => (-amplitude).max(0.0),
            Self::Squared => amplitude * amplitude,
        }
    }
}

impl FromStr for WeightPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absolute" | "abs" => Ok(Self::Absolute),
            "rectified" | "negative" => Ok(Self::Rectified),
            "squared" | "square" => Ok(Self::Squared),
            other => Err(format!("unknown weighting policy '{other}'")),
        }
    }
}
