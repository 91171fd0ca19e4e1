//! Main `Localizer` entry point and builder.

use std::env;
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::{Config, Neighborhood, WeightPolicy};
use crate::constants::{ENV_RADIUS, ENV_SUBTRACT_MEDIAN, ENV_WEIGHTING};
use crate::error::{LocalizeError, Result};
use crate::geometry::ProbeGeometry;
use crate::localize;
use crate::spike::{LocalizedSpike, Spike};
use crate::thread_pool;
use crate::types::Centroid;

/// Configured spike localizer bound to one probe.
///
/// Cloning is cheap: the geometry table is shared, never copied.
///
/// # Example
///
/// ```ignore
/// use spike_localizer::{Localizer, ProbeGeometry, Spike, WeightPolicy};
///
/// let localizer = Localizer::new(ProbeGeometry::grid(64, 64, 1.0))
///     .radius(1.5)
///     .weighting(WeightPolicy::Rectified);
///
/// let spike = Spike::new(130, 5_000, -90.0).with_reading(131, -40.0);
/// let centroid = localizer.localize_spike(&spike)?;
/// ```
#[derive(Debug, Clone)]
pub struct Localizer {
    config: Config,
    geometry: Arc<ProbeGeometry>,
}

/// Outcome of localizing a batch of spikes.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome<'a> {
    /// Successfully localized spikes, in input order.
    pub localized: Vec<LocalizedSpike<'a>>,
    /// Spikes dropped because a channel had no position.
    pub missing_geometry: usize,
    /// Spikes dropped because of invalid amplitudes.
    pub invalid_input: usize,
}

impl BatchOutcome<'_> {
    /// Total number of spikes that were not localized.
    pub fn dropped(&self) -> usize {
        self.missing_geometry + self.invalid_input
    }
}

impl Localizer {
    /// Create a localizer with default configuration.
    pub fn new(geometry: impl Into<Arc<ProbeGeometry>>) -> Self {
        Self::with_config(geometry, Config::default())
    }

    /// Create a localizer with an explicit configuration.
    pub fn with_config(geometry: impl Into<Arc<ProbeGeometry>>, config: Config) -> Self {
        let localizer = Self {
            config,
            geometry: geometry.into(),
        };
        localizer.check_neighborhood();
        localizer
    }

    /// Use every channel within `radius` of the triggering electrode.
    pub fn radius(mut self, radius: f64) -> Self {
        self.config.neighborhood = Neighborhood::Radius(radius);
        self
    }

    /// Use the probe's neighbor lists instead of a radius.
    ///
    /// Logs a warning if the probe has no neighbor lists: every spike would
    /// then resolve to its triggering electrode.
    pub fn adjacency(mut self) -> Self {
        self.config.neighborhood = Neighborhood::Adjacency;
        self.check_neighborhood();
        self
    }

    /// Set the amplitude weighting policy.
    pub fn weighting(mut self, policy: WeightPolicy) -> Self {
        self.config.weighting = policy;
        self
    }

    /// Enable or disable median baseline subtraction.
    pub fn subtract_median(mut self, enabled: bool) -> Self {
        self.config.subtract_median = enabled;
        self
    }

    /// Merge configuration from environment variables.
    ///
    /// Reads `SPIKELOC_RADIUS`, `SPIKELOC_WEIGHTING` and
    /// `SPIKELOC_SUBTRACT_MEDIAN`. Values that fail to parse are ignored.
    pub fn from_env(mut self) -> Self {
        if let Some(radius) = parse_env(ENV_RADIUS, parse_radius) {
            self = self.radius(radius);
        }
        if let Some(policy) = parse_env(ENV_WEIGHTING, |s| s.parse::<WeightPolicy>().ok()) {
            self = self.weighting(policy);
        }
        if let Some(enabled) = parse_env(ENV_SUBTRACT_MEDIAN, parse_bool) {
            self = self.subtract_median(enabled);
        }
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the neighborhood policy can select any neighbor at all.
    pub fn has_usable_neighborhood(&self) -> bool {
        match self.config.neighborhood {
            Neighborhood::Radius(radius) => radius > 0.0,
            Neighborhood::Adjacency => self.geometry.has_neighbors(),
        }
    }

    fn check_neighborhood(&self) {
        if !self.has_usable_neighborhood() {
            tracing::warn!(
                neighborhood = ?self.config.neighborhood,
                channels = self.geometry.len(),
                "neighborhood selects no channels; spikes resolve to their triggering electrode"
            );
        }
    }

    /// Estimate the absolute origin of one spike.
    pub fn localize_spike(&self, spike: &Spike) -> Result<Centroid> {
        let centroid = localize::localize_spike(spike, &self.geometry, &self.config)?;
        tracing::debug!(
            channel = %spike.channel,
            frame = spike.frame,
            x = centroid.x,
            y = centroid.y,
            "localized spike"
        );
        Ok(centroid)
    }

    /// Localize every spike, one result per spike in input order.
    pub fn localize_each(&self, spikes: &[Spike]) -> Vec<Result<Centroid>> {
        thread_pool::install(|| {
            #[cfg(feature = "parallel")]
            let spikes = spikes.par_iter();
            #[cfg(not(feature = "parallel"))]
            let spikes = spikes.iter();

            spikes.map(|spike| self.localize_spike(spike)).collect()
        })
    }

    /// Localize a batch, logging and dropping spikes that cannot be placed.
    ///
    /// A spike that fails is excluded from the output instead of aborting
    /// the batch; the counts in [`BatchOutcome`] say how many were lost.
    pub fn localize_all<'a>(&self, spikes: &'a [Spike]) -> BatchOutcome<'a> {
        let mut outcome = BatchOutcome {
            localized: Vec::with_capacity(spikes.len()),
            ..BatchOutcome::default()
        };

        for (spike, result) in spikes.iter().zip(self.localize_each(spikes)) {
            match result {
                Ok(centroid) => outcome.localized.push(LocalizedSpike { spike, centroid }),
                Err(err @ LocalizeError::MissingGeometry { .. }) => {
                    tracing::warn!(channel = %spike.channel, frame = spike.frame, error = %err, "dropping spike");
                    outcome.missing_geometry += 1;
                }
                Err(err) => {
                    tracing::warn!(channel = %spike.channel, frame = spike.frame, error = %err, "dropping spike");
                    outcome.invalid_input += 1;
                }
            }
        }

        tracing::debug!(
            total = spikes.len(),
            localized = outcome.localized.len(),
            dropped = outcome.dropped(),
            "batch localized"
        );
        outcome
    }
}

fn parse_env<T>(key: &str, parse: impl FnOnce(&str) -> Option<T>) -> Option<T> {
    let raw = env::var(key).ok()?;
    let parsed = parse(&raw);
    if parsed.is_none() {
        tracing::warn!(key, value = %raw, "ignoring unparseable environment override");
    }
    parsed
}

fn parse_radius(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite() && *r >= 0.0)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
