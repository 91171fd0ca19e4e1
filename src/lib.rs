//! # spike-localizer
//!
//! Estimate where on a dense microelectrode array a detected spike originated.
//!
//! For each spike the crate takes the peak amplitude on the triggering channel
//! and on the channels around it, turns them into non-negative weights, and
//! returns the amplitude-weighted center of mass of the electrode positions:
//!
//! ```text
//! centroid = trigger_position + (Σ wᵢ·dxᵢ / Σ wᵢ, Σ wᵢ·dyᵢ / Σ wᵢ)
//! ```
//!
//! The estimate has sub-pitch resolution and is what downstream clustering
//! uses to group spikes from the same neuron.
//!
//! ## Quick Start
//!
//! ```ignore
//! use spike_localizer::{Localizer, ProbeGeometry, Spike};
//!
//! let geometry = ProbeGeometry::from_files_str(&positions_txt, &neighbors_txt)?;
//! let localizer = Localizer::new(geometry).adjacency();
//!
//! let outcome = localizer.localize_all(&spikes);
//! for located in &outcome.localized {
//!     println!("{} @ ({:.2}, {:.2})", located.spike.channel, located.centroid.x, located.centroid.y);
//! }
//! ```
//!
//! ## Weighting
//!
//! Raw amplitudes are signed voltage deflections. How they become weights is
//! chosen with [`WeightPolicy`]; the default is the absolute value.
//! A neighborhood whose weights are all zero resolves to the triggering
//! channel's own position.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod error;
mod localizer;
mod spike;
mod types;

// Functional modules
pub mod geometry;
pub mod localize;
pub mod output;

mod thread_pool;

// Re-exports for public API
pub use config::{Config, Neighborhood, WeightPolicy};
pub use constants::DEFAULT_NEIGHBORHOOD_RADIUS;
pub use error::{LocalizeError, Result};
pub use geometry::ProbeGeometry;
pub use localize::center_of_mass;
pub use localizer::{BatchOutcome, Localizer};
pub use spike::{ChannelReading, LocalizedSpike, Spike};
pub use types::{AmplitudeSample, Centroid, ChannelId, ElectrodePosition, Offset, Weight};

/// Localize one spike against `geometry` with default configuration.
///
/// Equivalent to `Localizer::new(geometry).localize_spike(spike)` without
/// taking ownership of the geometry.
///
/// # Errors
///
/// Returns `MissingGeometry` if the triggering channel or a neighbor within
/// the default radius has no position.
pub fn localize_spike(spike: &Spike, geometry: &ProbeGeometry) -> Result<Centroid> {
    localize::localize_spike(spike, geometry, &Config::default())
}
