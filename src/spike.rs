//! Detected spike events as handed over by the detector.

use serde::{Deserialize, Serialize};

use crate::types::{Centroid, ChannelId};

/// Peak-frame amplitude recorded on one channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelReading {
    /// Channel the amplitude was recorded on.
    pub channel: ChannelId,
    /// Signed amplitude at the spike's peak frame.
    pub amplitude: f64,
}

/// One detected spike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spike {
    /// Channel on which the spike crossed threshold.
    pub channel: ChannelId,
    /// Sample index of the peak.
    pub frame: u64,
    /// Signed peak amplitude on the triggering channel.
    pub amplitude: f64,
    /// Amplitudes on nearby channels at the peak frame.
    pub neighbors: Vec<ChannelReading>,
}

impl Spike {
    /// Create a spike with no neighbor readings.
    pub fn new(channel: usize, frame: u64, amplitude: f64) -> Self {
        Self {
            channel: ChannelId(channel),
            frame,
            amplitude,
            neighbors: Vec::new(),
        }
    }

    /// Add a neighbor reading.
    pub fn with_reading(mut self, channel: usize, amplitude: f64) -> Self {
        self.neighbors.push(ChannelReading {
            channel: ChannelId(channel),
            amplitude,
        });
        self
    }
}

/// A spike together with its absolute location estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalizedSpike<'a> {
    /// The originating spike.
    pub spike: &'a Spike,
    /// Estimated origin in array-layout units.
    pub centroid: Centroid,
}
