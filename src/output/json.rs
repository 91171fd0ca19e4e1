//! JSON serialization for localized spikes.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spike::LocalizedSpike;
use crate::types::ChannelId;

/// Flat row handed to the clustering stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalizedRecord {
    /// Triggering channel.
    pub channel: ChannelId,
    /// Peak sample index.
    pub frame: u64,
    /// Signed peak amplitude on the triggering channel.
    pub amplitude: f64,
    /// Estimated x coordinate.
    pub x: f64,
    /// Estimated y coordinate.
    pub y: f64,
}

impl From<&LocalizedSpike<'_>> for LocalizedRecord {
    fn from(localized: &LocalizedSpike<'_>) -> Self {
        Self {
            channel: localized.spike.channel,
            frame: localized.spike.frame,
            amplitude: localized.spike.amplitude,
            x: localized.centroid.x,
            y: localized.centroid.y,
        }
    }
}

fn records(spikes: &[LocalizedSpike<'_>]) -> Vec<LocalizedRecord> {
    spikes.iter().map(LocalizedRecord::from).collect()
}

/// Serialize localized spikes to a compact JSON array.
///
/// # Errors
///
/// Returns `Json` if serialization fails (should not happen for finite
/// coordinates).
pub fn to_json(spikes: &[LocalizedSpike<'_>]) -> Result<String> {
    Ok(serde_json::to_string(&records(spikes))?)
}

/// Serialize localized spikes to a pretty-printed JSON array.
///
/// # Errors
///
/// Returns `Json` if serialization fails.
pub fn to_json_pretty(spikes: &[LocalizedSpike<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&records(spikes))?)
}
