//! Value types shared by the sampler and the estimator.

use std::fmt;

use nalgebra::SVector;
use serde::{Deserialize, Serialize};

/// 2-dimensional vector used to accumulate weighted offsets.
pub type Vector2 = SVector<f64, 2>;

/// Index of a physical channel on the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(
    /// Zero-based channel index.
    pub usize,
);

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ch{}", self.0)
    }
}

impl From<usize> for ChannelId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Position of an electrode in array-layout units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElectrodePosition {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl ElectrodePosition {
    /// Create a position from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset of `self` relative to `origin`.
    pub fn offset_from(&self, origin: &ElectrodePosition) -> Offset {
        Offset::new(self.x - origin.x, self.y - origin.y)
    }

    /// Euclidean distance between two electrodes.
    pub fn distance(&self, other: &ElectrodePosition) -> f64 {
        self.offset_from(other).norm()
    }

    /// Translate this position by a relative offset.
    pub fn translate(&self, offset: Offset) -> Centroid {
        Centroid {
            x: self.x + offset.dx,
            y: self.y + offset.dy,
        }
    }
}

/// Displacement relative to the triggering channel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    /// Horizontal displacement.
    pub dx: f64,
    /// Vertical displacement.
    pub dy: f64,
}

impl Offset {
    /// The triggering channel's own offset.
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    /// Create an offset from its components.
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.to_vector().norm()
    }

    pub(crate) fn to_vector(self) -> Vector2 {
        Vector2::new(self.dx, self.dy)
    }

    pub(crate) fn from_vector(v: Vector2) -> Self {
        Self::new(v[0], v[1])
    }
}

/// Non-negative amplitude magnitude used as a centroid weight.
///
/// Construction clamps negative input to zero; the sign convention of the raw
/// deflection is resolved by [`WeightPolicy`](crate::WeightPolicy) before a
/// `Weight` exists.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    /// Create a weight, clamping negative values to zero.
    pub fn new(value: f64) -> Self {
        Self(value.max(0.0))
    }

    /// Underlying magnitude.
    pub fn get(self) -> f64 {
        self.0
    }
}

/// One channel's contribution to a centroid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmplitudeSample {
    /// Channel the reading came from.
    pub channel: ChannelId,
    /// Amplitude magnitude.
    pub weight: Weight,
    /// Channel position relative to the triggering channel.
    pub offset: Offset,
}

impl AmplitudeSample {
    /// Create a sample.
    pub fn new(channel: ChannelId, weight: Weight, offset: Offset) -> Self {
        Self {
            channel,
            weight,
            offset,
        }
    }
}

/// Absolute location estimate in array-layout units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Centroid {
    /// Create a centroid from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
