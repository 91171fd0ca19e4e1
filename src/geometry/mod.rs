//! Electrode layout of a probe.
//!
//! [`ProbeGeometry`] is the read-only channel → position table together with
//! each channel's neighbor list. It is built once per recording session and
//! shared by reference (or `Arc`) with every localization call.

mod parse;

pub use parse::{parse_neighbors, parse_positions};

use crate::constants::RADIUS_EPSILON;
use crate::error::{LocalizeError, Result};
use crate::types::{ChannelId, ElectrodePosition};

/// Channel positions and neighbor lists for one probe.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeGeometry {
    positions: Vec<ElectrodePosition>,
    neighbors: Vec<Vec<ChannelId>>,
}

impl ProbeGeometry {
    /// Create a geometry with no neighbor lists.
    ///
    /// Suitable for radius-based neighborhoods, which only need positions.
    pub fn new(positions: Vec<ElectrodePosition>) -> Self {
        let neighbors = vec![Vec::new(); positions.len()];
        Self {
            positions,
            neighbors,
        }
    }

    /// Create a geometry whose neighbor lists hold every other channel within
    /// `radius` (inclusive).
    pub fn with_radius(positions: Vec<ElectrodePosition>, radius: f64) -> Self {
        let neighbors = compute_neighbors(&positions, radius);
        Self {
            positions,
            neighbors,
        }
    }

    /// Create a geometry from precomputed neighbor lists.
    ///
    /// # Errors
    ///
    /// Returns `GeometryParse` if the list count differs from the channel
    /// count or a list references an unknown channel.
    pub fn with_neighbors(
        positions: Vec<ElectrodePosition>,
        neighbors: Vec<Vec<ChannelId>>,
    ) -> Result<Self> {
        if neighbors.len() != positions.len() {
            return Err(LocalizeError::GeometryParse {
                line: 0,
                reason: format!(
                    "{} neighbor rows for {} channels",
                    neighbors.len(),
                    positions.len()
                ),
            });
        }
        for (row, list) in neighbors.iter().enumerate() {
            if let Some(bad) = list.iter().find(|ch| ch.0 >= positions.len()) {
                return Err(LocalizeError::GeometryParse {
                    line: row + 1,
                    reason: format!("neighbor {bad} is not a channel of this probe"),
                });
            }
        }
        Ok(Self {
            positions,
            neighbors,
        })
    }

    /// Regular `cols` x `rows` grid with spacing `pitch`, channels numbered
    /// row-major from the origin. Neighbor lists use a radius of one pitch
    /// diagonal (the 8-connected block).
    pub fn grid(cols: usize, rows: usize, pitch: f64) -> Self {
        let positions = (0..rows)
            .flat_map(|r| {
                (0..cols).map(move |c| ElectrodePosition::new(c as f64 * pitch, r as f64 * pitch))
            })
            .collect();
        Self::with_radius(positions, pitch * std::f64::consts::SQRT_2)
    }

    /// Parse a `positions` description; neighbor lists are computed from
    /// `radius`.
    pub fn from_positions_str(positions: &str, radius: f64) -> Result<Self> {
        Ok(Self::with_radius(parse_positions(positions)?, radius))
    }

    /// Parse a `positions` description and its matching neighbor matrix.
    pub fn from_files_str(positions: &str, neighbors: &str) -> Result<Self> {
        Self::with_neighbors(parse_positions(positions)?, parse_neighbors(neighbors)?)
    }

    /// Number of channels.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the probe has no channels.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of `channel`, if known.
    pub fn position(&self, channel: ChannelId) -> Option<&ElectrodePosition> {
        self.positions.get(channel.0)
    }

    /// Position of `channel`, or `MissingGeometry`.
    pub fn require(&self, channel: ChannelId) -> Result<&ElectrodePosition> {
        self.position(channel)
            .ok_or(LocalizeError::MissingGeometry { channel })
    }

    /// Neighbor list of `channel` (empty for unknown channels).
    pub fn neighbors(&self, channel: ChannelId) -> &[ChannelId] {
        self.neighbors
            .get(channel.0)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Largest neighbor list size on the probe.
    pub fn max_neighbors(&self) -> usize {
        self.neighbors.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether any channel has a neighbor list.
    pub fn has_neighbors(&self) -> bool {
        self.neighbors.iter().any(|list| !list.is_empty())
    }
}

/// Radius query for every channel. Channels are not their own neighbors.
fn compute_neighbors(positions: &[ElectrodePosition], radius: f64) -> Vec<Vec<ChannelId>> {
    positions
        .iter()
        .enumerate()
        .map(|(i, origin)| {
            positions
                .iter()
                .enumerate()
                .filter(|&(j, pos)| j != i && within_radius(origin, pos, radius))
                .map(|(j, _)| ChannelId(j))
                .collect()
        })
        .collect()
}

pub(crate) fn within_radius(a: &ElectrodePosition, b: &ElectrodePosition, radius: f64) -> bool {
    a.distance(b) <= radius + RADIUS_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_layout() {
        let geometry = ProbeGeometry::grid(3, 2, 10.0);
        assert_eq!(geometry.len(), 6);
        assert_eq!(geometry.position(ChannelId(4)), Some(&ElectrodePosition::new(10.0, 10.0)));

        // Corner channel 0 touches 1, 3, 4.
        assert_eq!(geometry.neighbors(ChannelId(0)), &[ChannelId(1), ChannelId(3), ChannelId(4)]);
        // Centre-top channel 1 touches everything else.
        assert_eq!(geometry.neighbors(ChannelId(1)).len(), 5);
        assert_eq!(geometry.max_neighbors(), 5);
    }

    #[test]
    fn test_has_neighbors() {
        let positions = vec![ElectrodePosition::new(0.0, 0.0), ElectrodePosition::new(1.0, 0.0)];
        assert!(!ProbeGeometry::new(positions.clone()).has_neighbors());
        assert!(ProbeGeometry::with_radius(positions, 1.0).has_neighbors());
    }

    #[test]
    fn test_require_missing() {
        let geometry = ProbeGeometry::grid(2, 2, 1.0);
        let err = geometry.require(ChannelId(7)).unwrap_err();
        assert!(matches!(err, LocalizeError::MissingGeometry { channel: ChannelId(7) }));
        assert!(geometry.neighbors(ChannelId(7)).is_empty());
    }

    #[test]
    fn test_with_neighbors_validation() {
        let positions = vec![ElectrodePosition::new(0.0, 0.0), ElectrodePosition::new(1.0, 0.0)];

        let ok = ProbeGeometry::with_neighbors(
            positions.clone(),
            vec![vec![ChannelId(1)], vec![ChannelId(0)]],
        );
        assert!(ok.is_ok());

        let short = ProbeGeometry::with_neighbors(positions.clone(), vec![vec![]]);
        assert!(matches!(short, Err(LocalizeError::GeometryParse { line: 0, .. })));

        let unknown = ProbeGeometry::with_neighbors(positions, vec![vec![], vec![ChannelId(5)]]);
        assert!(matches!(unknown, Err(LocalizeError::GeometryParse { line: 2, .. })));
    }

    #[test]
    fn test_radius_is_inclusive() {
        let positions = vec![
            ElectrodePosition::new(0.0, 0.0),
            ElectrodePosition::new(3.0, 4.0),
            ElectrodePosition::new(6.0, 8.0),
        ];
        let geometry = ProbeGeometry::with_radius(positions, 5.0);
        assert_eq!(geometry.neighbors(ChannelId(0)), &[ChannelId(1)]);
        assert_eq!(geometry.neighbors(ChannelId(1)), &[ChannelId(0), ChannelId(2)]);
    }
}
