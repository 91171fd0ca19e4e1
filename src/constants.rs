//! Default tuning constants.

/// Default neighborhood radius in array-layout units.
///
/// Two electrode pitches on a unit-pitch grid.
pub const DEFAULT_NEIGHBORHOOD_RADIUS: f64 = 2.0;

/// Tolerance used when comparing a channel's distance to the radius.
pub const RADIUS_EPSILON: f64 = 1e-9;

/// Environment variable overriding the neighborhood radius.
pub const ENV_RADIUS: &str = "SPIKELOC_RADIUS";

/// Environment variable selecting the weighting policy.
pub const ENV_WEIGHTING: &str = "SPIKELOC_WEIGHTING";

/// Environment variable toggling median baseline subtraction.
pub const ENV_SUBTRACT_MEDIAN: &str = "SPIKELOC_SUBTRACT_MEDIAN";
