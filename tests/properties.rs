//! Property tests for the center-of-mass reduction.

use proptest::prelude::*;
use spike_localizer::{center_of_mass, AmplitudeSample, ChannelId, Offset, Weight};

fn samples_from(raw: &[(f64, f64, f64)]) -> Vec<AmplitudeSample> {
    raw.iter()
        .enumerate()
        .map(|(i, &(w, dx, dy))| AmplitudeSample::new(ChannelId(i), Weight::new(w), Offset::new(dx, dy)))
        .collect()
}

fn neighborhood() -> impl Strategy<Value = Vec<(f64, f64, f64)>> {
    prop::collection::vec((0.01f64..500.0, -100.0f64..100.0, -100.0f64..100.0), 1..24)
}

proptest! {
    /// Positive weights keep the centroid inside the offsets' bounding box.
    #[test]
    fn centroid_within_hull(raw in neighborhood()) {
        let com = center_of_mass(&samples_from(&raw)).unwrap();
        let tol = 1e-9;

        let min_x = raw.iter().map(|s| s.1).fold(f64::INFINITY, f64::min);
        let max_x = raw.iter().map(|s| s.1).fold(f64::NEG_INFINITY, f64::max);
        let min_y = raw.iter().map(|s| s.2).fold(f64::INFINITY, f64::min);
        let max_y = raw.iter().map(|s| s.2).fold(f64::NEG_INFINITY, f64::max);

        prop_assert!(com.dx >= min_x - tol && com.dx <= max_x + tol);
        prop_assert!(com.dy >= min_y - tol && com.dy <= max_y + tol);
    }

    /// Multiplying all weights by a positive constant changes nothing.
    #[test]
    fn scale_invariant(raw in neighborhood(), k in 0.001f64..1000.0) {
        let base = center_of_mass(&samples_from(&raw)).unwrap();
        let scaled: Vec<_> = raw.iter().map(|&(w, dx, dy)| (w * k, dx, dy)).collect();
        let com = center_of_mass(&samples_from(&scaled)).unwrap();

        prop_assert!((base.dx - com.dx).abs() < 1e-6);
        prop_assert!((base.dy - com.dy).abs() < 1e-6);
    }

    /// Samples sharing one offset resolve to that offset.
    #[test]
    fn shared_offset(
        weights in prop::collection::vec(0.01f64..500.0, 1..16),
        a in -50.0f64..50.0,
        b in -50.0f64..50.0,
    ) {
        let raw: Vec<_> = weights.iter().map(|&w| (w, a, b)).collect();
        let com = center_of_mass(&samples_from(&raw)).unwrap();

        prop_assert!((com.dx - a).abs() < 1e-9);
        prop_assert!((com.dy - b).abs() < 1e-9);
    }

    /// Mirrored pairs of equal weight around the trigger cancel out.
    #[test]
    fn symmetric_neighborhood(
        trigger in 0.0f64..500.0,
        pairs in prop::collection::vec((0.0f64..500.0, -30.0f64..30.0, -30.0f64..30.0), 0..8),
    ) {
        let mut raw = vec![(trigger, 0.0, 0.0)];
        for &(w, dx, dy) in &pairs {
            raw.push((w, dx, dy));
            raw.push((w, -dx, -dy));
        }
        let com = center_of_mass(&samples_from(&raw)).unwrap();

        prop_assert!(com.dx.abs() < 1e-9);
        prop_assert!(com.dy.abs() < 1e-9);
    }
}
