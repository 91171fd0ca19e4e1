//! Amplitude-weighted center of mass.

use crate::error::{LocalizeError, Result};
use crate::types::{AmplitudeSample, Offset, Vector2};

/// Reduce a neighborhood to its weighted mean offset.
///
/// Computes `(Σ wᵢ·dxᵢ / Σ wᵢ, Σ wᵢ·dyᵢ / Σ wᵢ)`. When the total weight is
/// zero the result is [`Offset::ZERO`], i.e. the triggering channel itself.
///
/// # Errors
///
/// Returns `InvalidInput` if `samples` is empty (the sampler never produces
/// an empty neighborhood, so this signals a broken caller), or if the weight
/// sums overflow to a non-finite value.
pub fn center_of_mass(samples: &[AmplitudeSample]) -> Result<Offset> {
    if samples.is_empty() {
        return Err(LocalizeError::InvalidInput(
            "center of mass of an empty neighborhood".to_string(),
        ));
    }

    let (moment, total) = samples.iter().fold(
        (Vector2::zeros(), 0.0_f64),
        |(moment, total), sample| {
            let w = sample.weight.get();
            (moment + sample.offset.to_vector() * w, total + w)
        },
    );

    if !total.is_finite() || moment.iter().any(|m| !m.is_finite()) {
        return Err(LocalizeError::InvalidInput(format!(
            "weighted sums are not finite (total weight {total})"
        )));
    }

    if total <= 0.0 {
        return Ok(Offset::ZERO);
    }

    Ok(Offset::from_vector(moment / total))
}
