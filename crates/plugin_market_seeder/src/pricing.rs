//! Price generation.

use rand::Rng;

/// Effective price bounds after range correction.
///
/// A max that is not strictly above min is corrected to `min + 1` rather
/// than rejected, so a misconfigured range still produces usable prices.
pub fn effective_range(min: f64, max: f64) -> (f64, f64) {
    if max <= min {
        (min, min + 1.0)
    } else {
        (min, max)
    }
}

/// Draws a price uniformly from `[min, max)` and rounds it to two decimal
/// places.
///
/// The half-open bound holds for the raw draw; rounding can land the
/// result exactly on `max` (e.g. a draw of 499.999 rounds to 500.00).
pub fn random_price<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    let (min, max) = effective_range(min, max);
    // At magnitudes where min + 1.0 == min the corrected range collapses
    // to empty, which gen_range refuses; the only price it could hold is
    // min itself.
    if max <= min {
        return (min * 100.0).round() / 100.0;
    }
    let value = rng.gen_range(min..max);
    (value * 100.0).round() / 100.0
}
