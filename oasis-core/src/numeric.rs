//! Rounding helpers shared by the scoring components.

/// Round `value` to one decimal place, halves away from zero.
///
/// # Examples
/// ```
/// use oasis_core::round_to_tenth;
///
/// assert_eq!(round_to_tenth(20.74), 20.7);
/// assert_eq!(round_to_tenth(-4.25), -4.3);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "rounding to a fixed decimal precision needs float scaling"
)]
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0_f64).round() / 10.0_f64
}
