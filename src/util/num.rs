/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: f64 = 9_007_199_254_740_991.0;

/// Returns whether a value is finite with no fractional part.
///
/// Infinities and NaN are not integral; they keep their native rendering.
///
/// # Example
/// ```
/// use summa::util::num::is_integral;
///
/// assert!(is_integral(5.0));
/// assert!(!is_integral(5.3));
/// assert!(!is_integral(f64::NAN));
/// ```
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Formats a computed aggregate for display.
///
/// A whole value renders without a decimal point; anything else renders with
/// the full native decimal representation of the `f64`, never rounded to a
/// fixed number of digits.
///
/// # Parameters
/// - `value`: The reduced aggregate.
///
/// # Returns
/// The display string.
///
/// # Example
/// ```
/// use summa::util::num::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(2.2), "2.2");
/// assert_eq!(format_number(f64::INFINITY), "inf");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_number(value: f64) -> String {
    if is_integral(value) && value.abs() <= MAX_SAFE_INT {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Truncates a value toward zero.
///
/// Saturates at the `i64` range; NaN truncates to zero.
///
/// # Example
/// ```
/// use summa::util::num::truncate;
///
/// assert_eq!(truncate(-4.7), -4);
/// assert_eq!(truncate(4.7), 4);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn truncate(value: f64) -> i64 {
    value as i64
}
