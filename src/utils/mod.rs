mod constants;

pub use constants::*;

/// Substitutes `fallback` for a field the caller left unset (zero or not finite).
///
/// The presentation layer maps empty or unparseable inputs to `0.0`, so zero is
/// the "unset" marker for fields where a literal zero has no physical meaning.
#[inline]
pub fn or_default(value: f64, fallback: f64) -> f64 {
    if value == 0.0 || !value.is_finite() { fallback } else { value }
}

/// Like [`or_default`], but an unset limit means "no limit".
#[inline]
pub fn limit_or_unbounded(value: f64) -> f64 {
    if value > 0.0 { value } else { f64::INFINITY }
}

/// `capacity_ah · 0.8 / current · 60`, or 0 when no current flows.
#[inline]
pub fn endurance_minutes(capacity_ah: f64, current: f64) -> f64 {
    if current > 0.0 {
        capacity_ah * USABLE_CAPACITY_FRACTION / current * 60.0
    } else {
        0.0
    }
}
