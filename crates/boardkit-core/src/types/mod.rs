//! Identifier aliases and small numeric helpers.

/// Identifier of an item placed on the board.
pub type ItemId = u64;

/// Identifier of a touch point or pointer, as reported by the host.
pub type TouchId = u64;

/// Returns `value` when it is finite, otherwise `fallback`.
#[inline]
pub fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Coerces a non-finite value (NaN or infinity) to `0.0`.
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    finite_or(value, 0.0)
}
