/// Clamp a caller-provided length or weight into the non-negative domain.
///
/// Negative and NaN inputs collapse to `0.0` so they can never yield a negative scale factor.
pub(crate) fn non_negative(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.max(0.0) }
}

/// `num / den`, or `0.0` when the divisor is not strictly positive.
pub(crate) fn ratio(num: f64, den: f64) -> f64 {
    if den > 0.0 { num / den } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
