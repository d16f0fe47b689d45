/// Converts free-form numeric text into a float.
///
/// Blank text yields `0.0`; anything that does not parse yields `NaN`, which
/// downstream checks treat as a missing value.
pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Coerces an optional calibration offset, falling back to zero.
pub fn coerce_offset(text: Option<&str>) -> f64 {
    text.map(coerce_number).map(or_zero).unwrap_or(0.0)
}

/// Replaces `NaN` with zero.
pub fn or_zero(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Zero and `NaN` count as absent values.
pub fn truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_zero_and_garbage_is_nan() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("  "), 0.0);
        assert_eq!(coerce_number(" 2.5 "), 2.5);
        assert!(coerce_number("2,5").is_nan());
    }

    #[test]
    fn offsets_fall_back_to_zero() {
        assert_eq!(coerce_offset(None), 0.0);
        assert_eq!(coerce_offset(Some(".")), 0.0);
        assert_eq!(coerce_offset(Some("1.25")), 1.25);
    }

    #[test]
    fn zero_and_nan_are_falsy() {
        assert!(!truthy(0.0));
        assert!(!truthy(-0.0));
        assert!(!truthy(f64::NAN));
        assert!(truthy(-3.0));
    }
}
