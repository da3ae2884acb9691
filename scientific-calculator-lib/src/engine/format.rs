/// Formats an evaluation result for display.
///
/// `NaN` renders as `"Error"` and the infinities as `"∞"`/`"-∞"`. Very
/// large magnitudes (above `1e15`) and very small non-zero magnitudes
/// (below `1e-10`) use exponential notation with eight fraction digits;
/// everything else uses the shortest decimal string that round-trips,
/// re-rounded to twelve significant digits when that string would exceed
/// sixteen characters.
///
/// # Examples
///
/// ```
/// use scientific_calculator::engine::format::format_number;
///
/// assert_eq!(format_number(4.0), "4");
/// assert_eq!(format_number(f64::NAN), "Error");
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "Error".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    if value.abs() > 1e15 || (value.abs() < 1e-10 && value != 0.0) {
        return format_exponential(value, 8);
    }
    let plain = value.to_string();
    if plain.len() > 16 {
        return round_to_significant_digits(value, 12).to_string();
    }
    plain
}

/// Exponential notation with an explicit sign on non-negative exponents,
/// e.g. `1.00000000e+16`.
fn format_exponential(value: f64, fraction_digits: usize) -> String {
    let formatted = format!("{:.*e}", fraction_digits, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

fn round_to_significant_digits(value: f64, digits: usize) -> f64 {
    format!("{:.*e}", digits - 1, value)
        .parse()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn nan_formats_as_error() {
        assert_eq!(format_number(f64::NAN), "Error");
    }

    #[test]
    fn infinities_format_as_glyphs() {
        assert_eq!(format_number(f64::INFINITY), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY), "-∞");
    }

    #[parameterized(
    value = { 4.0, -42.5, 0.0, 1.5, 100000.0 },
    expected = { "4", "-42.5", "0", "1.5", "100000" }
    )]
    fn plain_values_format_without_a_trailing_fraction(value: f64, expected: &str) {
        assert_eq!(format_number(value), expected);
    }

    #[test]
    fn large_magnitudes_use_exponential_notation() {
        assert_eq!(format_number(1e16), "1.00000000e+16");
        assert_eq!(format_number(-2.5e17), "-2.50000000e+17");
    }

    #[test]
    fn tiny_magnitudes_use_exponential_notation() {
        assert_eq!(format_number(1e-11), "1.00000000e-11");
    }

    #[test]
    fn threshold_magnitude_still_formats_as_a_plain_decimal() {
        // The exponential branch only triggers strictly above 1e15.
        assert_eq!(format_number(1e15), "1000000000000000");
    }

    #[test]
    fn zero_never_formats_exponentially() {
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn long_fractions_are_rounded_to_twelve_significant_digits() {
        // 0.1 + 0.2 displays as 0.3, not 0.30000000000000004
        assert_eq!(format_number(0.1 + 0.2), "0.3");
    }

    #[test]
    fn twelve_significant_digits_survive_rounding() {
        assert_eq!(format_number(1.234567890123456), "1.23456789012");
    }
}
