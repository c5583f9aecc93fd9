pub const DEFAULT_PRECISION: usize = 3;


fn superscript(character: char) -> char {
    match character {
        '-' => '⁻',
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        other => other,
    }
}


/// Formats `value` as `mantissa × 10ⁿ`, e.g. `1.556 × 10⁻⁸`.
///
/// The mantissa keeps at most `precision` fractional digits, trailing zeros
/// dropped. Zero and non-finite values are shown as `0`.
#[must_use]
pub fn format_scientific(value: f64, precision: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }

    let formatted = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };

    let mantissa = mantissa
        .parse::<f64>()
        .map_or_else(|_| mantissa.to_string(), |value| value.to_string());
    let exponent: String = exponent
        .chars()
        .map(superscript)
        .collect();

    format!("{mantissa} × 10{exponent}")
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn negative_exponent() {
        assert_eq!("1.556 × 10⁻⁸", format_scientific(1.556e-8, 3));
        assert_eq!("6.078 × 10⁻⁷", format_scientific(6.078_027e-7, 3));
    }

    #[test]
    fn zero_exponent() {
        assert_eq!("7.958 × 10⁰", format_scientific(7.957_747, 3));
    }

    #[test]
    fn multi_digit_exponent() {
        assert_eq!("2.5 × 10¹²", format_scientific(2.5e12, 3));
        assert_eq!("4.924 × 10⁻¹⁰", format_scientific(4.923_8e-10, 3));
    }

    #[test]
    fn trailing_zeros_are_dropped() {
        assert_eq!("1.5 × 10⁰", format_scientific(1.5, 3));
        assert_eq!("1 × 10²", format_scientific(100.0, 3));
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!("-2.21 × 10⁻¹", format_scientific(-0.221, 3));
    }

    #[test]
    fn precision_limits_mantissa() {
        assert_eq!("2.2 × 10⁻¹", format_scientific(0.221_048, 1));
    }

    #[test]
    fn zero_and_non_finite_values() {
        assert_eq!("0", format_scientific(0.0, 3));
        assert_eq!("0", format_scientific(f64::NAN, 3));
        assert_eq!("0", format_scientific(f64::NEG_INFINITY, 3));
    }
}
