use thiserror::Error;

use crate::backend::mathphysics::Meter;


#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("`{0}` is not a finite number")]
    NotFinite(String),
    #[error("Argument `{0}` is missing")]
    MissingArgument(&'static str),
}


/// Parses a real number and rejects NaN and infinities, which the signal
/// model does not accept.
///
/// # Errors
///
/// Will return `Err` if `text` is not a number or is not finite.
pub fn parse_finite(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    let value   = trimmed
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(InputError::NotFinite(trimmed.to_string()));
    }

    Ok(value)
}

/// # Errors
///
/// Will return `Err` if `text` is not a finite distance in meters.
pub fn parse_distance(text: &str) -> Result<Meter, InputError> {
    parse_finite(text.trim().trim_end_matches('m'))
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn finite_numbers_are_accepted() {
        assert_eq!(Ok(6.0), parse_finite("6"));
        assert_eq!(Ok(-2.5), parse_finite(" -2.5 "));
        assert_eq!(Ok(1.0e-3), parse_finite("1e-3"));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        for text in ["NaN", "inf", "-infinity"] {
            assert!(matches!(parse_finite(text), Err(InputError::NotFinite(_))));
        }
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(
            Err(InputError::NotANumber("six".to_string())),
            parse_finite("six")
        );
        assert!(matches!(parse_finite(""), Err(InputError::NotANumber(_))));
    }

    #[test]
    fn distance_may_carry_meter_suffix() {
        assert_eq!(Ok(12.0), parse_distance("12m"));
        assert_eq!(Ok(12.0), parse_distance("12 m"));
        assert_eq!(Ok(0.0), parse_distance("0"));
    }
}
