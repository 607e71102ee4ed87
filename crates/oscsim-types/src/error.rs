//! Parameter validation errors.

use thiserror::Error;

/// Constraint a physical parameter failed to satisfy
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    #[error("must be a finite number")]
    Finite,

    #[error("must be strictly positive")]
    Positive,

    #[error("must not be negative")]
    NonNegative,

    #[error("derived angular frequency is zero or not finite")]
    AngularFrequency,
}

/// A parameter set that cannot drive a simulation.
///
/// `name` is the configuration key of the offending field (`mass`,
/// `springConstant`, `length`, ...).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("invalid parameter `{name}` = {value}: {constraint}")]
pub struct InvalidParameterError {
    pub name: &'static str,
    pub value: f64,
    pub constraint: Constraint,
}

impl InvalidParameterError {
    pub fn new(name: &'static str, value: f64, constraint: Constraint) -> Self {
        Self {
            name,
            value,
            constraint,
        }
    }
}

pub(crate) fn finite(name: &'static str, value: f64) -> Result<(), InvalidParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidParameterError::new(name, value, Constraint::Finite))
    }
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<(), InvalidParameterError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(InvalidParameterError::new(name, value, Constraint::Positive))
    }
}

pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<(), InvalidParameterError> {
    finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(InvalidParameterError::new(name, value, Constraint::NonNegative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_rejects_zero_and_nan() {
        assert_eq!(
            positive("mass", 0.0).unwrap_err().constraint,
            Constraint::Positive
        );
        assert_eq!(
            positive("mass", f64::NAN).unwrap_err().constraint,
            Constraint::Finite
        );
        assert!(positive("mass", 1e-9).is_ok());
    }

    #[test]
    fn test_non_negative_accepts_zero() {
        assert!(non_negative("damping", 0.0).is_ok());
        assert_eq!(
            non_negative("damping", -0.1).unwrap_err().constraint,
            Constraint::NonNegative
        );
        assert_eq!(
            non_negative("damping", f64::INFINITY).unwrap_err().constraint,
            Constraint::Finite
        );
    }

    #[test]
    fn test_error_message() {
        let err = InvalidParameterError::new("length", 0.0, Constraint::Positive);
        assert_eq!(
            err.to_string(),
            "invalid parameter `length` = 0: must be strictly positive"
        );
    }
}
