use std::cmp::Ordering;

use chrono::Duration;
use derive_more::{Display, Into};

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 999.9")]
    OutOfRange,
    #[error("Weight must be a decimal")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Seconds(u32);

impl Seconds {
    pub fn new(value: u32) -> Result<Self, SecondsError> {
        if !(0..86400).contains(&value) {
            return Err(SecondsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Seconds {
    type Error = SecondsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Seconds::new(parsed_value),
            Err(_) => Err(SecondsError::ParseError),
        }
    }
}

impl From<Seconds> for Duration {
    fn from(value: Seconds) -> Self {
        Duration::seconds(i64::from(value.0))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SecondsError {
    #[error("Seconds must be in the range 0 to 86399")]
    OutOfRange,
    #[error("Seconds must be an integer")]
    ParseError,
}

/// Certainty of a match or parse, in the range 0.0 to 1.0.
#[derive(Debug, Default, Display, Clone, Copy, Into)]
pub struct Confidence(f32);

impl Confidence {
    pub const CERTAIN: Confidence = Confidence(1.0);

    pub fn new(value: f32) -> Result<Self, ConfidenceError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfidenceError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// Constructs a confidence from a computed score, clamping into range.
    #[must_use]
    pub const fn clamped(value: f32) -> Self {
        if value.is_nan() || value < 0.0 {
            Self(0.0)
        } else if value > 1.0 {
            Self(1.0)
        } else {
            Self(value)
        }
    }
}

impl PartialEq for Confidence {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Confidence {}

impl PartialOrd for Confidence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Confidence {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfidenceError {
    #[error("Confidence must be in the range 0.0 to 1.0")]
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, Ok(Reps(0)))]
    #[case(12, Ok(Reps(12)))]
    #[case(999, Ok(Reps(999)))]
    #[case(1000, Err(RepsError::OutOfRange))]
    fn test_reps_new(#[case] value: u32, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::new(value), expected);
    }

    #[rstest]
    #[case("12", Ok(Reps(12)))]
    #[case("1000", Err(RepsError::OutOfRange))]
    #[case("12.5", Err(RepsError::ParseError))]
    #[case("twelve", Err(RepsError::ParseError))]
    fn test_reps_try_from(#[case] value: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::try_from(value), expected);
    }

    #[rstest]
    #[case(0.0, Ok(Weight(0.0)))]
    #[case(185.0, Ok(Weight(185.0)))]
    #[case(62.5, Ok(Weight(62.5)))]
    #[case(1000.0, Err(WeightError::OutOfRange))]
    #[case(-10.0, Err(WeightError::OutOfRange))]
    fn test_weight_new(#[case] value: f32, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::new(value), expected);
    }

    #[rstest]
    #[case("185", Ok(Weight(185.0)))]
    #[case("62.5", Ok(Weight(62.5)))]
    #[case("heavy", Err(WeightError::ParseError))]
    fn test_weight_try_from(#[case] value: &str, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::try_from(value), expected);
    }

    #[rstest]
    #[case(0, Ok(Seconds(0)))]
    #[case(1800, Ok(Seconds(1800)))]
    #[case(86400, Err(SecondsError::OutOfRange))]
    fn test_seconds_new(#[case] value: u32, #[case] expected: Result<Seconds, SecondsError>) {
        assert_eq!(Seconds::new(value), expected);
    }

    #[test]
    fn test_seconds_into_duration() {
        assert_eq!(
            Duration::from(Seconds::new(90).unwrap()),
            Duration::seconds(90)
        );
    }

    #[rstest]
    #[case(0.0, true)]
    #[case(0.85, true)]
    #[case(1.0, true)]
    #[case(1.1, false)]
    #[case(-0.1, false)]
    fn test_confidence_new(#[case] value: f32, #[case] valid: bool) {
        assert_eq!(Confidence::new(value).is_ok(), valid);
    }

    #[rstest]
    #[case(0.85, 0.85)]
    #[case(1.5, 1.0)]
    #[case(-0.5, 0.0)]
    #[case(f32::NAN, 0.0)]
    fn test_confidence_clamped(#[case] value: f32, #[case] expected: f32) {
        assert_approx_eq!(f32::from(Confidence::clamped(value)), expected);
    }

    #[test]
    fn test_confidence_ordering() {
        assert!(Confidence::clamped(0.9) > Confidence::clamped(0.7));
        assert!(Confidence::clamped(0.7) < Confidence::CERTAIN);
        assert_eq!(Confidence::clamped(0.7), Confidence::clamped(0.7));
    }
}
