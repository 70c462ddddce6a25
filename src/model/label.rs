use std::fmt;

use crate::error::PerceptronError;

/// A binary class label, numerically -1 or +1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Negative,
    Positive,
}

impl Label {
    /// Inference decision rule: an activation of exactly zero is `Positive`.
    pub fn from_activation(activation: f64) -> Label {
        if activation >= 0.0 {
            Label::Positive
        } else {
            Label::Negative
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Label::Negative => -1.0,
            Label::Positive => 1.0,
        }
    }
}

impl TryFrom<f64> for Label {
    type Error = PerceptronError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == 1.0 {
            Ok(Label::Positive)
        } else if value == -1.0 {
            Ok(Label::Negative)
        } else {
            Err(PerceptronError::InvalidInput(format!(
                "label {value} is not -1 or 1"
            )))
        }
    }
}

impl From<Label> for f64 {
    fn from(label: Label) -> f64 {
        label.as_f64()
    }
}

impl PartialEq<f64> for Label {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == *other
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Negative => write!(f, "-1"),
            Label::Positive => write!(f, "1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_unit_values() {
        assert_eq!(Label::try_from(1.0), Ok(Label::Positive));
        assert_eq!(Label::try_from(-1.0), Ok(Label::Negative));
        for bad in [0.0, 2.0, -0.5, f64::NAN, f64::INFINITY] {
            assert!(Label::try_from(bad).is_err());
        }
    }

    #[test]
    fn zero_activation_is_positive() {
        assert_eq!(Label::from_activation(0.0), Label::Positive);
        assert_eq!(Label::from_activation(-0.0), Label::Positive);
        assert_eq!(Label::from_activation(-1e-12), Label::Negative);
    }

    #[test]
    fn numeric_view() {
        assert_eq!(f64::from(Label::Negative), -1.0);
        assert!(Label::Positive == 1.0);
        assert!(Label::Positive != -1.0);
        assert_eq!(Label::Negative.to_string(), "-1");
    }
}
