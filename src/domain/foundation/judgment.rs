//! Judgment value object: one cell of a pairwise comparison matrix.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Which literal strings a grid cell accepts as input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Empty, `"0"`, or a single digit `1`-`9`.
    #[default]
    SingleDigit,
    /// Empty, `"0"`, or any finite positive decimal.
    PositiveReal,
}

/// How strongly the row entity is preferred over the column entity.
///
/// Either not yet entered, or a strictly positive finite real. Zero is never
/// stored: it collapses to `Unset` because its reciprocal is undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Option<f64>", into = "Option<f64>")]
pub enum Judgment {
    #[default]
    Unset,
    Value(f64),
}

impl Judgment {
    /// Equal importance. Also the fixed diagonal value.
    pub const EQUAL: Self = Judgment::Value(1.0);

    /// Creates a judgment from a number.
    ///
    /// `0.0` yields `Unset`; negative, NaN and infinite values are rejected,
    /// as are values so close to zero that their reciprocal overflows.
    pub fn try_from_f64(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value < 0.0 || (value > 0.0 && !(1.0 / value).is_finite()) {
            return Err(ValidationError::out_of_range(
                "judgment",
                0.0,
                f64::MAX,
                value,
            ));
        }
        if value == 0.0 {
            return Ok(Judgment::Unset);
        }
        Ok(Judgment::Value(value))
    }

    /// Parses the literal a user typed into a grid cell.
    ///
    /// `""` and `"0"` both mean "clear this comparison".
    pub fn parse_input(input: &str, policy: InputPolicy) -> Result<Self, ValidationError> {
        if input.is_empty() || input == "0" {
            return Ok(Judgment::Unset);
        }

        match policy {
            InputPolicy::SingleDigit => {
                let mut chars = input.chars();
                match (chars.next(), chars.next()) {
                    (Some(c @ '1'..='9'), None) => Ok(Judgment::Value(f64::from(c as u8 - b'0'))),
                    _ => Err(ValidationError::invalid_format(
                        "judgment",
                        format!("expected a digit from 1 to 9, got '{}'", input),
                    )),
                }
            }
            InputPolicy::PositiveReal => {
                let value: f64 = input.parse().map_err(|_| {
                    ValidationError::invalid_format(
                        "judgment",
                        format!("expected a positive number, got '{}'", input),
                    )
                })?;
                Self::try_from_f64(value)
            }
        }
    }

    /// Returns the numeric value, if set.
    pub fn value(&self) -> Option<f64> {
        match self {
            Judgment::Unset => None,
            Judgment::Value(v) => Some(*v),
        }
    }

    /// Returns the numeric value, treating unset as zero.
    pub fn value_or_zero(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }

    /// Returns true if a value has been entered.
    pub fn is_set(&self) -> bool {
        matches!(self, Judgment::Value(_))
    }

    /// The judgment for the mirrored cell: `1 / v`, or unset.
    pub fn reciprocal(&self) -> Self {
        match self {
            Judgment::Unset => Judgment::Unset,
            Judgment::Value(v) => Judgment::Value(1.0 / v),
        }
    }
}

impl TryFrom<Option<f64>> for Judgment {
    type Error = ValidationError;

    fn try_from(value: Option<f64>) -> Result<Self, Self::Error> {
        match value {
            None => Ok(Judgment::Unset),
            Some(v) => Judgment::try_from_f64(v),
        }
    }
}

impl From<Judgment> for Option<f64> {
    fn from(judgment: Judgment) -> Self {
        judgment.value()
    }
}

/// Grid rendering: whole numbers as integers, fractions to three decimals.
impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Judgment::Unset => Ok(()),
            Judgment::Value(v) if v.fract() == 0.0 => write!(f, "{:.0}", v),
            Judgment::Value(v) => {
                let rounded = format!("{:.3}", v);
                let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
                write!(f, "{}", trimmed)
            }
        }
    }
}
