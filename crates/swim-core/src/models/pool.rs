// ABOUTME: Pool length and distance unit models with explicit string parsing
// ABOUTME: Turns inputs like "25m" or "25 yd" into a tagged PoolLength or a typed parse error
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::units::METERS_PER_YARD;
use crate::errors::PoolLengthParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit a pool (and a workout distance) is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolUnit {
    /// Metric pool (25m, 50m)
    Meters,
    /// Short-course yards pool (25yd)
    Yards,
}

/// Unit of a requested workout distance
pub type DistanceUnit = PoolUnit;

impl PoolUnit {
    /// Short suffix used in rendered text
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Yards => "yd",
        }
    }

    /// Length of one unit in meters
    #[must_use]
    pub const fn meters_per_unit(self) -> f64 {
        match self {
            Self::Meters => 1.0,
            Self::Yards => METERS_PER_YARD,
        }
    }

    /// Convert `value` expressed in `self` into `target`
    #[must_use]
    pub fn convert(self, value: f64, target: Self) -> f64 {
        if self == target {
            return value;
        }
        value * self.meters_per_unit() / target.meters_per_unit()
    }
}

impl fmt::Display for PoolUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for PoolUnit {
    type Err = PoolLengthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Self::Meters),
            "y" | "yd" | "yds" | "yard" | "yards" => Ok(Self::Yards),
            other => Err(PoolLengthParseError::UnknownUnit {
                unit: other.to_owned(),
            }),
        }
    }
}

/// A pool length tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolLength {
    /// Length of one lap of the pool
    pub value: f64,
    /// Unit of `value`
    pub unit: PoolUnit,
}

impl PoolLength {
    /// Build a pool length, rejecting non-finite or non-positive values
    ///
    /// # Errors
    ///
    /// Returns [`PoolLengthParseError::NotPositive`] when `value` is not a
    /// finite positive number.
    pub fn new(value: f64, unit: PoolUnit) -> Result<Self, PoolLengthParseError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(PoolLengthParseError::NotPositive);
        }
        Ok(Self { value, unit })
    }

    /// Two lengths of the pool, so a swim ends at the wall it started from
    #[must_use]
    pub fn round_trip(&self) -> f64 {
        self.value * 2.0
    }
}

impl fmt::Display for PoolLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (self.value - self.value.round()).abs() < f64::EPSILON {
            write!(f, "{}{}", self.value.round(), self.unit)
        } else {
            write!(f, "{:.1}{}", self.value, self.unit)
        }
    }
}

impl FromStr for PoolLength {
    type Err = PoolLengthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PoolLengthParseError::Empty);
        }

        let split_at = trimmed
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(trimmed.len());
        let (number, suffix) = trimmed.split_at(split_at);

        let value: f64 = number
            .parse()
            .map_err(|_| PoolLengthParseError::InvalidNumber {
                input: trimmed.to_owned(),
            })?;

        let suffix = suffix.trim();
        if suffix.is_empty() {
            return Err(PoolLengthParseError::MissingUnit {
                input: trimmed.to_owned(),
            });
        }

        Self::new(value, suffix.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_common_pools() {
        assert_eq!(
            "25m".parse::<PoolLength>().unwrap(),
            PoolLength {
                value: 25.0,
                unit: PoolUnit::Meters
            }
        );
        assert_eq!(
            "25yd".parse::<PoolLength>().unwrap(),
            PoolLength {
                value: 25.0,
                unit: PoolUnit::Yards
            }
        );
        assert_eq!("50 M".parse::<PoolLength>().unwrap().value, 50.0);
        assert_eq!(
            " 33.33 metres ".parse::<PoolLength>().unwrap().unit,
            PoolUnit::Meters
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("".parse::<PoolLength>(), Err(PoolLengthParseError::Empty));
        assert!(matches!(
            "25".parse::<PoolLength>(),
            Err(PoolLengthParseError::MissingUnit { .. })
        ));
        assert!(matches!(
            "yd".parse::<PoolLength>(),
            Err(PoolLengthParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            "-25m".parse::<PoolLength>(),
            Err(PoolLengthParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            "25furlongs".parse::<PoolLength>(),
            Err(PoolLengthParseError::UnknownUnit { .. })
        ));
        assert_eq!(
            "0m".parse::<PoolLength>(),
            Err(PoolLengthParseError::NotPositive)
        );
    }

    #[test]
    fn test_unit_conversion() {
        let yards = PoolUnit::Meters.convert(2000.0, PoolUnit::Yards);
        assert!((yards - 2187.226_596_675_415_6).abs() < 1e-6);
        assert!((PoolUnit::Yards.convert(100.0, PoolUnit::Meters) - 91.44).abs() < 1e-9);
        assert!((PoolUnit::Yards.convert(500.0, PoolUnit::Yards) - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display() {
        assert_eq!("25yd".parse::<PoolLength>().unwrap().to_string(), "25yd");
        assert_eq!("33.3m".parse::<PoolLength>().unwrap().to_string(), "33.3m");
    }
}
