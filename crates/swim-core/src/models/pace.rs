// ABOUTME: Threshold pace model expressed as seconds per 100 pool units
// ABOUTME: Parses either a plain number of seconds or an "m:ss" clock string
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::units::{PACE_REFERENCE_DISTANCE, SECONDS_PER_MINUTE};
use crate::errors::PaceParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Time a swimmer needs for 100 units at threshold effort
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThresholdPace(f64);

impl ThresholdPace {
    /// Build a pace from seconds per 100
    ///
    /// # Errors
    ///
    /// Returns [`PaceParseError::NotPositive`] for non-finite or non-positive input.
    pub fn from_seconds(seconds: f64) -> Result<Self, PaceParseError> {
        if !seconds.is_finite() || seconds <= 0.0 {
            return Err(PaceParseError::NotPositive);
        }
        Ok(Self(seconds))
    }

    /// Seconds per 100 units
    #[must_use]
    pub const fn seconds_per_100(self) -> f64 {
        self.0
    }

    /// Estimated seconds to cover `distance` at this pace
    #[must_use]
    pub fn seconds_for(self, distance: f64) -> f64 {
        distance / PACE_REFERENCE_DISTANCE * self.0
    }
}

impl FromStr for ThresholdPace {
    type Err = PaceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || PaceParseError::InvalidFormat {
            input: trimmed.to_owned(),
        };

        let seconds = match trimmed.split_once(':') {
            Some((minutes, seconds)) => {
                let minutes: u32 = minutes.trim().parse().map_err(|_| invalid())?;
                let seconds: f64 = seconds.trim().parse().map_err(|_| invalid())?;
                if !(0.0..SECONDS_PER_MINUTE).contains(&seconds) {
                    return Err(PaceParseError::SecondsOutOfRange {
                        input: trimmed.to_owned(),
                    });
                }
                f64::from(minutes).mul_add(SECONDS_PER_MINUTE, seconds)
            }
            None => trimmed.parse().map_err(|_| invalid())?,
        };

        Self::from_seconds(seconds)
    }
}
