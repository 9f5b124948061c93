// ABOUTME: Workout request and plan models shared by the planner and the HTTP layer
// ABOUTME: Defines WorkoutRequest validation, SectionKind ordering, SwimSet, Section, and WorkoutPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{DistanceUnit, PoolLength, ThresholdPace};
use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated request to build one workout
///
/// Only constructible through [`WorkoutRequest::new`], so every instance
/// satisfies the distance and pool invariants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRequest {
    distance: f64,
    distance_unit: DistanceUnit,
    pool: PoolLength,
    threshold_pace: Option<ThresholdPace>,
    seed: Option<u64>,
}

impl WorkoutRequest {
    /// Validate and build a request
    ///
    /// `distance_unit` defaults to the pool's unit when `None`.
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` when the distance is not positive, is
    /// shorter than one round trip of the pool, or exceeds the workout cap; when
    /// the pool length or pace fall outside their accepted ranges.
    pub fn new(
        distance: f64,
        distance_unit: Option<DistanceUnit>,
        pool: PoolLength,
        threshold_pace: Option<ThresholdPace>,
        seed: Option<u64>,
    ) -> AppResult<Self> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(AppError::out_of_range(
                "distance must be a positive finite number",
            ));
        }

        if !(limits::MIN_POOL_LENGTH..=limits::MAX_POOL_LENGTH).contains(&pool.value) {
            return Err(AppError::out_of_range(format!(
                "poolLength must be between {} and {} {}",
                limits::MIN_POOL_LENGTH,
                limits::MAX_POOL_LENGTH,
                pool.unit
            )));
        }

        if let Some(pace) = threshold_pace {
            let seconds = pace.seconds_per_100();
            if !(limits::MIN_PACE_SECONDS..=limits::MAX_PACE_SECONDS).contains(&seconds) {
                return Err(AppError::out_of_range(format!(
                    "thresholdPace must be between {} and {} seconds per 100",
                    limits::MIN_PACE_SECONDS,
                    limits::MAX_PACE_SECONDS
                )));
            }
        }

        let distance_unit = distance_unit.unwrap_or(pool.unit);
        let in_pool_units = distance_unit.convert(distance, pool.unit);

        if in_pool_units > limits::MAX_WORKOUT_DISTANCE {
            return Err(AppError::out_of_range(format!(
                "distance must not exceed {} {}",
                limits::MAX_WORKOUT_DISTANCE,
                pool.unit
            )));
        }

        if in_pool_units < pool.round_trip() {
            return Err(AppError::out_of_range(format!(
                "distance must cover at least one round trip of the pool ({}{})",
                pool.round_trip(),
                pool.unit
            )));
        }

        Ok(Self {
            distance,
            distance_unit,
            pool,
            threshold_pace,
            seed,
        })
    }

    /// Requested distance, in [`Self::distance_unit`]
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Unit of the requested distance
    #[must_use]
    pub const fn distance_unit(&self) -> DistanceUnit {
        self.distance_unit
    }

    /// Pool the workout is swum in
    #[must_use]
    pub const fn pool(&self) -> PoolLength {
        self.pool
    }

    /// Optional threshold pace for time estimates
    #[must_use]
    pub const fn threshold_pace(&self) -> Option<ThresholdPace> {
        self.threshold_pace
    }

    /// Optional variety seed
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Named part of a workout, declared in rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum SectionKind {
    /// Warm-up
    Warm,
    /// Drill work
    Drill,
    /// Kick set
    Kick,
    /// Pull set
    Pull,
    /// Build into the main set
    PreMain,
    /// Main set
    Main,
    /// Cool-down
    Cool,
}

impl SectionKind {
    /// Uppercase header used in rendered text
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Warm => "WARM",
            Self::Drill => "DRILL",
            Self::Kick => "KICK",
            Self::Pull => "PULL",
            Self::PreMain => "PRE-MAIN",
            Self::Main => "MAIN",
            Self::Cool => "COOL",
        }
    }

    /// All kinds, in rendering order
    pub const ALL: [Self; 7] = [
        Self::Warm,
        Self::Drill,
        Self::Kick,
        Self::Pull,
        Self::PreMain,
        Self::Main,
        Self::Cool,
    ];
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// `repetitions x distance_per_rep` with a short coaching cue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwimSet {
    /// Number of repeats, always at least one
    pub repetitions: u32,
    /// Distance of each repeat, a whole multiple of the pool length
    pub distance_per_rep: f64,
    /// Coaching cue, e.g. "easy swim, mixed strokes"
    pub description: String,
    /// Estimated seconds per repeat at threshold pace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_seconds_per_rep: Option<f64>,
}

impl SwimSet {
    /// Total distance covered by the set
    #[must_use]
    pub fn total_distance(&self) -> f64 {
        f64::from(self.repetitions) * self.distance_per_rep
    }

    /// Estimated seconds for the whole set
    #[must_use]
    pub fn estimated_total_seconds(&self) -> Option<f64> {
        self.estimated_seconds_per_rep
            .map(|per_rep| per_rep * f64::from(self.repetitions))
    }
}

/// One named block of sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Which part of the workout this is
    pub kind: SectionKind,
    /// Ordered sets
    pub sets: Vec<SwimSet>,
}

impl Section {
    /// Total distance of every set in the section
    #[must_use]
    pub fn total_distance(&self) -> f64 {
        self.sets.iter().map(SwimSet::total_distance).sum()
    }

    /// Sum of set estimates, `None` when unpaced
    #[must_use]
    pub fn estimated_seconds(&self) -> Option<f64> {
        self.sets.iter().map(SwimSet::estimated_total_seconds).sum()
    }
}

/// A complete workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// Distance the caller asked for, in `distance_unit`
    pub requested_distance: f64,
    /// Unit of `requested_distance`
    pub distance_unit: DistanceUnit,
    /// Pool the plan is built for; all set distances are in its unit
    pub pool: PoolLength,
    /// Sections in rendering order
    pub sections: Vec<Section>,
}

impl WorkoutPlan {
    /// Total planned distance, in pool units
    #[must_use]
    pub fn total_distance(&self) -> f64 {
        self.sections.iter().map(Section::total_distance).sum()
    }

    /// Total estimated seconds, `None` when unpaced
    #[must_use]
    pub fn estimated_seconds(&self) -> Option<f64> {
        self.sections.iter().map(Section::estimated_seconds).sum()
    }

    /// Look up a section by kind
    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    /// Iterate every set in rendering order
    pub fn sets(&self) -> impl Iterator<Item = &SwimSet> {
        self.sections.iter().flat_map(|section| section.sets.iter())
    }
}
