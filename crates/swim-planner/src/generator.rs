// ABOUTME: Workout generator that turns a validated request into a sectioned, pool-snapped plan
// ABOUTME: Converts units, allocates round trips per section, builds capped sets, and attaches pace estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Workout Generator
//!
//! Pipeline for one request:
//!
//! 1. Resolve the working total in pool units. A distance given in the other
//!    unit is converted and rounded to the nearest 100 before allocation, so a
//!    2000m target in a yards pool is planned as 2200yd.
//! 2. Snap the total to whole round trips (two lengths).
//! 3. Split round trips across sections with [`allocate`].
//! 4. Shape each section into sets with [`build_sets`], honouring
//!    [`GeneratorPolicy::max_reps_per_set`].
//! 5. Attach threshold-pace estimates when a pace was given.
//!
//! Once a [`WorkoutRequest`] exists nothing here can fail.

use crate::allocation::{allocate, SectionBudget};
use crate::catalog::{self, Variety};
use crate::render::render_text;
use crate::sets::{build_sets, laps_for, SetShape};
use crate::snap::{is_pool_multiple, snap_to_pool_multiple};
use crate::timing::apply_pace;
use serde::{Deserialize, Serialize};
use swim_core::constants::{defaults, limits};
use swim_core::errors::{AppError, AppResult};
use swim_core::models::{Section, SectionKind, SwimSet, WorkoutPlan, WorkoutRequest};
use tracing::debug;

/// Warm-ups at or below this many round trips are a single continuous swim
const WARM_SINGLE_SWIM_MAX_LAPS: u32 = 4;
/// Main-set rep distance thresholds: (main volume below, nominal rep distance)
const MAIN_REP_LADDER: [(f64, f64); 3] = [(600.0, 50.0), (1200.0, 100.0), (2400.0, 200.0)];
/// Nominal rep distance once the main set is longer than the ladder covers
const MAIN_REP_LONGEST: f64 = 400.0;

/// Tunable generation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorPolicy {
    /// Most repetitions allowed in one set; extra reps become another set
    pub max_reps_per_set: u32,
}

impl Default for GeneratorPolicy {
    fn default() -> Self {
        Self {
            max_reps_per_set: defaults::MAX_REPS_PER_SET,
        }
    }
}

impl GeneratorPolicy {
    /// Build a policy, validating the rep cap
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `max_reps_per_set` is zero or above
    /// the allowed ceiling.
    pub fn new(max_reps_per_set: u32) -> AppResult<Self> {
        if !(1..=limits::MAX_REPS_PER_SET_CEILING).contains(&max_reps_per_set) {
            return Err(AppError::config(format!(
                "max reps per set must be between 1 and {}, got {max_reps_per_set}",
                limits::MAX_REPS_PER_SET_CEILING
            )));
        }
        Ok(Self { max_reps_per_set })
    }
}

/// Stateless workout generator
#[derive(Debug, Clone, Default)]
pub struct WorkoutGenerator {
    policy: GeneratorPolicy,
}

impl WorkoutGenerator {
    /// Create a generator with the given policy
    #[must_use]
    pub const fn new(policy: GeneratorPolicy) -> Self {
        Self { policy }
    }

    /// Active policy
    #[must_use]
    pub const fn policy(&self) -> GeneratorPolicy {
        self.policy
    }

    /// Build a plan for a validated request
    #[must_use]
    pub fn generate(&self, request: &WorkoutRequest) -> WorkoutPlan {
        let pool = request.pool();
        let lap = pool.round_trip();
        let working_total = working_distance(request);
        let total_laps = (snap_to_pool_multiple(working_total, lap) / lap).round() as u32;

        let mut variety = Variety::new(request.seed());
        let sections: Vec<Section> = allocate(total_laps.max(1), lap)
            .into_iter()
            .map(|budget| self.build_section(budget, lap, &mut variety))
            .filter(|section| !section.sets.is_empty())
            .collect();

        let mut plan = WorkoutPlan {
            requested_distance: request.distance(),
            distance_unit: request.distance_unit(),
            pool,
            sections,
        };
        apply_pace(&mut plan, request.threshold_pace());

        debug_assert!(plan
            .sets()
            .all(|set| is_pool_multiple(set.distance_per_rep, pool.value)));
        debug!(
            requested = request.distance(),
            working_total,
            planned = plan.total_distance(),
            sections = plan.sections.len(),
            seeded = variety.is_seeded(),
            "generated workout plan"
        );

        plan
    }

    /// Build a plan and render it as text
    #[must_use]
    pub fn generate_text(&self, request: &WorkoutRequest) -> (WorkoutPlan, String) {
        let plan = self.generate(request);
        let text = render_text(&plan);
        (plan, text)
    }

    fn build_section(&self, budget: SectionBudget, lap: f64, variety: &mut Variety) -> Section {
        let max_reps = self.policy.max_reps_per_set;
        let budget_distance = f64::from(budget.laps) * lap;

        let sets = match budget.kind {
            SectionKind::Warm => warm_sets(budget.laps, max_reps, lap, variety),
            SectionKind::Main => main_sets(budget.laps, max_reps, lap, variety),
            kind => {
                let nominal = supporting_rep_distance(kind, budget_distance);
                let cue = variety.cue(catalog::cues_for(kind));
                to_swim_sets(
                    &build_sets(budget.laps, laps_for(nominal, lap), max_reps),
                    lap,
                    &cue,
                )
            }
        };

        Section {
            kind: budget.kind,
            sets,
        }
    }
}

/// Requested distance expressed in pool units, rounded to 100 when converted
fn working_distance(request: &WorkoutRequest) -> f64 {
    let pool = request.pool();
    if request.distance_unit() == pool.unit {
        return request.distance();
    }

    let converted = request.distance_unit().convert(request.distance(), pool.unit);
    let rounded = snap_to_pool_multiple(converted, defaults::CONVERTED_DISTANCE_ROUNDING);
    let drift = (rounded - converted).abs();
    if rounded >= pool.round_trip()
        && drift <= converted * defaults::CONVERTED_DISTANCE_TOLERANCE
    {
        rounded
    } else {
        snap_to_pool_multiple(converted, pool.round_trip())
    }
}

/// Nominal rep distance for the single-cue sections
fn supporting_rep_distance(kind: SectionKind, budget_distance: f64) -> f64 {
    match kind {
        SectionKind::Drill if budget_distance <= 400.0 => 50.0,
        SectionKind::Kick if budget_distance <= 300.0 => 50.0,
        SectionKind::Drill | SectionKind::Kick => 100.0,
        SectionKind::Pull if budget_distance <= 600.0 => 100.0,
        SectionKind::Pull => 200.0,
        SectionKind::PreMain => 50.0,
        // one continuous swim, split only when long
        SectionKind::Cool => budget_distance.min(200.0),
        SectionKind::Warm | SectionKind::Main => budget_distance,
    }
}

/// Continuous easy swim followed by one-lap builds
fn warm_sets(laps: u32, max_reps: u32, lap: f64, variety: &mut Variety) -> Vec<SwimSet> {
    let swim_cue = variety.cue(catalog::WARM_SWIM_CUES);
    if laps <= WARM_SINGLE_SWIM_MAX_LAPS {
        return to_swim_sets(&build_sets(laps, laps, max_reps), lap, &swim_cue);
    }

    let build_laps = laps / 3;
    let swim_laps = laps - build_laps;
    let build_cue = variety.cue(catalog::WARM_BUILD_CUES);

    let mut sets = to_swim_sets(&build_sets(swim_laps, swim_laps, max_reps), lap, &swim_cue);
    sets.extend(to_swim_sets(&build_sets(build_laps, 1, max_reps), lap, &build_cue));
    sets
}

/// Primary block of about two thirds at the volume-based rep distance, then
/// a faster block at half that distance
fn main_sets(laps: u32, max_reps: u32, lap: f64, variety: &mut Variety) -> Vec<SwimSet> {
    let main_distance = f64::from(laps) * lap;
    let ladder_index = MAIN_REP_LADDER
        .iter()
        .position(|&(below, _)| main_distance < below)
        .unwrap_or(MAIN_REP_LADDER.len());

    let default_nominal = MAIN_REP_LADDER
        .get(ladder_index)
        .map_or(MAIN_REP_LONGEST, |&(_, nominal)| nominal);
    let shorter_nominal = ladder_index
        .checked_sub(1)
        .and_then(|index| MAIN_REP_LADDER.get(index))
        .map_or(default_nominal, |&(_, nominal)| nominal);
    let nominal = variety.pick(&[default_nominal, shorter_nominal], default_nominal);

    let rep_laps = laps_for(nominal, lap).min(laps);
    let target_laps = (f64::from(laps) * 2.0 / 3.0).round() as u32;
    let mut primary_reps = ((f64::from(target_laps) / f64::from(rep_laps)).round() as u32).max(1);
    if primary_reps * rep_laps > laps {
        primary_reps = laps / rep_laps;
    }

    let primary_laps = primary_reps * rep_laps;
    let secondary_laps = laps - primary_laps;
    let secondary_rep_laps = (rep_laps / 2).max(1);

    let primary_cue = variety.cue(catalog::MAIN_PRIMARY_CUES);
    let secondary_cue = variety.cue(catalog::MAIN_SECONDARY_CUES);

    let mut sets = to_swim_sets(&build_sets(primary_laps, rep_laps, max_reps), lap, &primary_cue);
    sets.extend(to_swim_sets(
        &build_sets(secondary_laps, secondary_rep_laps, max_reps),
        lap,
        &secondary_cue,
    ));
    sets
}

fn to_swim_sets(shapes: &[SetShape], lap: f64, cue: &str) -> Vec<SwimSet> {
    shapes
        .iter()
        .map(|shape| SwimSet {
            repetitions: shape.repetitions,
            distance_per_rep: f64::from(shape.laps_per_rep) * lap,
            description: cue.to_owned(),
            estimated_seconds_per_rep: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use swim_core::models::{PoolLength, PoolUnit, ThresholdPace};

    fn request(distance: f64, pool: &str) -> WorkoutRequest {
        WorkoutRequest::new(distance, None, pool.parse::<PoolLength>().unwrap(), None, None)
            .unwrap()
    }

    fn main_lines(plan: &WorkoutPlan) -> Vec<(u32, f64)> {
        plan.section(SectionKind::Main)
            .unwrap()
            .sets
            .iter()
            .map(|set| (set.repetitions, set.distance_per_rep))
            .collect()
    }

    #[test]
    fn test_2000_in_25m_pool() {
        let plan = WorkoutGenerator::default().generate(&request(2000.0, "25m"));

        assert!((plan.total_distance() - 2000.0).abs() < 1e-9);
        assert_eq!(main_lines(&plan), vec![(6, 100.0), (6, 50.0)]);
        let kinds: Vec<SectionKind> = plan.sections.iter().map(|section| section.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Warm,
                SectionKind::Drill,
                SectionKind::Kick,
                SectionKind::PreMain,
                SectionKind::Main,
                SectionKind::Cool,
            ]
        );
    }

    #[test]
    fn test_yards_pool_uses_yards_by_default() {
        let plan = WorkoutGenerator::default().generate(&request(2000.0, "25yd"));
        assert!((plan.total_distance() - 2000.0).abs() < 1e-9);
        for (reps, distance) in main_lines(&plan) {
            assert!(
                !((reps == 22 || reps == 26) && (distance - 50.0).abs() < 1e-9),
                "unit mismatch shape {reps} x {distance}"
            );
        }
    }

    #[test]
    fn test_meters_target_in_yards_pool_is_converted() {
        let pool = "25yd".parse::<PoolLength>().unwrap();
        let request =
            WorkoutRequest::new(2000.0, Some(PoolUnit::Meters), pool, None, None).unwrap();
        let plan = WorkoutGenerator::default().generate(&request);

        // 2000m = 2187.2yd, rounded to 2200yd
        assert!((plan.total_distance() - 2200.0).abs() < 1e-9);
        assert!(plan
            .sets()
            .all(|set| is_pool_multiple(set.distance_per_rep, 25.0)));
    }

    #[test]
    fn test_short_meters_target_in_yards_pool_stays_close() {
        let pool = "25yd".parse::<PoolLength>().unwrap();
        // 50m = 54.7yd, 60m = 65.6yd, 140m = 153.1yd, 2000m = 2187.2yd
        for (meters, expected) in [(50.0, 50.0), (60.0, 50.0), (140.0, 150.0), (2000.0, 2200.0)] {
            let request =
                WorkoutRequest::new(meters, Some(PoolUnit::Meters), pool, None, None).unwrap();
            let plan = WorkoutGenerator::default().generate(&request);
            assert!(
                (plan.total_distance() - expected).abs() < 1e-9,
                "{meters}m planned {}yd, expected {expected}yd",
                plan.total_distance()
            );
        }
    }

    #[test]
    fn test_every_set_is_pool_multiple_and_capped() {
        let generator = WorkoutGenerator::new(GeneratorPolicy::new(8).unwrap());
        for pool in ["25m", "25yd", "50m", "33.33m", "20m"] {
            let mut distance = 100.0;
            while distance <= 20_000.0 {
                let request = request(distance, pool);
                let plan = generator.generate(&request);
                let length = request.pool().value;
                for set in plan.sets() {
                    assert!(set.repetitions >= 1 && set.repetitions <= 8);
                    assert!(
                        is_pool_multiple(set.distance_per_rep, length),
                        "{pool}: {} not a multiple",
                        set.distance_per_rep
                    );
                }
                let expected = snap_to_pool_multiple(distance, length * 2.0);
                assert!(
                    (plan.total_distance() - expected).abs() < 1e-6 * expected,
                    "{pool} {distance}: planned {}",
                    plan.total_distance()
                );
                assert!(plan.section(SectionKind::Main).is_some());
                distance += 350.0;
            }
        }
    }

    #[test]
    fn test_seeded_plans_keep_structure() {
        let pool = "25m".parse::<PoolLength>().unwrap();
        let generator = WorkoutGenerator::default();
        let baseline = generator.generate(&request(3000.0, "25m"));
        for seed in 0..50 {
            let seeded = WorkoutRequest::new(3000.0, None, pool, None, Some(seed)).unwrap();
            let plan = generator.generate(&seeded);
            assert!((plan.total_distance() - baseline.total_distance()).abs() < 1e-9);
            let kinds = |plan: &WorkoutPlan| -> Vec<SectionKind> {
                plan.sections.iter().map(|section| section.kind).collect()
            };
            assert_eq!(kinds(&plan), kinds(&baseline));
            assert_eq!(plan, generator.generate(&seeded));
        }
    }

    #[test]
    fn test_unseeded_is_deterministic() {
        let generator = WorkoutGenerator::default();
        let request = request(2500.0, "25yd");
        assert_eq!(generator.generate_text(&request), generator.generate_text(&request));
    }

    #[test]
    fn test_pace_estimates() {
        let pool = "25m".parse::<PoolLength>().unwrap();
        let pace = ThresholdPace::from_seconds(100.0).unwrap();
        let request = WorkoutRequest::new(2000.0, None, pool, Some(pace), None).unwrap();
        let plan = WorkoutGenerator::default().generate(&request);

        for set in plan.sets() {
            let per_rep = set.estimated_seconds_per_rep.unwrap();
            assert!((per_rep - set.distance_per_rep).abs() < 1e-9);
        }
        // at 1:40 per 100, 2000 takes 2000 seconds
        assert!((plan.estimated_seconds().unwrap() - 2000.0).abs() < 1e-6);
    }

    #[test]
    fn test_unpaced_has_no_estimates() {
        let plan = WorkoutGenerator::default().generate(&request(1500.0, "25m"));
        assert!(plan.estimated_seconds().is_none());
        assert!(plan.sets().all(|set| set.estimated_seconds_per_rep.is_none()));
    }

    #[test]
    fn test_policy_rejects_bad_cap() {
        assert!(GeneratorPolicy::new(0).is_err());
        assert!(GeneratorPolicy::new(101).is_err());
        assert_eq!(GeneratorPolicy::new(20).unwrap(), GeneratorPolicy::default());
    }
}
