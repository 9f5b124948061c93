// ABOUTME: Proportional allocation of a workout's round trips across named sections
// ABOUTME: Fixed weights per distance tier; the main set absorbs the remainder so totals stay exact
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Section allocation
//!
//! Budgets are counted in whole round trips (two pool lengths), never in raw
//! distance, so every section lands on a pool multiple without float drift.

use swim_core::models::SectionKind;

/// Workouts shorter than this (in pool units) use the short tier
pub const STANDARD_TIER_START: f64 = 1000.0;
/// Workouts at least this long (in pool units) use the long tier
pub const LONG_TIER_START: f64 = 3000.0;
/// Short workouts only get a drill block with at least this many round trips
const MIN_LAPS_FOR_SHORT_DRILL: u32 = 8;

/// Distance bracket that selects a weight table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceTier {
    /// Under 1000
    Short,
    /// 1000 to 2999
    Standard,
    /// 3000 and up
    Long,
}

impl DistanceTier {
    /// Tier for a working total expressed in pool units
    #[must_use]
    pub fn for_distance(distance: f64) -> Self {
        if distance < STANDARD_TIER_START {
            Self::Short
        } else if distance < LONG_TIER_START {
            Self::Standard
        } else {
            Self::Long
        }
    }

    /// Share of the workout for every section except MAIN
    ///
    /// Shares sum to at most 55%, leaving MAIN the dominant block.
    #[must_use]
    pub const fn weights(self) -> &'static [(SectionKind, f64)] {
        match self {
            Self::Short => &[
                (SectionKind::Warm, 0.20),
                (SectionKind::Drill, 0.10),
                (SectionKind::Cool, 0.10),
            ],
            Self::Standard => &[
                (SectionKind::Warm, 0.15),
                (SectionKind::Drill, 0.10),
                (SectionKind::Kick, 0.10),
                (SectionKind::PreMain, 0.10),
                (SectionKind::Cool, 0.10),
            ],
            Self::Long => &[
                (SectionKind::Warm, 0.12),
                (SectionKind::Drill, 0.08),
                (SectionKind::Kick, 0.08),
                (SectionKind::Pull, 0.10),
                (SectionKind::PreMain, 0.10),
                (SectionKind::Cool, 0.07),
            ],
        }
    }
}

/// Round trips assigned to one section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBudget {
    /// Section the budget belongs to
    pub kind: SectionKind,
    /// Number of round trips
    pub laps: u32,
}

/// Order in which supporting sections give up round trips when a tiny
/// workout cannot fit them all alongside a main set
const TRIM_ORDER: [SectionKind; 6] = [
    SectionKind::PreMain,
    SectionKind::Pull,
    SectionKind::Kick,
    SectionKind::Drill,
    SectionKind::Cool,
    SectionKind::Warm,
];

/// Split `total_laps` round trips across sections
///
/// Returned budgets are non-zero, sorted in swim order, sum to exactly
/// `total_laps`, and always include MAIN with at least one round trip.
#[must_use]
pub fn allocate(total_laps: u32, lap_distance: f64) -> Vec<SectionBudget> {
    let total_laps = total_laps.max(1);
    let tier = DistanceTier::for_distance(f64::from(total_laps) * lap_distance);

    let mut budgets: Vec<SectionBudget> = tier
        .weights()
        .iter()
        .filter(|(kind, _)| {
            !(tier == DistanceTier::Short
                && *kind == SectionKind::Drill
                && total_laps < MIN_LAPS_FOR_SHORT_DRILL)
        })
        .map(|&(kind, weight)| SectionBudget {
            kind,
            laps: (f64::from(total_laps) * weight).round() as u32,
        })
        .collect();

    let mut supporting: u32 = budgets.iter().map(|budget| budget.laps).sum();
    let mut overflow = supporting.saturating_sub(total_laps - 1);
    for kind in TRIM_ORDER {
        if overflow == 0 {
            break;
        }
        if let Some(budget) = budgets.iter_mut().find(|budget| budget.kind == kind) {
            let cut = budget.laps.min(overflow);
            budget.laps -= cut;
            overflow -= cut;
            supporting -= cut;
        }
    }

    budgets.push(SectionBudget {
        kind: SectionKind::Main,
        laps: total_laps - supporting,
    });
    budgets.retain(|budget| budget.laps > 0);
    budgets.sort_by_key(|budget| budget.kind);
    budgets
}
