// ABOUTME: Set builder that turns a round-trip budget into capped "reps x distance" blocks
// ABOUTME: Splits rep counts above the per-set cap into extra sets and keeps any remainder as one swim
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::snap::snap_to_pool_multiple;

/// A set shape counted in round trips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetShape {
    /// Repetitions
    pub repetitions: u32,
    /// Round trips per repetition
    pub laps_per_rep: u32,
}

impl SetShape {
    /// Round trips covered by the whole set
    #[must_use]
    pub const fn total_laps(self) -> u32 {
        self.repetitions * self.laps_per_rep
    }
}

/// Round trips closest to a nominal rep distance, never less than one
#[must_use]
pub fn laps_for(nominal_distance: f64, lap_distance: f64) -> u32 {
    let snapped = snap_to_pool_multiple(nominal_distance, lap_distance);
    if lap_distance <= 0.0 {
        return 1;
    }
    ((snapped / lap_distance).round() as u32).max(1)
}

/// Fill `budget_laps` with repeats of `laps_per_rep`
///
/// Repeats are emitted in chunks of at most `max_reps` (a cap of zero is
/// treated as one). Whatever does not divide evenly is appended as a single
/// `1 x remainder` swim. The returned shapes always cover `budget_laps`
/// exactly.
#[must_use]
pub fn build_sets(budget_laps: u32, laps_per_rep: u32, max_reps: u32) -> Vec<SetShape> {
    if budget_laps == 0 {
        return Vec::new();
    }

    let laps_per_rep = laps_per_rep.clamp(1, budget_laps);
    let max_reps = max_reps.max(1);
    let mut remaining_reps = budget_laps / laps_per_rep;
    let remainder = budget_laps % laps_per_rep;

    let mut shapes = Vec::new();
    while remaining_reps > 0 {
        let repetitions = remaining_reps.min(max_reps);
        shapes.push(SetShape {
            repetitions,
            laps_per_rep,
        });
        remaining_reps -= repetitions;
    }

    if remainder > 0 {
        shapes.push(SetShape {
            repetitions: 1,
            laps_per_rep: remainder,
        });
    }

    shapes
}
