// ABOUTME: Threshold-pace time estimates for sets and clock formatting for rendered output
// ABOUTME: Per-rep estimate is (distance / 100) * pace; sections and workouts sum their sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use swim_core::constants::units::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use swim_core::models::{ThresholdPace, WorkoutPlan};

/// Attach per-rep estimates to every set, or clear them when unpaced
pub fn apply_pace(plan: &mut WorkoutPlan, pace: Option<ThresholdPace>) {
    for section in &mut plan.sections {
        for set in &mut section.sets {
            set.estimated_seconds_per_rep = pace.map(|pace| pace.seconds_for(set.distance_per_rep));
        }
    }
}

/// Format seconds as `m:ss`, or `h:mm:ss` from one hour up
#[must_use]
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    };
    let hours = total / SECONDS_PER_HOUR as u64;
    let minutes = (total % SECONDS_PER_HOUR as u64) / SECONDS_PER_MINUTE as u64;
    let secs = total % SECONDS_PER_MINUTE as u64;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
