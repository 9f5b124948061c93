// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for units, request limits, and generator defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat file.

/// Unit conversion and measurement constants
pub mod units;

/// Request validation limits
pub mod limits {
    /// Largest accepted workout, in pool units after conversion
    pub const MAX_WORKOUT_DISTANCE: f64 = 20_000.0;
    /// Shortest accepted pool length
    pub const MIN_POOL_LENGTH: f64 = 10.0;
    /// Longest accepted pool length
    pub const MAX_POOL_LENGTH: f64 = 100.0;
    /// Fastest accepted threshold pace, seconds per 100
    pub const MIN_PACE_SECONDS: f64 = 30.0;
    /// Slowest accepted threshold pace, seconds per 100
    pub const MAX_PACE_SECONDS: f64 = 600.0;
    /// Upper bound for the configurable reps-per-set cap
    pub const MAX_REPS_PER_SET_CEILING: u32 = 100;
}

/// Generator defaults
pub mod defaults {
    /// Default maximum repetitions in a single set before it is split
    pub const MAX_REPS_PER_SET: u32 = 20;
    /// Converted distances are rounded to this many pool units
    pub const CONVERTED_DISTANCE_ROUNDING: f64 = 100.0;
    /// Largest relative drift the 100-unit rounding may introduce; beyond it
    /// the converted distance snaps to the pool round trip instead
    pub const CONVERTED_DISTANCE_TOLERANCE: f64 = 0.05;
}

/// Service identity used in logs
pub mod service_names {
    /// Server binary / service name
    pub const SWIM_WORKOUT_SERVER: &str = "swim-workout-server";
}
