// ABOUTME: Unit conversion constants for distance and time
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Meters in one yard (exact, international yard)
pub const METERS_PER_YARD: f64 = 0.9144;

/// Paces are expressed per this many distance units
pub const PACE_REFERENCE_DISTANCE: f64 = 100.0;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Tolerance used when comparing distances computed in floating point
pub const DISTANCE_EPSILON: f64 = 1e-6;
