// ABOUTME: Distance snapper that rounds a distance to the nearest whole number of pool lengths
// ABOUTME: Never fails: invalid distances floor to zero and invalid pools leave the distance unsnapped
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use swim_core::constants::units::DISTANCE_EPSILON;

/// Round `distance` to the nearest multiple of `pool_length`
///
/// Rounding is half away from zero (`f64::round`): 62.5 in a 25 pool snaps
/// to 75, not 50.
///
/// - `distance` not finite or `<= 0` gives `0.0`.
/// - `pool_length` not finite or `<= 0` gives `distance` unchanged.
#[must_use]
pub fn snap_to_pool_multiple(distance: f64, pool_length: f64) -> f64 {
    if !distance.is_finite() || distance <= 0.0 {
        return 0.0;
    }
    if !pool_length.is_finite() || pool_length <= 0.0 {
        return distance;
    }
    (distance / pool_length).round() * pool_length
}

/// Whether `distance` is a whole multiple of `pool_length` within floating tolerance
#[must_use]
pub fn is_pool_multiple(distance: f64, pool_length: f64) -> bool {
    if !pool_length.is_finite() || pool_length <= 0.0 || !distance.is_finite() {
        return false;
    }
    let lengths = distance / pool_length;
    (lengths - lengths.round()).abs() <= DISTANCE_EPSILON * lengths.abs().max(1.0)
}
