// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Holds workout request parsing and generation independent of the HTTP framework
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain service layer
//!
//! Route handlers stay thin: they hand raw bytes to a service and turn the
//! result into a response.

/// Workout request parsing and generation
pub mod workout;

pub use workout::{GenerateWorkoutBody, GenerateWorkoutResponse, NumberOrText, WorkoutService};
