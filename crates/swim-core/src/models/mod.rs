// ABOUTME: Core data models for swim workout requests and plans
// ABOUTME: Re-exports pool, pace, and workout types under a single module path
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Threshold pace model
pub mod pace;
/// Pool length and unit models
pub mod pool;
/// Workout request and plan models
pub mod workout;

pub use pace::ThresholdPace;
pub use pool::{DistanceUnit, PoolLength, PoolUnit};
pub use workout::{Section, SectionKind, SwimSet, WorkoutPlan, WorkoutRequest};
