// ABOUTME: Swim workout planning engine: snapping, allocation, set shaping, timing, and rendering
// ABOUTME: Extracted from the server crate so the algorithms stay pure and benchmarkable
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Swim Planner
//!
//! Deterministic workout generation. Given a validated
//! [`swim_core::models::WorkoutRequest`], [`WorkoutGenerator`] produces a
//! [`swim_core::models::WorkoutPlan`] whose every rep distance is a whole
//! multiple of the pool length, and [`render_text`] turns it into the text
//! swimmers read on deck.

/// Proportional section allocation in round trips
pub mod allocation;
/// Coaching cues and the seeded variety picker
pub mod catalog;
/// Workout generator and its policy
pub mod generator;
/// Plain-text rendering
pub mod render;
/// Set shaping with the reps-per-set cap
pub mod sets;
/// Distance snapping to pool multiples
pub mod snap;
/// Pace estimates and clock formatting
pub mod timing;

pub use generator::{GeneratorPolicy, WorkoutGenerator};
pub use render::render_text;
pub use snap::{is_pool_multiple, snap_to_pool_multiple};
