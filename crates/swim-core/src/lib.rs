// ABOUTME: Core types and constants for the swim workout service
// ABOUTME: Foundation crate with error handling, pool/pace parsing, workout models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Swim Core
//!
//! Foundation crate providing shared types and constants for the swim workout
//! service. It changes infrequently, so the planner and the server can compile
//! incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and parse errors
//! - **constants**: Unit conversions, request limits, and generator defaults
//! - **models**: `PoolLength`, `ThresholdPace`, `WorkoutRequest`, `WorkoutPlan`

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (pool, pace, request, plan)
pub mod models;
