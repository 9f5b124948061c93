// ABOUTME: Route module organization for the swim workout server HTTP endpoints
// ABOUTME: Each domain module holds route definitions and thin handlers that delegate to services
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP routes, organized by domain

/// Static page and stylesheet routes
pub mod assets;
/// Health check and readiness routes
pub mod health;
/// Workout generation routes
pub mod workout;

pub use assets::AssetRoutes;
pub use health::HealthRoutes;
pub use workout::WorkoutRoutes;
