// ABOUTME: Library root for the swim workout HTTP service
// ABOUTME: Wires configuration, logging, middleware, services, and routes around the planner crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Swim Workout Server
//!
//! An axum service exposing `POST /generate-workout`. Requests carry a target
//! distance and a pool length such as `"25yd"`; responses carry the rendered
//! workout text and the structured plan behind it.
//!
//! The planning itself lives in `swim_planner`; the shared types and errors
//! live in `swim_core`.

/// Environment-driven configuration
pub mod config;
/// Structured logging setup
pub mod logging;
/// HTTP middleware
pub mod middleware;
/// HTTP routes
pub mod routes;
/// Router assembly and serve loop
pub mod server;
/// Domain services used by the routes
pub mod services;

pub use server::{build_router, run, AppState};
