// ABOUTME: Router and configuration builders shared by the HTTP integration tests
// ABOUTME: Points the static root at a temp directory so asset tests never touch the repo
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(dead_code)]

use axum::Router;
use std::path::Path;
use swim_workout_server::{build_router, config::environment::ServerConfig};

/// Configuration with defaults and the testing environment
pub fn test_config() -> ServerConfig {
    ServerConfig {
        environment: swim_workout_server::config::Environment::Testing,
        ..ServerConfig::default()
    }
}

/// Full router with default configuration
pub fn test_router() -> Router {
    build_router(test_config())
}

/// Full router serving static files from `root`
pub fn test_router_with_static_root(root: &Path) -> Router {
    build_router(ServerConfig {
        static_root: root.to_path_buf(),
        ..test_config()
    })
}
