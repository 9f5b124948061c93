// ABOUTME: Configuration module root for the swim workout server
// ABOUTME: Re-exports the environment-driven ServerConfig and its supporting types
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Environment-based server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, ServerConfig};
