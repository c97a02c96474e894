//! Testing infrastructure for tradify integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for declarative test setup
//! - `assertions`: Custom assertions for `--format json` output
//! - `fixtures`: Sample catalogs
//! - `host`: A `Host` that records every side effect

pub mod assertions;
pub mod fixtures;
pub mod host;
pub mod world;

pub use host::{HostCall, RecordingHost};
pub use world::{CliResult, TestWorld};
