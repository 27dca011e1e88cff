//! Configuration module for Budu
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BuduPaths;
pub use settings::{RolloverPolicy, Settings};
