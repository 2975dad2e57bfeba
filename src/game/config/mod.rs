//! Config Module
//!
//! Explicitly constructed configuration objects for the spatial core.

pub mod world_config;

pub use world_config::{ConfigError, WorldConfig};
