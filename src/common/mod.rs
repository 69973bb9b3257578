//! Common types and utilities shared across pagesim.
//!
//! This module contains the primitives every other module builds on:
//! - Run configuration and defaults
//! - Error types

pub mod config;
pub mod error;

pub use config::{parse_references, SimulationConfig, DEFAULT_NUM_FRAMES, SAMPLE_REFERENCES};
pub use error::{Error, Result};
