//! Simulation driver and its outputs.
//!
//! # Components
//! - [`simulate`] / [`Simulator`] - Replay one reference sequence under one policy
//! - [`compare`] - Replay the same sequence under several policies in parallel
//! - [`StepRecord`] - Per-reference snapshot
//! - [`SimulationResult`] - Full trace plus aggregate fault count
//! - [`SimulationStats`] - Hit/fault/eviction counters

mod compare;
mod driver;
mod result;
mod stats;
mod step;

pub use compare::compare;
pub use driver::{replay, simulate, Simulator};
pub use result::SimulationResult;
pub use stats::SimulationStats;
pub use step::StepRecord;
