//! pagesim - A page replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Front End (bin/pagesim)  [optional]            │   │
//! │  │     parse references → render text / JSON / CSV          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Driver (simulation/)                        │   │
//! │  │   simulate / Simulator / compare → SimulationResult      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Policy Engines (replacer/)  [Selected per run]     │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │        Eviction Policies: FIFO | LRU             │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │          Engine + Replacer trait + Access                │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Error, config, reference parsing)
//! - [`replacer`] - Eviction policy implementations
//! - [`simulation`] - The driver and its step-by-step trace
//!
//! # Quick Start
//! ```
//! use pagesim::{simulate, Policy};
//!
//! let result = simulate(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2], 3, Policy::Fifo).unwrap();
//!
//! assert_eq!(result.steps[0].frames, vec![7]);
//! for step in &result.steps {
//!     println!("{}", step);
//! }
//! println!("{}", result.stats());
//! ```

pub mod common;
pub mod replacer;
pub mod simulation;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_NUM_FRAMES, SAMPLE_REFERENCES};
pub use common::{parse_references, Error, Result, SimulationConfig};

pub use replacer::{Access, Engine, FifoReplacer, LruReplacer, Policy, Replacer};
pub use simulation::{
    compare, replay, simulate, SimulationResult, SimulationStats, Simulator, StepRecord,
};
