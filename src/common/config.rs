//! Run configuration for pagesim.

use serde::{Deserialize, Serialize};

use crate::common::{Error, Result};
use crate::replacer::Policy;

/// Frame count used when none is given.
pub const DEFAULT_NUM_FRAMES: usize = 3;

/// Reference string replayed when the caller supplies none.
pub const SAMPLE_REFERENCES: [u32; 13] = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];

/// Parameters fixed for the duration of one simulation run.
///
/// # Example
/// ```
/// use pagesim::{Policy, SimulationConfig};
///
/// let config = SimulationConfig::new(4, Policy::Lru);
/// assert!(config.validate().is_ok());
/// assert!(SimulationConfig::new(0, Policy::Lru).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Maximum number of pages resident at once.
    pub num_frames: usize,

    /// Eviction policy applied when the frame set is full.
    pub policy: Policy,
}

impl SimulationConfig {
    /// Create a new config. Call [`validate`](Self::validate) before use.
    pub fn new(num_frames: usize, policy: Policy) -> Self {
        Self { num_frames, policy }
    }

    /// Check the frame count.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if `num_frames` is 0.
    pub fn validate(&self) -> Result<()> {
        if self.num_frames == 0 {
            return Err(Error::invalid_config("num_frames must be > 0"));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_FRAMES, Policy::Fifo)
    }
}

/// Parse a free-form reference string such as `"7, 0 1,2"` into page ids.
///
/// Tokens may be separated by commas, whitespace, or both. Empty tokens
/// are skipped, so an empty or blank string yields an empty vector; the
/// driver is what rejects an empty sequence.
///
/// # Errors
/// `Error::InvalidReference` for the first token that is not a `u32`.
pub fn parse_references(input: &str) -> Result<Vec<u32>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u32>()
                .map_err(|_| Error::InvalidReference(token.to_string()))
        })
        .collect()
}
