//! Simulation driver - replays a reference sequence through one engine.
//!
//! ```text
//!   references ──▶ Simulator ──process(page)──▶ Engine (FIFO | LRU)
//!                      │                          │ owns frame set
//!                      │◀────── Access ───────────┘
//!                      ▼
//!               StepRecord × N ──▶ SimulationResult
//! ```

use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace};

use super::{SimulationResult, StepRecord};
use crate::common::{Error, Result, SimulationConfig};
use crate::replacer::{Engine, Policy, Replacer};

/// Runs simulations for one validated [`SimulationConfig`].
///
/// Every call to [`run`](Self::run) builds a fresh engine, so runs are
/// independent and a `Simulator` can be reused or shared between threads.
///
/// # Example
/// ```
/// use pagesim::{Policy, SimulationConfig, Simulator};
///
/// let sim = Simulator::new(SimulationConfig::new(3, Policy::Fifo)).unwrap();
/// let result = sim.run(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]).unwrap();
/// assert_eq!(result.fault_count, 10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Create a simulator.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if the frame count is 0.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration every run uses.
    pub fn config(&self) -> SimulationConfig {
        self.config
    }

    /// Replay `references` through a fresh engine.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if `references` is empty.
    pub fn run<P>(&self, references: &[P]) -> Result<SimulationResult<P>>
    where
        P: Clone + Eq + Hash + fmt::Debug,
    {
        if references.is_empty() {
            return Err(Error::invalid_config("reference sequence is empty"));
        }

        let SimulationConfig { num_frames, policy } = self.config;
        debug!(%policy, num_frames, references = references.len(), "starting simulation");

        let mut engine = Engine::new(policy, num_frames);
        let (steps, fault_count) = replay(&mut engine, references);

        debug!(%policy, num_frames, fault_count, "simulation finished");

        Ok(SimulationResult {
            policy,
            num_frames,
            steps,
            fault_count,
        })
    }
}

/// Replay `references` in order through `replacer`.
///
/// Returns one record per reference and the final fault count. Performs
/// no validation; the replacer's current contents are the starting state.
pub fn replay<P, R>(replacer: &mut R, references: &[P]) -> (Vec<StepRecord<P>>, usize)
where
    P: Clone + fmt::Debug,
    R: Replacer<P>,
{
    let mut steps = Vec::with_capacity(references.len());
    let mut fault_count = 0;

    for (i, page) in references.iter().enumerate() {
        let access = replacer.access(page);
        let fault = access.is_fault();
        if fault {
            fault_count += 1;
        }
        let evicted = access.into_evicted();

        trace!(step = i + 1, ?page, fault, ?evicted, fault_count, "reference");

        steps.push(StepRecord {
            step: i + 1,
            page: page.clone(),
            frames: replacer.frames(),
            fault,
            evicted,
            fault_count,
        });
    }

    (steps, fault_count)
}

/// Run one simulation.
///
/// # Errors
/// `Error::InvalidConfiguration` if `num_frames` is 0 or `references` is
/// empty. No steps are produced in that case.
///
/// # Example
/// ```
/// use pagesim::{simulate, Policy};
///
/// let result = simulate(&[7, 0, 1, 2, 0], 3, Policy::Lru).unwrap();
/// assert_eq!(result.steps[0].frames, vec![7]);
/// assert!(!result.steps[4].fault);
/// ```
pub fn simulate<P>(references: &[P], num_frames: usize, policy: Policy) -> Result<SimulationResult<P>>
where
    P: Clone + Eq + Hash + fmt::Debug,
{
    Simulator::new(SimulationConfig::new(num_frames, policy))?.run(references)
}
