//! Eviction policy implementations (replacers).
//!
//! Every policy implements the [`Replacer`] trait: given one page reference
//! it reports hit or fault and updates its private frame set.
//!
//! Currently implements:
//! - [`FifoReplacer`] - evicts the page resident longest
//! - [`LruReplacer`] - evicts the page referenced least recently
//!
//! [`Engine`] is the closed set of policies the driver can run. Adding a
//! policy means adding a [`Policy`] variant and an [`Engine`] arm.

mod fifo;
mod lru;

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::Error;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;

/// Selects which eviction policy a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// First-in, first-out.
    Fifo,
    /// Least recently used.
    Lru,
}

impl Policy {
    /// All policies, in a stable order.
    pub const ALL: [Policy; 2] = [Policy::Fifo, Policy::Lru];
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fifo => write!(f, "FIFO"),
            Policy::Lru => write!(f, "LRU"),
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

/// Outcome of a single page reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access<P> {
    /// The page was already resident.
    Hit,
    /// The page had to be loaded. `evicted` is the page it displaced, if
    /// the frame set was full.
    Fault { evicted: Option<P> },
}

impl<P> Access<P> {
    /// Returns true if this reference caused a page fault.
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, Access::Fault { .. })
    }

    /// The evicted page, if any.
    pub fn evicted(&self) -> Option<&P> {
        match self {
            Access::Fault { evicted } => evicted.as_ref(),
            Access::Hit => None,
        }
    }

    /// Consume the outcome, returning the evicted page.
    pub fn into_evicted(self) -> Option<P> {
        match self {
            Access::Fault { evicted } => evicted,
            Access::Hit => None,
        }
    }
}

/// Shared contract of all eviction policies.
///
/// A replacer owns its frame set exclusively; callers observe it only
/// through [`frames`](Replacer::frames), which returns an independent copy.
pub trait Replacer<P> {
    /// Reference `page`, loading it (and evicting if full) on a miss.
    fn access(&mut self, page: &P) -> Access<P>;

    /// Is `page` currently resident?
    fn contains(&self, page: &P) -> bool;

    /// Number of resident pages.
    fn len(&self) -> usize;

    /// Maximum number of resident pages.
    fn capacity(&self) -> usize;

    /// Copy of the frame set in the policy's logical order (front is the
    /// next eviction candidate).
    fn frames(&self) -> Vec<P>;

    /// Drop all resident pages, keeping the capacity.
    fn reset(&mut self);

    /// Reference `page` and report only whether it faulted.
    fn process(&mut self, page: &P) -> bool {
        self.access(page).is_fault()
    }

    /// True if no page is resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A policy engine selected once at construction time.
#[derive(Debug, Clone)]
pub enum Engine<P> {
    Fifo(FifoReplacer<P>),
    Lru(LruReplacer<P>),
}

impl<P: Clone + Eq + Hash> Engine<P> {
    /// Build an empty engine for `policy` with room for `capacity` pages.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(policy: Policy, capacity: usize) -> Self {
        match policy {
            Policy::Fifo => Engine::Fifo(FifoReplacer::new(capacity)),
            Policy::Lru => Engine::Lru(LruReplacer::new(capacity)),
        }
    }

    /// The policy this engine runs.
    pub fn policy(&self) -> Policy {
        match self {
            Engine::Fifo(_) => Policy::Fifo,
            Engine::Lru(_) => Policy::Lru,
        }
    }
}

impl<P: Clone + Eq + Hash> Replacer<P> for Engine<P> {
    fn access(&mut self, page: &P) -> Access<P> {
        match self {
            Engine::Fifo(r) => r.access(page),
            Engine::Lru(r) => r.access(page),
        }
    }

    fn contains(&self, page: &P) -> bool {
        match self {
            Engine::Fifo(r) => r.contains(page),
            Engine::Lru(r) => r.contains(page),
        }
    }

    fn len(&self) -> usize {
        match self {
            Engine::Fifo(r) => r.len(),
            Engine::Lru(r) => r.len(),
        }
    }

    fn capacity(&self) -> usize {
        match self {
            Engine::Fifo(r) => r.capacity(),
            Engine::Lru(r) => r.capacity(),
        }
    }

    fn frames(&self) -> Vec<P> {
        match self {
            Engine::Fifo(r) => r.frames(),
            Engine::Lru(r) => r.frames(),
        }
    }

    fn reset(&mut self) {
        match self {
            Engine::Fifo(r) => r.reset(),
            Engine::Lru(r) => r.reset(),
        }
    }
}
