//! The output of one simulation run.

use std::fmt::{self, Write as _};

use serde::Serialize;

use super::{SimulationStats, StepRecord};
use crate::replacer::Policy;

/// Complete trace of one run plus its aggregate fault count.
///
/// Read-only once produced; presentation code consumes it as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationResult<P> {
    /// Policy that produced this trace.
    pub policy: Policy,

    /// Frame capacity of the run.
    pub num_frames: usize,

    /// One record per reference, in order.
    pub steps: Vec<StepRecord<P>>,

    /// Total faults; equals the last record's `fault_count`.
    pub fault_count: usize,
}

impl<P> SimulationResult<P> {
    /// Number of references replayed.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if no references were replayed. Never true for a result
    /// returned by the driver.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// References that hit a resident page.
    pub fn hit_count(&self) -> usize {
        self.steps.len() - self.fault_count
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        self.stats().fault_rate()
    }

    /// `(step, fault_count)` pairs: the cumulative-fault curve.
    pub fn fault_series(&self) -> Vec<(usize, usize)> {
        self.steps.iter().map(|s| (s.step, s.fault_count)).collect()
    }

    /// Aggregate counters for this run.
    pub fn stats(&self) -> SimulationStats {
        SimulationStats {
            references: self.steps.len(),
            hits: self.hit_count(),
            faults: self.fault_count,
            evictions: self.steps.iter().filter(|s| s.evicted.is_some()).count(),
        }
    }
}

impl<P: fmt::Display> SimulationResult<P> {
    /// CRC32 over the rendered trace lines.
    ///
    /// Two runs with the same checksum replayed the same pages with the
    /// same hit/fault decisions and the same frame ordering at every step.
    pub fn checksum(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(self.policy.to_string().as_bytes());
        hasher.update(&(self.num_frames as u64).to_le_bytes());

        let mut line = String::new();
        for step in &self.steps {
            line.clear();
            // Writing to a String cannot fail.
            let _ = writeln!(line, "{}", step);
            hasher.update(line.as_bytes());
        }
        hasher.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::simulate;

    #[test]
    fn test_fault_series_matches_steps() {
        let result = simulate(&[1, 2, 1, 3], 2, Policy::Lru).unwrap();
        assert_eq!(result.fault_series(), vec![(1, 1), (2, 2), (3, 2), (4, 3)]);
        assert_eq!(result.hit_count(), 1);
        assert_eq!(result.len(), 4);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_checksum_distinguishes_policies() {
        let refs = [1, 2, 1, 3, 2];
        let fifo = simulate(&refs, 2, Policy::Fifo).unwrap();
        let lru = simulate(&refs, 2, Policy::Lru).unwrap();

        assert_eq!(fifo.checksum(), simulate(&refs, 2, Policy::Fifo).unwrap().checksum());
        assert_ne!(fifo.checksum(), lru.checksum());
    }

    #[test]
    fn test_stats_counts_evictions() {
        let result = simulate(&[1, 2, 3, 4], 2, Policy::Fifo).unwrap();
        let stats = result.stats();
        assert_eq!(stats.faults, 4);
        assert_eq!(stats.evictions, 2);
        assert_eq!(result.fault_rate(), 1.0);
    }
}
