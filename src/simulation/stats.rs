//! Simulation statistics.

use std::fmt;

use serde::Serialize;

/// Aggregate counters for one completed run.
///
/// Built from a [`SimulationResult`](super::SimulationResult) via
/// [`stats`](super::SimulationResult::stats). Plain values, so it can be
/// printed, serialized and compared freely.
///
/// # Example
/// ```
/// use pagesim::{simulate, Policy};
///
/// let result = simulate(&[1, 2, 1, 3], 2, Policy::Fifo).unwrap();
/// let stats = result.stats();
/// assert_eq!(stats.hits, 1);
/// assert_eq!(stats.faults, 3);
/// assert_eq!(stats.evictions, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SimulationStats {
    pub references: usize,
    pub hits: usize,
    pub faults: usize,
    pub evictions: usize,
}

impl SimulationStats {
    /// Fraction of references that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ references: {}, hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.references,
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SimulationStats::default();
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.fault_rate(), 0.0);
    }

    #[test]
    fn test_stats_rates() {
        let stats = SimulationStats {
            references: 10,
            hits: 7,
            faults: 3,
            evictions: 1,
        };
        assert_eq!(stats.hit_rate(), 0.7);
        assert_eq!(stats.fault_rate(), 0.3);
    }

    #[test]
    fn test_stats_display() {
        let stats = SimulationStats {
            references: 100,
            hits: 80,
            faults: 20,
            evictions: 5,
        };
        let display = format!("{}", stats);

        assert!(display.contains("hits: 80"));
        assert!(display.contains("faults: 20"));
        assert!(display.contains("evictions: 5"));
        assert!(display.contains("80.00%"));
    }
}
