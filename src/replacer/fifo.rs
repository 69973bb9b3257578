//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use super::{Access, Replacer};

/// A FIFO eviction policy.
///
/// Evicts pages in the order they were loaded. Re-referencing a resident
/// page does not change its position.
#[derive(Debug, Clone)]
pub struct FifoReplacer<P> {
    /// Resident pages in load order (front = oldest).
    queue: VecDeque<P>,

    /// Set for O(1) membership check.
    resident: HashSet<P>,

    capacity: usize,
}

impl<P: Clone + Eq + Hash> FifoReplacer<P> {
    /// Create an empty FIFO replacer with room for `capacity` pages.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            queue: VecDeque::with_capacity(capacity),
            resident: HashSet::with_capacity(capacity),
            capacity,
        }
    }
}

impl<P: Clone + Eq + Hash> Replacer<P> for FifoReplacer<P> {
    fn access(&mut self, page: &P) -> Access<P> {
        if self.resident.contains(page) {
            return Access::Hit;
        }

        let evicted = if self.queue.len() < self.capacity {
            None
        } else {
            let victim = self.queue.pop_front();
            if let Some(victim) = &victim {
                self.resident.remove(victim);
            }
            victim
        };

        self.queue.push_back(page.clone());
        self.resident.insert(page.clone());

        Access::Fault { evicted }
    }

    fn contains(&self, page: &P) -> bool {
        self.resident.contains(page)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn frames(&self) -> Vec<P> {
        self.queue.iter().cloned().collect()
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.resident.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_fills_then_evicts_in_order() {
        let mut replacer = FifoReplacer::new(3);

        assert_eq!(replacer.access(&0), Access::Fault { evicted: None });
        assert_eq!(replacer.access(&1), Access::Fault { evicted: None });
        assert_eq!(replacer.access(&2), Access::Fault { evicted: None });
        assert_eq!(replacer.len(), 3);

        // Should evict in FIFO order
        assert_eq!(replacer.access(&3), Access::Fault { evicted: Some(0) });
        assert_eq!(replacer.access(&4), Access::Fault { evicted: Some(1) });
        assert_eq!(replacer.frames(), vec![2, 3, 4]);
    }

    #[test]
    fn test_fifo_hit_does_not_mutate() {
        let mut replacer = FifoReplacer::new(2);
        replacer.access(&"a");
        replacer.access(&"b");

        assert_eq!(replacer.access(&"a"), Access::Hit);
        assert_eq!(replacer.frames(), vec!["a", "b"]);
    }

    #[test]
    fn test_fifo_reaccess_no_reorder() {
        let mut replacer = FifoReplacer::new(2);

        replacer.access(&0);
        replacer.access(&1);
        replacer.access(&0); // Access again - should NOT reorder

        // FIFO: page 0 was loaded first, should be evicted first
        assert_eq!(replacer.access(&2), Access::Fault { evicted: Some(0) });
        assert!(!replacer.contains(&0));
        assert!(replacer.contains(&1));
    }

    #[test]
    fn test_fifo_single_frame() {
        let mut replacer = FifoReplacer::new(1);
        assert!(replacer.process(&5));
        assert!(!replacer.process(&5));
        assert_eq!(replacer.access(&6), Access::Fault { evicted: Some(5) });
        assert_eq!(replacer.frames(), vec![6]);
    }

    #[test]
    fn test_fifo_reset() {
        let mut replacer = FifoReplacer::new(2);
        replacer.access(&1);
        replacer.reset();

        assert!(replacer.is_empty());
        assert!(!replacer.contains(&1));
        assert!(replacer.process(&1));
    }

    #[test]
    #[should_panic(expected = "capacity must be > 0")]
    fn test_fifo_zero_capacity_panics() {
        let _ = FifoReplacer::<u32>::new(0);
    }
}
