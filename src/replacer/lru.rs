//! LRU (Least-Recently-Used) replacement policy.
//!
//! Recency is kept in a doubly-linked list threaded through a slot vector,
//! with a hash map from page to slot:
//!
//! ```text
//!   map: page → slot          nodes: Vec<Node>
//!                             ┌──────┐   ┌──────┐   ┌──────┐
//!   head (LRU) ─────────────▶ │  7   │ ⇄ │  0   │ ⇄ │  1   │ ◀── tail (MRU)
//!                             └──────┘   └──────┘   └──────┘
//! ```
//!
//! Hits unlink the node and relink it at the tail; faults on a full set
//! overwrite the head node in place. Both are O(1). The slot vector never
//! grows past `capacity`, so no free list is needed.

use std::collections::HashMap;
use std::hash::Hash;

use super::{Access, Replacer};

#[derive(Debug, Clone)]
struct Node<P> {
    page: P,
    prev: Option<usize>,
    next: Option<usize>,
}

/// An LRU eviction policy.
///
/// A reference counts as a use whether it hits or loads the page, so a
/// freshly loaded page is most recently used.
#[derive(Debug, Clone)]
pub struct LruReplacer<P> {
    nodes: Vec<Node<P>>,

    /// Page → index into `nodes`.
    slots: HashMap<P, usize>,

    /// Least recently used slot.
    head: Option<usize>,

    /// Most recently used slot.
    tail: Option<usize>,

    capacity: usize,
}

impl<P: Clone + Eq + Hash> LruReplacer<P> {
    /// Create an empty LRU replacer with room for `capacity` pages.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            nodes: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
            head: None,
            tail: None,
            capacity,
        }
    }

    fn detach(&mut self, slot: usize) {
        let (prev, next) = {
            let node = &self.nodes[slot];
            (node.prev, node.next)
        };

        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }

        let node = &mut self.nodes[slot];
        node.prev = None;
        node.next = None;
    }

    fn attach_back(&mut self, slot: usize) {
        let old_tail = self.tail;
        {
            let node = &mut self.nodes[slot];
            node.prev = old_tail;
            node.next = None;
        }
        match old_tail {
            Some(old_tail) => self.nodes[old_tail].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
    }

    fn touch(&mut self, slot: usize) {
        if self.tail != Some(slot) {
            self.detach(slot);
            self.attach_back(slot);
        }
    }
}

impl<P: Clone + Eq + Hash> Replacer<P> for LruReplacer<P> {
    fn access(&mut self, page: &P) -> Access<P> {
        if let Some(&slot) = self.slots.get(page) {
            self.touch(slot);
            return Access::Hit;
        }

        let full = self.nodes.len() >= self.capacity;
        let evicted = match (self.head, full) {
            (Some(victim), true) => {
                self.detach(victim);
                let old = std::mem::replace(&mut self.nodes[victim].page, page.clone());
                self.slots.remove(&old);
                self.attach_back(victim);
                self.slots.insert(page.clone(), victim);
                Some(old)
            }
            _ => {
                let slot = self.nodes.len();
                self.nodes.push(Node {
                    page: page.clone(),
                    prev: None,
                    next: None,
                });
                self.attach_back(slot);
                self.slots.insert(page.clone(), slot);
                None
            }
        };

        Access::Fault { evicted }
    }

    fn contains(&self, page: &P) -> bool {
        self.slots.contains_key(page)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn frames(&self) -> Vec<P> {
        let mut frames = Vec::with_capacity(self.nodes.len());
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let node = &self.nodes[slot];
            frames.push(node.page.clone());
            cursor = node.next;
        }
        frames
    }

    fn reset(&mut self) {
        self.nodes.clear();
        self.slots.clear();
        self.head = None;
        self.tail = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut replacer = LruReplacer::new(3);

        replacer.access(&0);
        replacer.access(&1);
        replacer.access(&2);

        // Touch 0 so 1 becomes LRU
        assert_eq!(replacer.access(&0), Access::Hit);
        assert_eq!(replacer.frames(), vec![1, 2, 0]);

        assert_eq!(replacer.access(&3), Access::Fault { evicted: Some(1) });
        assert_eq!(replacer.frames(), vec![2, 0, 3]);
    }

    #[test]
    fn test_lru_hit_on_mru_is_noop() {
        let mut replacer = LruReplacer::new(2);
        replacer.access(&1);
        replacer.access(&2);

        assert_eq!(replacer.access(&2), Access::Hit);
        assert_eq!(replacer.frames(), vec![1, 2]);
    }

    #[test]
    fn test_lru_touch_head_relinks() {
        let mut replacer = LruReplacer::new(3);
        for page in [1, 2, 3] {
            replacer.access(&page);
        }

        replacer.access(&1);
        assert_eq!(replacer.frames(), vec![2, 3, 1]);
        replacer.access(&3);
        assert_eq!(replacer.frames(), vec![2, 1, 3]);

        assert_eq!(replacer.access(&4), Access::Fault { evicted: Some(2) });
        assert_eq!(replacer.access(&5), Access::Fault { evicted: Some(1) });
        assert_eq!(replacer.frames(), vec![3, 4, 5]);
    }

    #[test]
    fn test_lru_single_frame() {
        let mut replacer = LruReplacer::new(1);
        assert!(replacer.process(&"x"));
        assert!(!replacer.process(&"x"));
        assert_eq!(replacer.access(&"y"), Access::Fault { evicted: Some("x") });
        assert_eq!(replacer.frames(), vec!["y"]);
        assert_eq!(replacer.len(), 1);
    }

    #[test]
    fn test_lru_slots_stay_consistent_after_many_evictions() {
        let mut replacer = LruReplacer::new(4);
        for page in 0..100u32 {
            replacer.access(&(page % 7));
            assert!(replacer.len() <= 4);
            for resident in replacer.frames() {
                assert!(replacer.contains(&resident));
            }
        }
        assert_eq!(replacer.slots.len(), replacer.nodes.len());
    }

    #[test]
    fn test_lru_reset() {
        let mut replacer = LruReplacer::new(2);
        replacer.access(&1);
        replacer.access(&2);
        replacer.reset();

        assert!(replacer.is_empty());
        assert!(replacer.frames().is_empty());
        assert!(replacer.process(&2));
        assert_eq!(replacer.frames(), vec![2]);
    }

    #[test]
    #[should_panic(expected = "capacity must be > 0")]
    fn test_lru_zero_capacity_panics() {
        let _ = LruReplacer::<u32>::new(0);
    }
}
