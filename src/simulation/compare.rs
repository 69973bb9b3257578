//! Side-by-side runs of several policies over the same references.

use std::fmt;
use std::hash::Hash;
use std::thread;

use parking_lot::Mutex;
use tracing::debug;

use super::{SimulationResult, Simulator};
use crate::common::{Error, Result, SimulationConfig};
use crate::replacer::Policy;

/// Run every policy in `policies` over `references`, one thread each.
///
/// Each run gets its own engine; nothing is shared but the read-only
/// reference slice. Results come back in the order of `policies` and are
/// identical to what [`simulate`](super::simulate) returns for each policy.
///
/// # Errors
/// `Error::InvalidConfiguration` if `num_frames` is 0, `references` is
/// empty, or `policies` is empty. Checked before any thread starts.
///
/// # Example
/// ```
/// use pagesim::{compare, Policy};
///
/// let results = compare(&[1, 2, 1, 3], 2, &Policy::ALL).unwrap();
/// assert_eq!(results[0].policy, Policy::Fifo);
/// assert_eq!(results[1].policy, Policy::Lru);
/// ```
pub fn compare<P>(
    references: &[P],
    num_frames: usize,
    policies: &[Policy],
) -> Result<Vec<SimulationResult<P>>>
where
    P: Clone + Eq + Hash + fmt::Debug + Send + Sync,
{
    if policies.is_empty() {
        return Err(Error::invalid_config("no policies to compare"));
    }
    if references.is_empty() {
        return Err(Error::invalid_config("reference sequence is empty"));
    }

    let simulators = policies
        .iter()
        .map(|&policy| Simulator::new(SimulationConfig::new(num_frames, policy)))
        .collect::<Result<Vec<_>>>()?;

    debug!(policies = policies.len(), num_frames, "comparing policies");

    let slots: Mutex<Vec<Option<Result<SimulationResult<P>>>>> =
        Mutex::new((0..simulators.len()).map(|_| None).collect());

    thread::scope(|scope| {
        for (index, simulator) in simulators.iter().enumerate() {
            let slots = &slots;
            scope.spawn(move || {
                let outcome = simulator.run(references);
                slots.lock()[index] = Some(outcome);
            });
        }
    });

    slots
        .into_inner()
        .into_iter()
        .map(|slot| {
            slot.unwrap_or_else(|| Err(Error::invalid_config("policy run did not complete")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::SAMPLE_REFERENCES;
    use crate::simulation::simulate;

    #[test]
    fn test_compare_matches_sequential_runs() {
        let results = compare(&SAMPLE_REFERENCES, 3, &Policy::ALL).unwrap();
        assert_eq!(results.len(), 2);

        for (result, policy) in results.iter().zip(Policy::ALL) {
            assert_eq!(result.policy, policy);
            assert_eq!(*result, simulate(&SAMPLE_REFERENCES, 3, policy).unwrap());
        }
    }

    #[test]
    fn test_compare_preserves_order_and_duplicates() {
        let policies = [Policy::Lru, Policy::Fifo, Policy::Lru];
        let results = compare(&[1, 2, 3, 1], 2, &policies).unwrap();

        let got: Vec<Policy> = results.iter().map(|r| r.policy).collect();
        assert_eq!(got, policies);
        assert_eq!(results[0], results[2]);
    }

    #[test]
    fn test_compare_rejects_bad_input() {
        assert!(matches!(
            compare(&[1, 2], 0, &Policy::ALL),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            compare::<u32>(&[], 3, &Policy::ALL),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            compare(&[1, 2], 3, &[]),
            Err(Error::InvalidConfiguration(_))
        ));
    }
}
