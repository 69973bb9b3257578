//! Per-reference trace records.

use std::fmt;

use serde::Serialize;

/// Snapshot of the simulation state after one reference was processed.
///
/// Records own an independent copy of the frame set, so later steps never
/// change what an earlier record shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StepRecord<P> {
    /// 1-based position in the reference sequence.
    pub step: usize,

    /// The page referenced at this step.
    pub page: P,

    /// Resident pages after this step, in the policy's logical order.
    pub frames: Vec<P>,

    /// True if the page was not resident.
    pub fault: bool,

    /// Page displaced by this step, if the frame set was full.
    pub evicted: Option<P>,

    /// Faults so far, including this step.
    pub fault_count: usize,
}

impl<P> StepRecord<P> {
    /// True if this reference hit a resident page.
    #[inline]
    pub fn is_hit(&self) -> bool {
        !self.fault
    }
}

/// Renders one trace line, e.g.
/// `Step 4: Page 2 - Page Fault! Frames: [0, 1, 2] | Cumulative Faults: 4`.
impl<P: fmt::Display> fmt::Display for StepRecord<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: Page {} - ", self.step, self.page)?;
        if self.fault {
            write!(f, "Page Fault! ")?;
        } else {
            write!(f, "No Fault. ")?;
        }
        write!(f, "Frames: [")?;
        for (i, page) in self.frames.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", page)?;
        }
        write!(f, "] | Cumulative Faults: {}", self.fault_count)
    }
}
