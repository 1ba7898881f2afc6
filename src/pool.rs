use std::cmp::Ordering;

use binary_heap_plus::BinaryHeap;
use compare::Compare;
use log::{debug, trace};

use crate::error::{RcspError, Result};
use crate::label::Label;
use crate::params::Direction;

/// Heap order on the critical resource.
///
/// The heap pops its greatest element, so forward pools compare in reverse
/// to hand out the smallest accumulated value first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CriticalResourceOrder {
    direction: Direction,
}

impl CriticalResourceOrder {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl<'p> Compare<Label<'p>> for CriticalResourceOrder {
    fn compare(&self, a: &Label<'p>, b: &Label<'p>) -> Ordering {
        let (a, b) = (a.critical_resource(), b.critical_resource());
        match self.direction {
            Direction::Forward => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
            Direction::Backward => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }
}

/// Labels of one search direction, ordered by their critical resource.
///
/// Used both for the labels still awaiting extension and, when every label
/// sits at the same vertex, as the efficient set of that vertex.
pub struct LabelPool<'p> {
    direction: Direction,
    heap: BinaryHeap<Label<'p>, CriticalResourceOrder>,
}

impl<'p> LabelPool<'p> {
    pub fn new(direction: Direction) -> Self {
        Self::with_capacity(direction, 0)
    }

    pub fn with_capacity(direction: Direction, capacity: usize) -> Self {
        Self {
            direction,
            heap: BinaryHeap::from_vec_cmp(
                Vec::with_capacity(capacity),
                CriticalResourceOrder::new(direction),
            ),
        }
    }

    pub fn from_labels<I: IntoIterator<Item = Label<'p>>>(direction: Direction, labels: I) -> Self {
        Self {
            direction,
            heap: BinaryHeap::from_vec_cmp(
                labels.into_iter().collect(),
                CriticalResourceOrder::new(direction),
            ),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn push(&mut self, label: Label<'p>) {
        self.heap.push(label);
    }

    /// The label [`get_next_label`] would return next.
    pub fn peek(&self) -> Option<&Label<'p>> {
        self.heap.peek()
    }

    /// Iterates the labels in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Label<'p>> + '_ {
        self.heap.iter()
    }

    pub fn into_vec(self) -> Vec<Label<'p>> {
        self.heap.into_vec()
    }

    /// Inserts `candidate` unless a pooled label dominates it.
    ///
    /// Labels dominated by the candidate are removed first. Returns whether
    /// the candidate was inserted. All pooled labels are expected to sit at
    /// the candidate's vertex.
    pub fn insert_if_efficient(&mut self, candidate: Label<'p>) -> bool {
        let direction = self.direction;
        let elementary = candidate.params().elementary;
        if self
            .heap
            .iter()
            .any(|label| label.dominates(&candidate, direction, elementary))
        {
            trace!("{} label {} rejected as dominated", direction, candidate);
            return false;
        }
        run_dominance_eff(self, &candidate, direction, elementary);
        self.heap.push(candidate);
        true
    }
}

/// Removes and returns the label with the extremal critical resource.
///
/// Forward pools yield the smallest critical resource first, backward pools
/// the largest.
pub fn get_next_label<'p>(pool: &mut LabelPool<'p>) -> Result<Label<'p>> {
    let label = pool.heap.pop().ok_or(RcspError::EmptyPool(pool.direction))?;
    if pool.heap.is_empty() {
        debug!("{} pool drained", pool.direction);
    }
    Ok(label)
}

/// Removes every label of `pool` that `candidate` dominates.
///
/// `elementary` selects whether the unreachable-set rule applies for this
/// sweep; two-cycle elimination follows the candidate's params. Labels equal
/// to the candidate are never dominated and stay in the pool. Returns the
/// number of labels removed.
pub fn run_dominance_eff(
    pool: &mut LabelPool<'_>,
    candidate: &Label<'_>,
    direction: Direction,
    elementary: bool,
) -> usize {
    let order = CriticalResourceOrder::new(pool.direction);
    let mut labels = std::mem::replace(&mut pool.heap, BinaryHeap::from_vec_cmp(Vec::new(), order)).into_vec();

    let before = labels.len();
    labels.retain(|label| !candidate.dominates(label, direction, elementary));
    let removed = before - labels.len();

    pool.heap = BinaryHeap::from_vec_cmp(labels, order);
    if removed > 0 {
        trace!("{} labels dominated by {} ({} pool)", removed, candidate, pool.direction);
    }
    removed
}
