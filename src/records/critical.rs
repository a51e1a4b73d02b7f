//! Critical patient triage queue
//!
//! A binary min-heap over a `Vec`, rooted at index 0 and ordered by ascending
//! severity: the patient with the numerically smallest severity is always at
//! the root and is treated first.
//!
//! [`CriticalQueue::list_all`] exposes the backing array exactly as stored,
//! so listings show heap layout rather than treatment order.

use serde::Serialize;

use crate::core::error::{Access, Container, DeskError};

/// A patient in critical condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriticalEntry {
    pub id: i32,
    pub name: String,
    /// Lower is more urgent
    pub severity: i32,
}

impl CriticalEntry {
    /// Whether `self` must be treated before `other`
    fn outranks(&self, other: &CriticalEntry) -> bool {
        self.severity < other.severity
    }
}

/// Severity-ordered priority queue
#[derive(Debug, Default)]
pub struct CriticalQueue {
    heap: Vec<CriticalEntry>,
}

impl CriticalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a patient and restore heap order
    pub fn add(&mut self, id: i32, name: impl Into<String>, severity: i32) {
        self.heap.push(CriticalEntry {
            id,
            name: name.into(),
            severity,
        });
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the patient with the lowest severity value
    pub fn treat_most_critical(&mut self) -> Result<CriticalEntry, DeskError> {
        if self.heap.is_empty() {
            return Err(DeskError::empty(Container::Critical, Access::Remove));
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let treated = self.heap.pop();
        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        treated.ok_or(DeskError::empty(Container::Critical, Access::Remove))
    }

    /// Entries in storage order (heap layout, not sorted by severity)
    pub fn list_all(&self) -> Result<&[CriticalEntry], DeskError> {
        if self.heap.is_empty() {
            return Err(DeskError::empty(Container::Critical, Access::List));
        }
        Ok(&self.heap)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.heap[idx].outranks(&self.heap[parent]) {
                break;
            }
            self.heap.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut best = idx;

            if left < len && self.heap[left].outranks(&self.heap[best]) {
                best = left;
            }
            if right < len && self.heap[right].outranks(&self.heap[best]) {
                best = right;
            }
            if best == idx {
                break;
            }
            self.heap.swap(idx, best);
            idx = best;
        }
    }
}
