//! Emergency intake queue (first in, first out)

use serde::Serialize;
use std::collections::VecDeque;

use crate::core::error::{Access, Container, DeskError};

/// A patient waiting in the emergency room
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmergencyEntry {
    pub id: i32,
    pub name: String,
    pub condition: String,
}

/// FIFO queue of emergency arrivals
#[derive(Debug, Default)]
pub struct EmergencyQueue {
    entries: VecDeque<EmergencyEntry>,
}

impl EmergencyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arrival at the tail of the queue
    pub fn enqueue(&mut self, id: i32, name: impl Into<String>, condition: impl Into<String>) {
        self.entries.push_back(EmergencyEntry {
            id,
            name: name.into(),
            condition: condition.into(),
        });
    }

    /// Take the longest-waiting patient off the head of the queue
    pub fn dequeue(&mut self) -> Result<EmergencyEntry, DeskError> {
        self.entries
            .pop_front()
            .ok_or(DeskError::empty(Container::Emergency, Access::Remove))
    }

    /// Entries from head to tail
    pub fn list_all(&self) -> Result<Vec<&EmergencyEntry>, DeskError> {
        if self.entries.is_empty() {
            return Err(DeskError::empty(Container::Emergency, Access::List));
        }
        Ok(self.entries.iter().collect())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_dequeue_then_list_remaining() {
        let mut queue = EmergencyQueue::new();
        queue.enqueue(1, "A", "burn");
        queue.enqueue(2, "B", "fracture");

        let treated = queue.dequeue().unwrap();
        assert_eq!(treated.name, "A");

        let waiting = queue.list_all().unwrap();
        assert_eq!(waiting.len(), 1);
        assert_eq!(waiting[0].name, "B");
    }

    #[test]
    fn test_dequeue_on_empty_queue() {
        let mut queue = EmergencyQueue::new();
        assert_eq!(
            queue.dequeue().unwrap_err(),
            DeskError::empty(Container::Emergency, Access::Remove)
        );
        assert_eq!(
            queue.list_all().unwrap_err(),
            DeskError::empty(Container::Emergency, Access::List)
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_is_reusable_after_draining() {
        let mut queue = EmergencyQueue::new();
        queue.enqueue(1, "A", "burn");
        queue.dequeue().unwrap();
        assert!(queue.dequeue().is_err());

        queue.enqueue(2, "B", "fracture");
        assert_eq!(queue.dequeue().unwrap().id, 2);
    }

    #[test]
    fn test_fifo_order_for_random_arrivals() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let n = rng.random_range(1..50);
            let ids: Vec<i32> = (0..n).map(|_| rng.random_range(-100..100)).collect();

            let mut queue = EmergencyQueue::new();
            for (i, id) in ids.iter().enumerate() {
                queue.enqueue(*id, format!("patient-{}", i), "unknown");
            }

            let drained: Vec<(i32, String)> = (0..n)
                .map(|_| queue.dequeue().map(|e| (e.id, e.name)).unwrap())
                .collect();
            let expected: Vec<(i32, String)> = ids
                .iter()
                .enumerate()
                .map(|(i, id)| (*id, format!("patient-{}", i)))
                .collect();
            assert_eq!(drained, expected);
            assert!(queue.is_empty());
        }
    }
}
