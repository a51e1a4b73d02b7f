//! Treatment history, used as an undo stack

use serde::Serialize;

use crate::core::error::{Access, Container, DeskError};

/// One recorded treatment
///
/// `patient_id` is a free-form tag; it is not checked against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreatmentEntry {
    pub patient_id: i32,
    pub details: String,
}

/// LIFO stack of treatments, most recent on top
#[derive(Debug, Default)]
pub struct TreatmentHistory {
    // top of the stack is the end of the vec
    entries: Vec<TreatmentEntry>,
}

impl TreatmentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, patient_id: i32, details: impl Into<String>) {
        self.entries.push(TreatmentEntry {
            patient_id,
            details: details.into(),
        });
    }

    /// Undo the most recent treatment
    pub fn pop(&mut self) -> Result<TreatmentEntry, DeskError> {
        self.entries
            .pop()
            .ok_or(DeskError::empty(Container::Treatments, Access::Remove))
    }

    /// Entries from top to bottom (most recent first)
    pub fn list_all(&self) -> Result<Vec<&TreatmentEntry>, DeskError> {
        if self.entries.is_empty() {
            return Err(DeskError::empty(Container::Treatments, Access::List));
        }
        Ok(self.entries.iter().rev().collect())
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
    fn test_pop_undoes_latest() {
        let mut history = TreatmentHistory::new();
        history.push(1, "splint");
        history.push(1, "IV");

        let undone = history.pop().unwrap();
        assert_eq!(undone.patient_id, 1);
        assert_eq!(undone.details, "IV");

        let remaining = history.list_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].details, "splint");
    }

    #[test]
    fn test_list_is_most_recent_first() {
        let mut history = TreatmentHistory::new();
        history.push(1, "first");
        history.push(2, "second");
        history.push(3, "third");

        let details: Vec<&str> = history
            .list_all()
            .unwrap()
            .iter()
            .map(|t| t.details.as_str())
            .collect();
        assert_eq!(details, ["third", "second", "first"]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_pop_on_empty_history() {
        let mut history = TreatmentHistory::new();
        assert_eq!(
            history.pop().unwrap_err(),
            DeskError::empty(Container::Treatments, Access::Remove)
        );
        assert_eq!(
            history.list_all().unwrap_err(),
            DeskError::empty(Container::Treatments, Access::List)
        );
    }

    #[test]
    fn test_lifo_order_for_random_pushes() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let n = rng.random_range(1..50);
            let ids: Vec<i32> = (0..n).map(|_| rng.random_range(0..1000)).collect();

            let mut history = TreatmentHistory::new();
            for (i, id) in ids.iter().enumerate() {
                history.push(*id, format!("step {}", i));
            }

            let popped: Vec<TreatmentEntry> = (0..n).map(|_| history.pop().unwrap()).collect();
            for (k, entry) in popped.iter().enumerate() {
                let i = n - 1 - k;
                assert_eq!(entry.patient_id, ids[i]);
                assert_eq!(entry.details, format!("step {}", i));
            }
            assert!(history.is_empty());
        }
    }
}
