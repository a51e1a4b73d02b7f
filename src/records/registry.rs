//! General patient registry, kept in insertion order

use serde::Serialize;

use crate::core::error::{Access, Container, DeskError};

/// A general patient record
///
/// `id` is a label, not a key: the registry accepts duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientRecord {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub condition: String,
}

/// Append-only list of patient records
#[derive(Debug, Default)]
pub struct PatientRegistry {
    records: Vec<PatientRecord>,
}

impl PatientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the registry
    pub fn add(
        &mut self,
        id: i32,
        name: impl Into<String>,
        age: i32,
        condition: impl Into<String>,
    ) {
        self.records.push(PatientRecord {
            id,
            name: name.into(),
            age,
            condition: condition.into(),
        });
    }

    /// All records, oldest first
    pub fn list_all(&self) -> Result<&[PatientRecord], DeskError> {
        if self.records.is_empty() {
            return Err(DeskError::empty(Container::Patients, Access::List));
        }
        Ok(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut registry = PatientRegistry::new();
        registry.add(1, "Alice", 30, "flu");
        registry.add(2, "Bob", 40, "cold");

        let names: Vec<&str> = registry
            .list_all()
            .unwrap()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Alice", "Bob"]);
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let mut registry = PatientRegistry::new();
        registry.add(7, "Alice", 30, "flu");
        registry.add(7, "Alice", 30, "flu");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_no_validation_on_fields() {
        let mut registry = PatientRegistry::new();
        registry.add(-1, "", -5, "");
        let records = registry.list_all().unwrap();
        assert_eq!(records[0].age, -5);
        assert!(records[0].name.is_empty());
    }

    #[test]
    fn test_empty_registry_signals_empty() {
        let registry = PatientRegistry::new();
        assert_eq!(
            registry.list_all().unwrap_err(),
            DeskError::empty(Container::Patients, Access::List)
        );
        assert!(registry.is_empty());
    }
}
