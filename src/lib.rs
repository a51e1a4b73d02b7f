//! Clinic Desk
//!
//! An in-memory desk for a small clinic: a patient registry, an emergency
//! intake queue, an undoable treatment history and a severity-ordered
//! critical queue, driven from a numbered text menu.

pub mod cli;
pub mod core;
pub mod records;
