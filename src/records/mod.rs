//! Record containers - one owned container per clinical workflow
//!
//! The containers are independent of each other; they are composed only by
//! the [`Dispatcher`](crate::core::Dispatcher).

pub mod critical;
pub mod emergency;
pub mod registry;
pub mod treatment;

pub use critical::{CriticalEntry, CriticalQueue};
pub use emergency::{EmergencyEntry, EmergencyQueue};
pub use registry::{PatientRecord, PatientRegistry};
pub use treatment::{TreatmentEntry, TreatmentHistory};
