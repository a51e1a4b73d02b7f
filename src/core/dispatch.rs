//! Command dispatcher - routes one typed command to one container operation

use tracing::{debug, info};

use crate::core::command::Command;
use crate::core::error::DeskError;
use crate::records::{
    CriticalEntry, CriticalQueue, EmergencyEntry, EmergencyQueue, PatientRecord, PatientRegistry,
    TreatmentEntry, TreatmentHistory,
};

/// What a successfully executed command produced
///
/// Listings borrow from the dispatcher; removed entries are handed over by
/// value since their container no longer owns them.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<'a> {
    PatientAdded,
    Patients(Vec<&'a PatientRecord>),
    EmergencyAdded,
    EmergencyTreated(EmergencyEntry),
    Emergencies(Vec<&'a EmergencyEntry>),
    TreatmentAdded,
    TreatmentUndone(TreatmentEntry),
    Treatments(Vec<&'a TreatmentEntry>),
    CriticalAdded { severity: i32 },
    CriticalTreated(CriticalEntry),
    Criticals(Vec<&'a CriticalEntry>),
    Exit,
}

/// Owns all four record containers for the lifetime of a session
#[derive(Debug, Default)]
pub struct Dispatcher {
    patients: PatientRegistry,
    emergency: EmergencyQueue,
    treatments: TreatmentHistory,
    critical: CriticalQueue,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute exactly one command
    ///
    /// Empty containers come back as [`DeskError::Empty`]; nothing is
    /// mutated in that case.
    pub fn execute(&mut self, command: Command) -> Result<Outcome<'_>, DeskError> {
        debug!(choice = command.choice().code(), "executing command");

        match command {
            Command::AddPatient {
                id,
                name,
                age,
                condition,
            } => {
                self.patients.add(id, name, age, condition);
                info!(id, total = self.patients.len(), "patient added");
                Ok(Outcome::PatientAdded)
            }
            Command::ListPatients => {
                let records = self.patients.list_all()?;
                Ok(Outcome::Patients(records.iter().collect()))
            }
            Command::AddEmergency {
                id,
                name,
                condition,
            } => {
                self.emergency.enqueue(id, name, condition);
                info!(id, waiting = self.emergency.len(), "emergency patient queued");
                Ok(Outcome::EmergencyAdded)
            }
            Command::TreatEmergency => {
                let entry = self.emergency.dequeue()?;
                info!(id = entry.id, remaining = self.emergency.len(), "emergency patient treated");
                Ok(Outcome::EmergencyTreated(entry))
            }
            Command::ListEmergency => Ok(Outcome::Emergencies(self.emergency.list_all()?)),
            Command::AddTreatment {
                patient_id,
                details,
            } => {
                self.treatments.push(patient_id, details);
                info!(patient_id, depth = self.treatments.len(), "treatment recorded");
                Ok(Outcome::TreatmentAdded)
            }
            Command::UndoTreatment => {
                let entry = self.treatments.pop()?;
                info!(
                    patient_id = entry.patient_id,
                    remaining = self.treatments.len(),
                    "treatment undone"
                );
                Ok(Outcome::TreatmentUndone(entry))
            }
            Command::ListTreatments => Ok(Outcome::Treatments(self.treatments.list_all()?)),
            Command::AddCritical { id, name, severity } => {
                self.critical.add(id, name, severity);
                info!(id, severity, waiting = self.critical.len(), "critical patient added");
                Ok(Outcome::CriticalAdded { severity })
            }
            Command::TreatCritical => {
                let entry = self.critical.treat_most_critical()?;
                info!(
                    id = entry.id,
                    severity = entry.severity,
                    remaining = self.critical.len(),
                    "critical patient treated"
                );
                Ok(Outcome::CriticalTreated(entry))
            }
            Command::ListCritical => {
                let entries = self.critical.list_all()?;
                Ok(Outcome::Criticals(entries.iter().collect()))
            }
            Command::Exit => Ok(Outcome::Exit),
        }
    }

    pub fn patients(&self) -> &PatientRegistry {
        &self.patients
    }

    pub fn emergency(&self) -> &EmergencyQueue {
        &self.emergency
    }

    pub fn treatments(&self) -> &TreatmentHistory {
        &self.treatments
    }

    pub fn critical(&self) -> &CriticalQueue {
        &self.critical
    }
}
