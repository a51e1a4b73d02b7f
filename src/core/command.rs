//! Menu choices and fully-typed commands
//!
//! A [`MenuChoice`] is what the operator picks from the menu. Once the
//! fields it needs have been collected it becomes a [`Command`], which is
//! what the [`Dispatcher`](crate::core::Dispatcher) executes.

use crate::core::error::DeskError;

/// The numbered entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    Exit,
    AddPatient,
    ListPatients,
    AddEmergency,
    TreatEmergency,
    ListEmergency,
    AddTreatment,
    UndoTreatment,
    ListTreatments,
    AddCritical,
    TreatCritical,
    ListCritical,
}

impl MenuChoice {
    /// Every choice in menu order, exit last
    pub const ALL: [MenuChoice; 12] = [
        MenuChoice::AddPatient,
        MenuChoice::ListPatients,
        MenuChoice::AddEmergency,
        MenuChoice::TreatEmergency,
        MenuChoice::ListEmergency,
        MenuChoice::AddTreatment,
        MenuChoice::UndoTreatment,
        MenuChoice::ListTreatments,
        MenuChoice::AddCritical,
        MenuChoice::TreatCritical,
        MenuChoice::ListCritical,
        MenuChoice::Exit,
    ];

    pub fn code(&self) -> i64 {
        match self {
            MenuChoice::Exit => 0,
            MenuChoice::AddPatient => 1,
            MenuChoice::ListPatients => 2,
            MenuChoice::AddEmergency => 3,
            MenuChoice::TreatEmergency => 4,
            MenuChoice::ListEmergency => 5,
            MenuChoice::AddTreatment => 6,
            MenuChoice::UndoTreatment => 7,
            MenuChoice::ListTreatments => 8,
            MenuChoice::AddCritical => 9,
            MenuChoice::TreatCritical => 10,
            MenuChoice::ListCritical => 11,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::AddPatient => "Add New Patient Record",
            MenuChoice::ListPatients => "Display All Patients",
            MenuChoice::AddEmergency => "Add Emergency Patient",
            MenuChoice::TreatEmergency => "Treat Emergency Patient",
            MenuChoice::ListEmergency => "Show Emergency Queue",
            MenuChoice::AddTreatment => "Add Treatment to History",
            MenuChoice::UndoTreatment => "Undo Last Treatment",
            MenuChoice::ListTreatments => "Show Treatment History",
            MenuChoice::AddCritical => "Add Critical Patient (with Severity)",
            MenuChoice::TreatCritical => "Treat Critical Patient",
            MenuChoice::ListCritical => "Show Critical Patient Queue",
        }
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = DeskError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        MenuChoice::ALL
            .iter()
            .copied()
            .find(|choice| choice.code() == code)
            .ok_or(DeskError::InvalidCommand(code))
    }
}

impl std::fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.code(), self.label())
    }
}

/// A single typed input the menu asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Age,
    Condition,
    Details,
    Severity,
}

impl Field {
    pub fn prompt(&self) -> &'static str {
        match self {
            Field::Id => "Enter Patient ID",
            Field::Name => "Enter Name",
            Field::Age => "Enter Age",
            Field::Condition => "Enter Condition",
            Field::Details => "Enter Treatment Details",
            Field::Severity => "Enter Severity (1=most critical)",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "patient id",
            Field::Name => "name",
            Field::Age => "age",
            Field::Condition => "condition",
            Field::Details => "treatment details",
            Field::Severity => "severity",
        }
    }
}

/// A menu choice with all of its fields filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddPatient {
        id: i32,
        name: String,
        age: i32,
        condition: String,
    },
    ListPatients,
    AddEmergency {
        id: i32,
        name: String,
        condition: String,
    },
    TreatEmergency,
    ListEmergency,
    AddTreatment {
        patient_id: i32,
        details: String,
    },
    UndoTreatment,
    ListTreatments,
    AddCritical {
        id: i32,
        name: String,
        severity: i32,
    },
    TreatCritical,
    ListCritical,
    Exit,
}

impl Command {
    pub fn choice(&self) -> MenuChoice {
        match self {
            Command::AddPatient { .. } => MenuChoice::AddPatient,
            Command::ListPatients => MenuChoice::ListPatients,
            Command::AddEmergency { .. } => MenuChoice::AddEmergency,
            Command::TreatEmergency => MenuChoice::TreatEmergency,
            Command::ListEmergency => MenuChoice::ListEmergency,
            Command::AddTreatment { .. } => MenuChoice::AddTreatment,
            Command::UndoTreatment => MenuChoice::UndoTreatment,
            Command::ListTreatments => MenuChoice::ListTreatments,
            Command::AddCritical { .. } => MenuChoice::AddCritical,
            Command::TreatCritical => MenuChoice::TreatCritical,
            Command::ListCritical => MenuChoice::ListCritical,
            Command::Exit => MenuChoice::Exit,
        }
    }
}
