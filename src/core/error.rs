//! Error taxonomy for the desk
//!
//! Everything except `Io` is informational: the session reports it and keeps
//! serving commands. `EndOfInput` ends the session the same way choice 0 does.

use miette::Diagnostic;
use thiserror::Error;

/// Which record container an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    Patients,
    Emergency,
    Treatments,
    Critical,
}

impl Container {
    pub fn as_str(&self) -> &'static str {
        match self {
            Container::Patients => "patients",
            Container::Emergency => "emergency",
            Container::Treatments => "treatments",
            Container::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the empty container was being accessed
///
/// The operator notice differs between "take the next one" and "show me
/// everything", so the error keeps track of which one failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    Remove,
    List,
}

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum DeskError {
    #[error("{}", empty_notice(.container, .access))]
    #[diagnostic(code(clinic_desk::empty))]
    Empty { container: Container, access: Access },

    #[error("Invalid choice! Please try again.")]
    #[diagnostic(
        code(clinic_desk::invalid_command),
        help("choose a number between 0 and 11")
    )]
    InvalidCommand(i64),

    #[error("Invalid {field}: '{value}' is not a whole number")]
    #[diagnostic(code(clinic_desk::invalid_field))]
    InvalidField { field: &'static str, value: String },

    #[error("End of input")]
    #[diagnostic(code(clinic_desk::end_of_input))]
    EndOfInput,

    #[error("Input error: {0}")]
    #[diagnostic(code(clinic_desk::io))]
    Io(String),
}

impl DeskError {
    pub fn empty(container: Container, access: Access) -> Self {
        DeskError::Empty { container, access }
    }

    /// Whether the session should stop after this error
    pub fn is_fatal(&self) -> bool {
        matches!(self, DeskError::Io(_))
    }
}

impl From<std::io::Error> for DeskError {
    fn from(e: std::io::Error) -> Self {
        DeskError::Io(e.to_string())
    }
}

fn empty_notice(container: &Container, access: &Access) -> &'static str {
    match (*container, *access) {
        (Container::Patients, _) => "No patients in the system.",
        (Container::Emergency, Access::Remove) => "No emergency patients in queue.",
        (Container::Emergency, Access::List) => "Emergency queue is empty.",
        (Container::Treatments, Access::Remove) => "No treatments to undo.",
        (Container::Treatments, Access::List) => "No treatment history.",
        (Container::Critical, Access::Remove) => "No critical patients to treat.",
        (Container::Critical, Access::List) => "No critical patients.",
    }
}
