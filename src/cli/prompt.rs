//! Field collection for menu commands
//!
//! Two sources are provided: [`TerminalPrompter`] for an interactive TTY
//! (dialoguer, re-prompts on typos) and [`LinePrompter`] for piped input or
//! script files, read one line per value.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{BufRead, Write};
use std::num::{IntErrorKind, ParseIntError};

use crate::core::command::{Command, Field, MenuChoice};
use crate::core::error::DeskError;

/// Something that can answer the menu's questions
pub trait FieldSource {
    /// The raw menu choice; `DeskError::EndOfInput` when input is exhausted
    fn choice(&mut self) -> Result<i64, DeskError>;

    fn integer(&mut self, field: Field) -> Result<i32, DeskError>;

    fn text(&mut self, field: Field) -> Result<String, DeskError>;
}

/// Ask for every field `choice` needs and build the typed command
///
/// A field that fails to parse does not stop collection: the remaining
/// fields are still read so their lines are not mistaken for menu choices,
/// then the first bad field is reported.
pub fn read_command<S: FieldSource + ?Sized>(
    source: &mut S,
    choice: MenuChoice,
) -> Result<Command, DeskError> {
    let mut fields = FieldReader {
        source,
        rejected: None,
    };
    let command = match choice {
        MenuChoice::Exit => Command::Exit,
        MenuChoice::AddPatient => Command::AddPatient {
            id: fields.integer(Field::Id)?,
            name: fields.text(Field::Name)?,
            age: fields.integer(Field::Age)?,
            condition: fields.text(Field::Condition)?,
        },
        MenuChoice::ListPatients => Command::ListPatients,
        MenuChoice::AddEmergency => Command::AddEmergency {
            id: fields.integer(Field::Id)?,
            name: fields.text(Field::Name)?,
            condition: fields.text(Field::Condition)?,
        },
        MenuChoice::TreatEmergency => Command::TreatEmergency,
        MenuChoice::ListEmergency => Command::ListEmergency,
        MenuChoice::AddTreatment => Command::AddTreatment {
            patient_id: fields.integer(Field::Id)?,
            details: fields.text(Field::Details)?,
        },
        MenuChoice::UndoTreatment => Command::UndoTreatment,
        MenuChoice::ListTreatments => Command::ListTreatments,
        MenuChoice::AddCritical => Command::AddCritical {
            id: fields.integer(Field::Id)?,
            name: fields.text(Field::Name)?,
            severity: fields.integer(Field::Severity)?,
        },
        MenuChoice::TreatCritical => Command::TreatCritical,
        MenuChoice::ListCritical => Command::ListCritical,
    };

    match fields.rejected {
        Some(e) => Err(e),
        None => Ok(command),
    }
}

/// Wraps a source and holds on to the first unparseable field
struct FieldReader<'a, S: ?Sized> {
    source: &'a mut S,
    rejected: Option<DeskError>,
}

impl<S: FieldSource + ?Sized> FieldReader<'_, S> {
    fn integer(&mut self, field: Field) -> Result<i32, DeskError> {
        match self.source.integer(field) {
            Err(e @ DeskError::InvalidField { .. }) => {
                if self.rejected.is_none() {
                    self.rejected = Some(e);
                }
                Ok(0)
            }
            other => other,
        }
    }

    fn text(&mut self, field: Field) -> Result<String, DeskError> {
        self.source.text(field)
    }
}

/// Reads one value per line from any `BufRead`
///
/// Prompts are echoed to `out` unless quiet, so a transcript of a piped run
/// reads the same as an interactive one.
pub struct LinePrompter<R, W> {
    input: R,
    out: W,
    quiet: bool,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, out: W, quiet: bool) -> Self {
        Self { input, out, quiet }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, DeskError> {
        if !self.quiet {
            write!(self.out, "{}: ", prompt)?;
            self.out.flush()?;
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(DeskError::EndOfInput);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

impl<R: BufRead, W: Write> FieldSource for LinePrompter<R, W> {
    fn choice(&mut self) -> Result<i64, DeskError> {
        let raw = self.ask("Enter your choice")?;
        let raw = raw.trim();
        raw.parse().map_err(|e: ParseIntError| match e.kind() {
            IntErrorKind::PosOverflow => DeskError::InvalidCommand(i64::MAX),
            IntErrorKind::NegOverflow => DeskError::InvalidCommand(i64::MIN),
            _ => DeskError::InvalidField {
                field: "menu choice",
                value: raw.to_string(),
            },
        })
    }

    fn integer(&mut self, field: Field) -> Result<i32, DeskError> {
        let raw = self.ask(field.prompt())?;
        raw.trim().parse().map_err(|_| DeskError::InvalidField {
            field: field.as_str(),
            value: raw.trim().to_string(),
        })
    }

    fn text(&mut self, field: Field) -> Result<String, DeskError> {
        self.ask(field.prompt())
    }
}

/// Interactive prompts on the terminal
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldSource for TerminalPrompter {
    fn choice(&mut self) -> Result<i64, DeskError> {
        Input::<i64>::with_theme(&self.theme)
            .with_prompt(style("Enter your choice").bold().to_string())
            .interact_text()
            .map_err(|e| DeskError::Io(e.to_string()))
    }

    fn integer(&mut self, field: Field) -> Result<i32, DeskError> {
        Input::<i32>::with_theme(&self.theme)
            .with_prompt(field.prompt())
            .interact_text()
            .map_err(|e| DeskError::Io(e.to_string()))
    }

    fn text(&mut self, field: Field) -> Result<String, DeskError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(field.prompt())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| DeskError::Io(e.to_string()))
    }
}
