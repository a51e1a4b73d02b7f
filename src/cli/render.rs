//! Rendering of command outcomes and notices
//!
//! Listings honour the selected [`OutputFormat`]; status lines are always
//! plain sentences, coloured by `console` when the terminal supports it.
//! JSON and CSV output carry no heading so they can be piped.

use console::style;
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};
use tracing::warn;

use crate::cli::{GlobalOpts, OutputFormat, TableStyle};
use crate::core::config::Config;
use crate::core::dispatch::Outcome;
use crate::core::error::DeskError;
use crate::records::{CriticalEntry, EmergencyEntry, PatientRecord, TreatmentEntry};

/// A record type that can be shown in a listing
pub trait Listing: Serialize {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;

    /// Single-line "Field: value" form
    fn plain(&self) -> String;
}

impl Listing for PatientRecord {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Age", "Condition"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.age.to_string(),
            self.condition.clone(),
        ]
    }

    fn plain(&self) -> String {
        format!(
            "ID: {}, Name: {}, Age: {}, Condition: {}",
            self.id, self.name, self.age, self.condition
        )
    }
}

impl Listing for EmergencyEntry {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Condition"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.condition.clone()]
    }

    fn plain(&self) -> String {
        format!(
            "ID: {}, Name: {}, Condition: {}",
            self.id, self.name, self.condition
        )
    }
}

impl Listing for TreatmentEntry {
    const HEADERS: &'static [&'static str] = &["Patient ID", "Treatment"];

    fn cells(&self) -> Vec<String> {
        vec![self.patient_id.to_string(), self.details.clone()]
    }

    fn plain(&self) -> String {
        format!("Patient ID: {}, Treatment: {}", self.patient_id, self.details)
    }
}

impl Listing for CriticalEntry {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Severity"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.severity.to_string()]
    }

    fn plain(&self) -> String {
        format!(
            "ID: {}, Name: {}, Severity: {}",
            self.id, self.name, self.severity
        )
    }
}

/// Turns outcomes and errors into text for the operator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderer {
    pub format: OutputFormat,
    pub style: TableStyle,
}

impl Renderer {
    pub fn new(format: OutputFormat, style: TableStyle) -> Self {
        Self { format, style }
    }

    /// Pick format and style: command line first, then config, then defaults
    pub fn from_settings(global: &GlobalOpts, config: &Config) -> Self {
        let format = global
            .format
            .or_else(|| parse_setting::<OutputFormat>("format", config.format.as_deref()))
            .unwrap_or_default();
        let style = global
            .style
            .or_else(|| parse_setting::<TableStyle>("style", config.style.as_deref()))
            .unwrap_or_default();
        Self { format, style }
    }

    pub fn outcome(&self, outcome: &Outcome<'_>) -> String {
        match outcome {
            Outcome::PatientAdded => success("Patient added successfully."),
            Outcome::Patients(records) => self.listing("Patient Records", records),
            Outcome::EmergencyAdded => success("Emergency patient added to queue."),
            Outcome::EmergencyTreated(entry) => success(&format!(
                "Emergency patient treated and removed: {}",
                entry.name
            )),
            Outcome::Emergencies(entries) => self.listing("Emergency Room Queue", entries),
            Outcome::TreatmentAdded => success("Treatment added to history."),
            Outcome::TreatmentUndone(entry) => success(&format!(
                "Undoing treatment for Patient ID {}: {}",
                entry.patient_id, entry.details
            )),
            Outcome::Treatments(entries) => self.listing("Treatment History", entries),
            Outcome::CriticalAdded { severity } => success(&format!(
                "Critical patient added with severity {}.",
                severity
            )),
            Outcome::CriticalTreated(entry) => success(&format!(
                "Treated critical patient: {} (Severity: {})",
                entry.name, entry.severity
            )),
            Outcome::Criticals(entries) => self.listing("Critical Patient Queue", entries),
            Outcome::Exit => "Exiting program.".to_string(),
        }
    }

    pub fn error(&self, error: &DeskError) -> String {
        match error {
            DeskError::Empty { .. } => style(error.to_string()).yellow().to_string(),
            _ => style(error.to_string()).red().to_string(),
        }
    }

    pub fn listing<T: Listing>(&self, title: &str, rows: &[&T]) -> String {
        match self.format {
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(T::HEADERS.iter().copied());
                for row in rows {
                    builder.push_record(row.cells());
                }
                let mut table = builder.build();
                match self.style {
                    TableStyle::Rounded => table.with(Style::rounded()),
                    TableStyle::Ascii => table.with(Style::ascii()),
                    TableStyle::Markdown => table.with(Style::markdown()),
                    TableStyle::Psql => table.with(Style::psql()),
                };
                format!("\n{}\n{}", heading(title), table)
            }
            OutputFormat::Plain => {
                let mut output = format!("\n{}", heading(title));
                for row in rows {
                    output.push('\n');
                    output.push_str(&row.plain());
                }
                output
            }
            OutputFormat::Json => serde_json::to_string_pretty(rows).unwrap_or_default(),
            OutputFormat::Csv => to_csv(rows).trim_end().to_string(),
        }
    }
}

fn heading(title: &str) -> String {
    style(format!("--- {} ---", title)).bold().to_string()
}

fn success(message: &str) -> String {
    style(message).green().to_string()
}

fn parse_setting<T: clap::ValueEnum>(key: &str, value: Option<&str>) -> Option<T> {
    let value = value?;
    match T::from_str(value, true) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(key, value, "ignoring unknown configuration value");
            None
        }
    }
}

fn to_csv<T: Serialize>(rows: &[&T]) -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        if let Err(e) = writer.serialize(row) {
            warn!(error = %e, "failed to write CSV row");
            return String::new();
        }
    }
    writer
        .into_inner()
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_default()
}
