//! The menu loop
//!
//! Reads a choice, collects its fields, hands the command to the
//! [`Dispatcher`] and prints what came back. Only I/O failures end the loop
//! early; empty containers and bad input are reported and the menu is shown
//! again.

use std::io::Write;
use tracing::{debug, info};

use crate::cli::prompt::{read_command, FieldSource};
use crate::cli::render::Renderer;
use crate::core::command::MenuChoice;
use crate::core::dispatch::{Dispatcher, Outcome};
use crate::core::error::DeskError;

const BANNER_RULE: &str = "=========================";

pub struct Session<S, W> {
    dispatcher: Dispatcher,
    source: S,
    out: W,
    renderer: Renderer,
    quiet: bool,
}

impl<S: FieldSource, W: Write> Session<S, W> {
    pub fn new(source: S, out: W, renderer: Renderer, quiet: bool) -> Self {
        Self {
            dispatcher: Dispatcher::new(),
            source,
            out,
            renderer,
            quiet,
        }
    }

    /// Serve commands until exit, end of input, or an I/O failure
    pub fn run(&mut self) -> Result<(), DeskError> {
        info!("session started");
        let mut served = 0usize;

        loop {
            if !self.quiet {
                self.print_menu()?;
            }

            let command = match self
                .source
                .choice()
                .and_then(MenuChoice::try_from)
                .and_then(|choice| read_command(&mut self.source, choice))
            {
                Ok(command) => command,
                Err(DeskError::EndOfInput) => {
                    debug!("input exhausted");
                    writeln!(self.out, "{}", self.renderer.outcome(&Outcome::Exit))?;
                    break;
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    debug!(error = %e, "command rejected");
                    writeln!(self.out, "{}", self.renderer.error(&e))?;
                    continue;
                }
            };

            let text = match self.dispatcher.execute(command) {
                Ok(Outcome::Exit) => {
                    writeln!(self.out, "{}", self.renderer.outcome(&Outcome::Exit))?;
                    break;
                }
                Ok(outcome) => self.renderer.outcome(&outcome),
                Err(e) => self.renderer.error(&e),
            };
            writeln!(self.out, "{}", text)?;
            served += 1;
        }

        self.out.flush()?;
        info!(served, "session ended");
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn print_menu(&mut self) -> Result<(), DeskError> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", BANNER_RULE)?;
        writeln!(self.out, " Hospital Management Menu")?;
        writeln!(self.out, "{}", BANNER_RULE)?;
        for choice in MenuChoice::ALL {
            writeln!(self.out, "{}", choice)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::LinePrompter;
    use crate::cli::{OutputFormat, TableStyle};
    use std::io::Cursor;

    fn run_script(script: &str) -> (String, Dispatcher) {
        console::set_colors_enabled(false);
        let source = LinePrompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), true);
        let renderer = Renderer::new(OutputFormat::Plain, TableStyle::Rounded);
        let mut session = Session::new(source, Vec::new(), renderer, true);
        session.run().unwrap();

        let Session { dispatcher, out, .. } = session;
        (String::from_utf8(out).unwrap(), dispatcher)
    }

    #[test]
    fn test_patient_scenario() {
        let (out, _) = run_script("1\n1\nAlice\n30\nflu\n1\n2\nBob\n40\ncold\n2\n0\n");
        assert_eq!(
            out,
            "Patient added successfully.\n\
             Patient added successfully.\n\
             \n--- Patient Records ---\n\
             ID: 1, Name: Alice, Age: 30, Condition: flu\n\
             ID: 2, Name: Bob, Age: 40, Condition: cold\n\
             Exiting program.\n"
        );
    }

    #[test]
    fn test_invalid_choice_does_not_stop_the_loop() {
        let (out, d) = run_script("42\n9\n1\nX\n5\n0\n");
        assert!(out.starts_with("Invalid choice! Please try again.\n"));
        assert!(out.contains("Critical patient added with severity 5."));
        assert_eq!(d.critical().len(), 1);
    }

    #[test]
    fn test_bad_field_abandons_only_that_command() {
        let (out, d) = run_script("1\nseven\nAda\n44\nflu\n3\n1\nA\nburn\n0\n");
        assert!(out.contains("Invalid patient id: 'seven' is not a whole number"));
        assert!(out.contains("Emergency patient added to queue."));
        assert!(d.patients().is_empty());
        assert_eq!(d.emergency().len(), 1);
    }

    #[test]
    fn test_leftover_field_lines_are_not_run_as_choices() {
        let (out, d) = run_script("9\n1\nZ\n3\n1\nabc\nBob\n10\ncold\n11\n0\n");
        assert!(out.contains("Invalid patient id: 'abc' is not a whole number"));
        assert!(!out.contains("Treated critical patient"));
        assert!(out.contains("ID: 1, Name: Z, Severity: 3"));
        assert_eq!(d.critical().len(), 1);
        assert!(d.patients().is_empty());
    }

    #[test]
    fn test_oversized_choice_gets_invalid_notice() {
        let (out, _) = run_script("123456789012345678901234\n0\n");
        assert_eq!(out, "Invalid choice! Please try again.\nExiting program.\n");
    }

    #[test]
    fn test_end_of_input_exits_gracefully() {
        let (out, d) = run_script("6\n1\nsplint\n");
        assert_eq!(out, "Treatment added to history.\nExiting program.\n");
        assert_eq!(d.treatments().len(), 1);
    }

    #[test]
    fn test_empty_notices() {
        let (out, _) = run_script("4\n7\n10\n11\n0\n");
        assert_eq!(
            out,
            "No emergency patients in queue.\n\
             No treatments to undo.\n\
             No critical patients to treat.\n\
             No critical patients.\n\
             Exiting program.\n"
        );
    }

    #[test]
    fn test_menu_is_printed_unless_quiet() {
        console::set_colors_enabled(false);
        let source = LinePrompter::new(Cursor::new(b"0\n".to_vec()), Vec::new(), true);
        let mut session = Session::new(source, Vec::new(), Renderer::default(), false);
        session.run().unwrap();
        let out = String::from_utf8(session.into_output()).unwrap();

        assert!(out.starts_with("\n=========================\n Hospital Management Menu\n"));
        assert!(out.contains("1. Add New Patient Record\n"));
        assert!(out.contains("11. Show Critical Patient Queue\n0. Exit\n"));
        assert!(out.ends_with("Exiting program.\n"));
    }
}
