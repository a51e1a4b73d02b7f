//! `clinic-desk run` command - the interactive menu
//!
//! Input comes from `--script` if given, from dialoguer prompts when stdin
//! is a terminal, and line by line otherwise.

use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use tracing::debug;

use crate::cli::prompt::{FieldSource, LinePrompter, TerminalPrompter};
use crate::cli::render::Renderer;
use crate::cli::session::Session;
use crate::cli::GlobalOpts;
use crate::core::Config;

pub fn run(global: &GlobalOpts, config: &Config) -> Result<()> {
    let renderer = Renderer::from_settings(global, config);
    let quiet = global.quiet || config.quiet.unwrap_or(false);
    debug!(format = ?renderer.format, style = ?renderer.style, quiet, "starting menu");

    if let Some(path) = &global.script {
        let file = File::open(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to open script {}", path.display()))?;
        let source = LinePrompter::new(BufReader::new(file), io::stdout(), quiet);
        return serve(source, renderer, quiet);
    }

    if io::stdin().is_terminal() {
        serve(TerminalPrompter::new(), renderer, quiet)
    } else {
        let source = LinePrompter::new(io::stdin().lock(), io::stdout(), quiet);
        serve(source, renderer, quiet)
    }
}

fn serve<S: FieldSource>(source: S, renderer: Renderer, quiet: bool) -> Result<()> {
    let mut session = Session::new(source, io::stdout(), renderer, quiet);
    session.run()?;
    Ok(())
}
