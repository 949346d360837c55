// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::BufRead;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use shell_words::split;
use tracing::debug;

use crate::cli::build_session_cli;
use crate::commands::{self, Flow};
use crate::session::Session;

/// Parses and runs one session line. Blank lines and `#` comments are skipped.
pub fn handle_line(session: &mut Session, line: &str) -> Result<Flow> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Flow::Continue);
    }
    let words = split(line).with_context(|| format!("Não foi possível interpretar '{}'", line))?;
    let argv = std::iter::once("debtbook".to_string()).chain(words);
    let matches = match build_session_cli().try_get_matches_from(argv) {
        Ok(m) => m,
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            println!("{}", err.render());
            return Ok(Flow::Continue);
        }
        Err(err) => return Err(err.into()),
    };
    debug!(command = matches.subcommand_name().unwrap_or(""), "session command");
    commands::handle(session, &matches)
}

fn prompt(session: &Session) -> String {
    match session.form.editing() {
        Some(id) => format!("debtbook [salvar edição {}]> ", id),
        None => "debtbook [adicionar]> ".to_string(),
    }
}

/// Line-edited prompt. Command errors are printed and the session goes on.
pub fn run_interactive(session: &mut Session) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline(&prompt(session)) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.trim()).ok();
                }
                match handle_line(session, &line) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Quit) => break,
                    Err(err) => eprintln!("error: {:#}", err),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

/// Non-interactive run; the first failing line aborts with its line number.
pub fn run_script<R: BufRead>(session: &mut Session, reader: R) -> Result<()> {
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let flow = handle_line(session, &line).with_context(|| format!("linha {}", idx + 1))?;
        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}
