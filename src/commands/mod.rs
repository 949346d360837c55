// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod debts;
pub mod exporter;
pub mod form;

use anyhow::Result;

use crate::session::Session;

/// Whether the shell keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn handle(session: &mut Session, matches: &clap::ArgMatches) -> Result<Flow> {
    match matches.subcommand() {
        Some(("name", sub)) => form::set_name(session, sub)?,
        Some(("value", sub)) => form::set_value(session, sub)?,
        Some(("installments", sub)) => form::set_installments(session, sub)?,
        Some(("months", sub)) => form::set_months(session, sub)?,
        Some(("form", _)) => form::show(session)?,
        Some(("submit", _)) => form::submit(session)?,
        Some(("add", sub)) => form::add(session, sub)?,
        Some(("edit", sub)) => form::edit(session, sub)?,
        Some(("cancel", _)) => form::cancel(session)?,
        Some(("rm", sub)) => debts::remove(session, sub)?,
        Some(("filter", sub)) => debts::set_filter(session, sub)?,
        Some(("list", sub)) => debts::list(session, sub)?,
        Some(("months-available", _)) => debts::options(session)?,
        Some(("export", sub)) => exporter::handle(session, sub)?,
        Some(("quit", _)) => return Ok(Flow::Quit),
        _ => {}
    }
    Ok(Flow::Continue)
}
