// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::error::DebtError;
use crate::form::{DebtForm, Submitted};
use crate::models::Month;
use crate::money::format_brl;
use crate::session::Session;
use crate::utils::{joined_text, month_labels, pretty_table, required};

fn print_total(session: &Session) {
    println!("Total: {}", format_brl(session.form.total()));
}

pub fn set_name(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    session.form.set_name(joined_text(sub, "text"));
    Ok(())
}

pub fn set_value(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    session.form.set_value(joined_text(sub, "text"));
    print_total(session);
    Ok(())
}

pub fn set_installments(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    session.form.set_installments(joined_text(sub, "text"));
    print_total(session);
    Ok(())
}

fn selected_months(sub: &clap::ArgMatches) -> Vec<Month> {
    sub.get_many::<Month>("months")
        .map(|vals| vals.copied().collect())
        .unwrap_or_default()
}

pub fn set_months(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    session.form.set_months(selected_months(sub));
    Ok(())
}

pub fn show(session: &Session) -> Result<()> {
    let form = &session.form;
    let rows = vec![
        vec!["Nome".to_string(), form.name().to_string()],
        vec!["Meses".to_string(), month_labels(form.months())],
        vec!["Parcelas".to_string(), form.installments().to_string()],
        vec!["Valor".to_string(), form.value().to_string()],
        vec!["Total".to_string(), format_brl(form.total())],
    ];
    println!(
        "{}",
        pretty_table(&["Campo", "Valor"], rows, session.settings.ascii_tables)
    );
    match form.editing() {
        Some(id) => println!("[{}] editando dívida {}", form.submit_label(), id),
        None => println!("[{}]", form.submit_label()),
    }
    Ok(())
}

fn report(outcome: Submitted) {
    match outcome {
        Submitted::Added(id) => println!("Dívida {} adicionada.", id),
        Submitted::Edited(id) => println!("Dívida {} atualizada.", id),
        Submitted::EditMissed(id) => {
            eprintln!("Dívida {} não existe mais; edição descartada.", id)
        }
    }
}

pub fn submit(session: &mut Session) -> Result<()> {
    report(session.submit()?);
    Ok(())
}

/// One-shot add through a scratch form; the session form is not touched.
pub fn add(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    if let Some(id) = session.form.editing() {
        return Err(DebtError::AlreadyEditing(id).into());
    }
    let mut scratch = DebtForm::new();
    scratch.set_name(required(sub, "name")?.trim());
    scratch.set_value(required(sub, "value")?.as_str());
    scratch.set_installments(required(sub, "installments")?.trim());
    scratch.set_months(selected_months(sub));
    report(scratch.submit(&mut session.ledger)?);
    Ok(())
}

pub fn edit(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub
        .get_one::<i64>("id")
        .ok_or_else(|| anyhow::anyhow!("Id da dívida ausente"))?;
    let name = session.edit(id)?.name.clone();
    println!("Editando '{}' ({}).", name, id);
    show(session)
}

pub fn cancel(session: &mut Session) -> Result<()> {
    match session.form.editing() {
        Some(id) => println!("Edição de {} cancelada.", id),
        None => println!("Formulário limpo."),
    }
    session.form.cancel();
    Ok(())
}
