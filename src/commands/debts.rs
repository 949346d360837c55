// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;

use anyhow::Result;

use crate::filter::EmptyState;
use crate::models::{Debt, MonthFilter};
use crate::money::format_brl;
use crate::session::Session;
use crate::utils::{month_labels, pretty_table, write_json};

pub fn remove(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub
        .get_one::<i64>("id")
        .ok_or_else(|| anyhow::anyhow!("Id da dívida ausente"))?;
    match session.remove(id) {
        Some(debt) => println!("Dívida '{}' excluída.", debt.name),
        None => println!("Nenhuma dívida com id {}.", id),
    }
    Ok(())
}

pub fn set_filter(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let filter = *sub
        .get_one::<MonthFilter>("selector")
        .ok_or_else(|| anyhow::anyhow!("Seletor de mês ausente"))?;
    session.filter = filter;
    println!("Filtro: {}", filter);
    Ok(())
}

/// One table line of the debt list.
#[derive(Debug)]
pub struct DebtRow {
    pub id: i64,
    pub name: String,
    pub months: String,
    pub installments: String,
    pub value: String,
    pub total: String,
}

impl From<&Debt> for DebtRow {
    fn from(d: &Debt) -> Self {
        DebtRow {
            id: d.id,
            name: d.name.clone(),
            months: month_labels(&d.months),
            installments: format!("{}x", d.installments),
            value: format_brl(d.value),
            total: format_brl(d.total),
        }
    }
}

pub fn query_rows<'a>(
    session: &'a Session,
    sub: &clap::ArgMatches,
) -> (Vec<&'a Debt>, Option<EmptyState>) {
    session.view(sub.get_one::<MonthFilter>("month").copied())
}

pub fn list(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    list_to(&mut std::io::stdout().lock(), session, sub)
}

/// Renders `list` into `out`: JSON, JSONL or the localized table.
pub fn list_to<W: Write>(out: &mut W, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (debts, empty) = query_rows(session, sub);
    if write_json(out, json_flag, jsonl_flag, &debts)? {
        return Ok(());
    }
    if let Some(empty) = empty {
        writeln!(out, "{}", empty.message())?;
        return Ok(());
    }
    let rows: Vec<Vec<String>> = debts
        .iter()
        .map(|d| {
            let r = DebtRow::from(*d);
            vec![r.id.to_string(), r.name, r.months, r.installments, r.value, r.total]
        })
        .collect();
    writeln!(out, "Lista de Dívidas:")?;
    writeln!(
        out,
        "{}",
        pretty_table(
            &[
                "ID",
                "Nome",
                "Meses",
                "Quantidade de parcelas",
                "Valor da parcela",
                "Total",
            ],
            rows,
            session.settings.ascii_tables,
        )
    )?;
    Ok(())
}

/// The 13 selector options as `[id, label, active marker]`, `general` first.
pub fn option_rows(session: &Session) -> Vec<Vec<String>> {
    MonthFilter::options()
        .into_iter()
        .map(|f| {
            let marker = if f == session.filter { "*" } else { "" };
            vec![f.id().to_string(), f.label().to_string(), marker.to_string()]
        })
        .collect()
}

pub fn options(session: &Session) -> Result<()> {
    println!(
        "{}",
        pretty_table(
            &["Opção", "Rótulo", "Ativo"],
            option_rows(session),
            session.settings.ascii_tables,
        )
    );
    Ok(())
}
