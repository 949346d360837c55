// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use debtbook::commands::debts::{self, DebtRow};
use debtbook::filter::EmptyState;
use debtbook::models::{Month, MonthFilter};
use debtbook::commands::Flow;
use debtbook::{cli, commands, config::Settings, session::Session, shell};
use serde_json::Value;

fn run(session: &mut Session, args: &[&str]) {
    let matches = cli::build_session_cli()
        .get_matches_from(std::iter::once("debtbook").chain(args.iter().copied()));
    commands::handle(session, &matches).unwrap();
}

fn seeded() -> Session {
    let mut session = Session::new(Settings::default());
    run(&mut session, &["add", "--name", "Card", "--value", "R$ 100,00", "--installments", "3"]);
    run(
        &mut session,
        &["add", "--name", "Rent", "--value", "R$ 1.500,00", "--installments", "1", "--months", "march"],
    );
    session
}

fn ids_for(session: &Session, args: &[&str]) -> (Vec<String>, Option<EmptyState>) {
    let matches = cli::build_session_cli()
        .get_matches_from(std::iter::once("debtbook").chain(args.iter().copied()));
    let Some(("list", list_m)) = matches.subcommand() else {
        panic!("no list subcommand");
    };
    let (rows, empty) = debts::query_rows(session, list_m);
    (rows.iter().map(|d| d.name.clone()).collect(), empty)
}

#[test]
fn month_filter_projects_subsequence() {
    let session = seeded();
    assert_eq!(ids_for(&session, &["list"]).0, vec!["Card", "Rent"]);
    assert_eq!(ids_for(&session, &["list", "--month", "march"]).0, vec!["Rent"]);

    let (rows, empty) = ids_for(&session, &["list", "--month", "april"]);
    assert!(rows.is_empty());
    assert_eq!(empty, Some(EmptyState::NoMatches));
    assert_eq!(session.ledger.len(), 2);
}

#[test]
fn active_filter_applies_when_no_month_given() {
    let mut session = seeded();
    run(&mut session, &["filter", "Março"]);
    assert_eq!(session.filter, MonthFilter::Only(Month::March));
    assert_eq!(ids_for(&session, &["list"]).0, vec!["Rent"]);
    assert_eq!(ids_for(&session, &["list", "--month", "geral"]).0, vec!["Card", "Rent"]);
}

#[test]
fn empty_ledger_reports_no_debts() {
    let session = Session::new(Settings::default());
    let (rows, empty) = ids_for(&session, &["list", "--month", "may"]);
    assert!(rows.is_empty());
    assert_eq!(empty, Some(EmptyState::NoDebts));
}

#[test]
fn delete_removes_only_target() {
    let mut session = seeded();
    run(&mut session, &["rm", "1"]);
    assert_eq!(session.ledger.len(), 2);

    let card = session.ledger.as_slice()[0].id;
    run(&mut session, &["delete", &card.to_string()]);
    assert_eq!(ids_for(&session, &["list"]).0, vec!["Rent"]);
}

#[test]
fn rows_use_brl_formatting() {
    let session = seeded();
    let row = DebtRow::from(&session.ledger.as_slice()[1]);
    assert_eq!(row.months, "Março");
    assert_eq!(row.installments, "1x");
    assert_eq!(row.value, "R$ 1.500,00");
    assert_eq!(row.total, "R$ 1.500,00");
}

fn list_output(session: &Session, args: &[&str]) -> String {
    let matches = cli::build_session_cli()
        .get_matches_from(std::iter::once("debtbook").chain(args.iter().copied()));
    let Some(("list", list_m)) = matches.subcommand() else {
        panic!("no list subcommand");
    };
    let mut out = Vec::new();
    debts::list_to(&mut out, session, list_m).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn months_available_lists_selector_options() {
    let mut session = seeded();
    assert_eq!(
        shell::handle_line(&mut session, "months-available").unwrap(),
        Flow::Continue
    );
    assert_eq!(shell::handle_line(&mut session, "options").unwrap(), Flow::Continue);

    run(&mut session, &["filter", "march"]);
    let rows = debts::option_rows(&session);
    assert_eq!(rows.len(), 13);
    assert_eq!(rows[0][0], "general");
    assert_eq!(rows[0][1], "Geral");
    assert_eq!(rows[12][0], "december");
    let active: Vec<&str> = rows
        .iter()
        .filter(|r| r[2] == "*")
        .map(|r| r[0].as_str())
        .collect();
    assert_eq!(active, vec!["march"]);
}

#[test]
fn list_jsonl_streams_projected_rows() {
    let session = seeded();
    let out = list_output(&session, &["list", "--jsonl", "--month", "march"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 1);
    let row: Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(row["name"], "Rent");
    assert_eq!(row["months"], serde_json::json!(["march"]));
    assert_eq!(row["installments"], 1);

    let out = list_output(&session, &["list", "--jsonl"]);
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn list_json_is_one_array() {
    let session = seeded();
    let out = list_output(&session, &["list", "--json", "--month", "april"]);
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v, serde_json::json!([]));
}

#[test]
fn list_table_reports_empty_month() {
    let session = seeded();
    let out = list_output(&session, &["list", "--month", "april"]);
    assert_eq!(out.trim(), "Nenhuma dívida para este mês.");
    let out = list_output(&session, &["list"]);
    assert!(out.contains("Lista de Dívidas:"));
    assert!(out.contains("R$ 1.500,00"));
}
