// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Cursor;

use debtbook::commands::Flow;
use debtbook::{config::Settings, session::Session, shell};
use rust_decimal::Decimal;

#[test]
fn script_builds_ledger() {
    let mut session = Session::new(Settings::default());
    let script = r#"
# card from the walkthrough
name "Cartão"
value R$ 100,00
installments 3
submit
add --name Rent --value "R$ 50,00" --installments 1 --months march
list --month april
"#;
    shell::run_script(&mut session, Cursor::new(script)).unwrap();
    assert_eq!(session.ledger.len(), 2);
    assert_eq!(session.ledger.as_slice()[0].total, Decimal::from(300));
}

#[test]
fn script_stops_at_quit() {
    let mut session = Session::new(Settings::default());
    let script = "add --name A --value 1 --installments 1\nquit\nadd --name B --value 1 --installments 1\n";
    shell::run_script(&mut session, Cursor::new(script)).unwrap();
    assert_eq!(session.ledger.len(), 1);
}

#[test]
fn script_error_names_the_line() {
    let mut session = Session::new(Settings::default());
    let script = "add --name A --value 1 --installments 1\nedit 99\n";
    let err = shell::run_script(&mut session, Cursor::new(script)).unwrap_err();
    assert!(format!("{:#}", err).contains("linha 2"));
    assert!(format!("{:#}", err).contains("Dívida 99 não encontrada"));
}

#[test]
fn blank_and_comment_lines_are_skipped() {
    let mut session = Session::new(Settings::default());
    assert_eq!(shell::handle_line(&mut session, "   ").unwrap(), Flow::Continue);
    assert_eq!(shell::handle_line(&mut session, "# note").unwrap(), Flow::Continue);
    assert_eq!(shell::handle_line(&mut session, "help").unwrap(), Flow::Continue);
    assert_eq!(shell::handle_line(&mut session, "exit").unwrap(), Flow::Quit);
}

#[test]
fn unbalanced_quotes_are_errors() {
    let mut session = Session::new(Settings::default());
    assert!(shell::handle_line(&mut session, "name \"Card").is_err());
}
