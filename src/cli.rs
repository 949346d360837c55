// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

use crate::utils::{parse_filter_arg, parse_month_arg};

/// Process-level arguments for the `debtbook` binary.
pub fn build_cli() -> Command {
    Command::new("debtbook")
        .version(clap::crate_version!())
        .about("Track installment debts for the current session")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Settings file (defaults to $DEBTBOOK_CONFIG or the platform config dir)"),
        )
        .arg(
            Arg::new("script")
                .long("script")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Run session commands from a file instead of the prompt"),
        )
}

fn text_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .num_args(1..)
        .required(true)
        .allow_hyphen_values(true)
        .help(help)
}

fn id_arg() -> Arg {
    Arg::new("id")
        .required(true)
        .value_parser(value_parser!(i64))
        .help("Debt id as shown by `list`")
}

fn month_opt() -> Arg {
    Arg::new("month")
        .long("month")
        .value_parser(parse_filter_arg)
        .help("general or a month; defaults to the active filter")
}

/// Commands accepted inside a session, one per line.
pub fn build_session_cli() -> Command {
    Command::new("debtbook")
        .subcommand_required(true)
        .disable_version_flag(true)
        .subcommand(
            Command::new("name").about("Set the debt name").arg(text_arg("text", "Free-form label")),
        )
        .subcommand(
            Command::new("value")
                .about("Set the per-installment value, e.g. R$ 1.234,56")
                .arg(text_arg("text", "Currency text")),
        )
        .subcommand(
            Command::new("installments")
                .about("Set the installment count")
                .arg(text_arg("text", "Number of installments")),
        )
        .subcommand(
            Command::new("months")
                .about("Select applicable months (none clears)")
                .arg(
                    Arg::new("months")
                        .num_args(0..)
                        .value_delimiter(',')
                        .value_parser(parse_month_arg),
                ),
        )
        .subcommand(Command::new("form").about("Show the form and its computed total"))
        .subcommand(Command::new("submit").about("Add the debt or save the edit"))
        .subcommand(
            Command::new("add")
                .about("Fill the form and submit in one step")
                .arg(Arg::new("name").long("name").required(true))
                .arg(
                    Arg::new("value")
                        .long("value")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("installments")
                        .long("installments")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("months")
                        .long("months")
                        .value_delimiter(',')
                        .num_args(1..)
                        .value_parser(parse_month_arg),
                ),
        )
        .subcommand(
            Command::new("edit")
                .about("Load a debt into the form")
                .arg(id_arg()),
        )
        .subcommand(Command::new("cancel").about("Abandon the current edit"))
        .subcommand(
            Command::new("rm")
                .visible_alias("delete")
                .about("Delete a debt")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("filter").about("Set the active month selector").arg(
                Arg::new("selector")
                    .required(true)
                    .value_parser(parse_filter_arg),
            ),
        )
        .subcommand(
            Command::new("list")
                .about("Show debts for the active or given month")
                .arg(month_opt())
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("jsonl")
                        .long("jsonl")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("json"),
                ),
        )
        .subcommand(
            Command::new("months-available")
                .visible_alias("options")
                .about("List the month selector options"),
        )
        .subcommand(
            Command::new("export")
                .about("Write the debts of a month view to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .required(true)
                        .value_parser(["csv", "json"]),
                )
                .arg(Arg::new("out").long("out").required(true))
                .arg(month_opt()),
        )
        .subcommand(Command::new("quit").visible_alias("exit").about("End the session"))
}
