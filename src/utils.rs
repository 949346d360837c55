// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table, presets::ASCII_FULL, presets::UTF8_FULL};

use crate::models::{Month, MonthFilter};

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>, ascii: bool) -> Table {
    let mut t = Table::new();
    t.load_preset(if ascii { ASCII_FULL } else { UTF8_FULL });
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// JSON (pretty) or JSONL output; `false` when neither flag is set.
pub fn write_json<W: Write, T: serde::Serialize>(
    out: &mut W,
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        writeln!(out, "{}", serde_json::to_string_pretty(v)?)?;
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                writeln!(out, "{}", serde_json::to_string(item)?)?;
            }
        } else {
            writeln!(out, "{}", serde_json::to_string(&val)?)?;
        }
        return Ok(true);
    }
    Ok(false)
}

pub fn required<'a>(m: &'a clap::ArgMatches, id: &str) -> Result<&'a String> {
    m.get_one::<String>(id)
        .with_context(|| format!("Argumento obrigatório ausente '{}'", id))
}

/// Multi-word free text (`value R$ 1.000,00`) joined back with spaces.
pub fn joined_text(m: &clap::ArgMatches, id: &str) -> String {
    m.get_many::<String>(id)
        .map(|vals| vals.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

pub fn parse_month_arg(s: &str) -> Result<Month, String> {
    s.parse::<Month>().map_err(|e| e.to_string())
}

pub fn parse_filter_arg(s: &str) -> Result<MonthFilter, String> {
    s.parse::<MonthFilter>().map_err(|e| e.to_string())
}

pub fn month_labels(months: &[Month]) -> String {
    months
        .iter()
        .map(|m| m.label())
        .collect::<Vec<_>>()
        .join(", ")
}
