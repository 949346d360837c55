// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;

use crate::error::DebtResult;
use crate::models::{Debt, MonthFilter};
use crate::session::Session;
use crate::utils::required;

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = required(sub, "format")?.to_lowercase();
    let out = required(sub, "out")?;
    let filter = sub.get_one::<MonthFilter>("month").copied();
    let (debts, _) = session.view(filter);

    match fmt.as_str() {
        "csv" => write_csv(Path::new(out), &debts)
            .with_context(|| format!("Falha ao exportar para {}", out))?,
        "json" => write_json(Path::new(out), &debts)
            .with_context(|| format!("Falha ao exportar para {}", out))?,
        _ => anyhow::bail!("Formato desconhecido: {} (use csv|json)", fmt),
    }
    info!(rows = debts.len(), path = %out, "export written");
    println!("{} dívidas exportadas para {}", debts.len(), out);
    Ok(())
}

pub fn write_csv(out: &Path, debts: &[&Debt]) -> DebtResult<()> {
    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record(["id", "name", "months", "installments", "value", "total"])?;
    for d in debts {
        let months: Vec<&str> = d.months.iter().map(|m| m.id()).collect();
        wtr.write_record([
            d.id.to_string(),
            d.name.clone(),
            months.join(";"),
            d.installments.to_string(),
            d.value.to_string(),
            d.total.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json(out: &Path, debts: &[&Debt]) -> DebtResult<()> {
    let items: Vec<_> = debts
        .iter()
        .map(|d| {
            json!({
                "id": d.id, "name": d.name, "months": d.months,
                "installments": d.installments, "value": d.value, "total": d.total
            })
        })
        .collect();
    std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
    Ok(())
}
