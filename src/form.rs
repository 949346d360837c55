// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{DebtError, DebtResult};
use crate::ledger::{DebtDraft, DebtLedger};
use crate::models::{normalize_months, Debt, Month};
use crate::money::{
    derive_total, format_brl_input, installment_count, parse_installments, parse_value,
};

/// Outcome of a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Added(i64),
    Edited(i64),
    /// The edit target vanished from the ledger before saving.
    EditMissed(i64),
}

/// Raw form fields plus the derived total and the edit target.
///
/// `total` is recomputed on every value or installments change, so it is
/// always current relative to the two text fields.
#[derive(Debug, Clone, Default)]
pub struct DebtForm {
    name: String,
    value: String,
    installments: String,
    months: Vec<Month>,
    total: Decimal,
    editing: Option<i64>,
}

impl DebtForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn installments(&self) -> &str {
        &self.installments
    }

    pub fn months(&self) -> &[Month] {
        &self.months
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() {
            "Salvar Edição"
        } else {
            "Adicionar"
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_value(&mut self, raw: impl Into<String>) {
        self.value = raw.into();
        self.recompute();
    }

    pub fn set_installments(&mut self, raw: impl Into<String>) {
        self.installments = raw.into();
        self.recompute();
    }

    pub fn set_months<I: IntoIterator<Item = Month>>(&mut self, months: I) {
        self.months = normalize_months(months);
    }

    fn recompute(&mut self) {
        self.total = derive_total(
            parse_value(&self.value),
            parse_installments(&self.installments),
        );
    }

    /// Loads `debt` into the fields and makes it the edit target.
    pub fn load(&mut self, debt: &Debt) {
        self.editing = Some(debt.id);
        self.name = debt.name.clone();
        self.months = debt.months.clone();
        self.installments = debt.installments.to_string();
        self.value = format_brl_input(debt.value);
        self.total = debt.total;
    }

    /// Drops the edit target and clears the fields.
    pub fn cancel(&mut self) {
        self.editing = None;
        self.clear();
    }

    fn clear(&mut self) {
        self.name.clear();
        self.installments.clear();
        self.value.clear();
        self.months.clear();
        self.recompute();
    }

    /// Validated snapshot of the current fields.
    pub fn draft(&self) -> DebtResult<DebtDraft> {
        let installments = installment_count(&self.installments)?;
        if self.total <= Decimal::ZERO {
            return Err(DebtError::NonPositiveTotal(self.total));
        }
        Ok(DebtDraft {
            name: self.name.clone(),
            months: self.months.clone(),
            installments,
            value: parse_value(&self.value),
            total: self.total,
        })
    }

    /// Commits the form into `ledger`. A rejected form is left untouched.
    pub fn submit(&mut self, ledger: &mut DebtLedger) -> DebtResult<Submitted> {
        let draft = self.draft()?;
        let outcome = match self.editing.take() {
            Some(id) => {
                if ledger.replace(draft.into_debt(id)) {
                    Submitted::Edited(id)
                } else {
                    Submitted::EditMissed(id)
                }
            }
            None => Submitted::Added(ledger.add(draft)),
        };
        debug!(?outcome, "form submitted");
        self.clear();
        Ok(outcome)
    }
}
