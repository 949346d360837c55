// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::error::{DebtError, DebtResult};
use crate::filter::{empty_state, project, EmptyState};
use crate::form::{DebtForm, Submitted};
use crate::ledger::DebtLedger;
use crate::models::{Debt, MonthFilter};

/// All state of one shell run. Discarded when the session ends.
#[derive(Debug, Default)]
pub struct Session {
    pub ledger: DebtLedger,
    pub form: DebtForm,
    pub filter: MonthFilter,
    pub settings: Settings,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            ledger: DebtLedger::new(),
            form: DebtForm::new(),
            filter: settings.default_filter,
            settings,
        }
    }

    pub fn submit(&mut self) -> DebtResult<Submitted> {
        self.form.submit(&mut self.ledger)
    }

    /// Loads a debt into the form for editing.
    pub fn edit(&mut self, id: i64) -> DebtResult<&Debt> {
        let debt = self.ledger.get(id).ok_or(DebtError::DebtNotFound(id))?;
        self.form.load(debt);
        Ok(debt)
    }

    /// Deletes a debt; deleting the current edit target cancels the edit.
    pub fn remove(&mut self, id: i64) -> Option<Debt> {
        let removed = self.ledger.remove(id);
        if removed.is_some() && self.form.editing() == Some(id) {
            self.form.cancel();
        }
        removed
    }

    /// Rows for `filter` (or the active selector) plus the empty-state reason.
    pub fn view(&self, filter: Option<MonthFilter>) -> (Vec<&Debt>, Option<EmptyState>) {
        let rows = project(self.ledger.as_slice(), filter.unwrap_or(self.filter));
        let empty = empty_state(self.ledger.len(), rows.len());
        (rows, empty)
    }
}
