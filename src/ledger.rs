// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{Debt, Month};

fn clock_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Time-derived id source. Ids are strictly increasing even when the
/// clock stalls or steps backwards.
#[derive(Debug, Clone)]
pub struct IdSource {
    clock: fn() -> i64,
    last: Option<i64>,
}

impl Default for IdSource {
    fn default() -> Self {
        Self::with_clock(clock_millis)
    }
}

impl IdSource {
    pub fn with_clock(clock: fn() -> i64) -> Self {
        Self { clock, last: None }
    }

    pub fn next_id(&mut self) -> i64 {
        let now = (self.clock)();
        let id = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(id);
        id
    }
}

/// Everything a debt needs except its id.
#[derive(Debug, Clone, PartialEq)]
pub struct DebtDraft {
    pub name: String,
    pub months: Vec<Month>,
    pub installments: u32,
    pub value: Decimal,
    pub total: Decimal,
}

impl DebtDraft {
    pub fn into_debt(self, id: i64) -> Debt {
        Debt {
            id,
            name: self.name,
            months: self.months,
            installments: self.installments,
            value: self.value,
            total: self.total,
        }
    }
}

/// Ordered, in-memory debt collection. Insertion order is display order.
#[derive(Debug, Default)]
pub struct DebtLedger {
    debts: Vec<Debt>,
    ids: IdSource,
}

impl DebtLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(ids: IdSource) -> Self {
        Self {
            debts: Vec::new(),
            ids,
        }
    }

    /// Appends a new debt and returns its freshly assigned id.
    pub fn add(&mut self, draft: DebtDraft) -> i64 {
        let mut id = self.ids.next_id();
        while self.position(id).is_some() {
            id = self.ids.next_id();
        }
        debug!(id, name = %draft.name, total = %draft.total, "debt added");
        self.debts.push(draft.into_debt(id));
        id
    }

    /// Replaces the debt with the same id, keeping its position.
    /// Returns `false` and leaves the ledger untouched when no id matches.
    pub fn replace(&mut self, debt: Debt) -> bool {
        match self.position(debt.id) {
            Some(pos) => {
                debug!(id = debt.id, pos, "debt replaced");
                self.debts[pos] = debt;
                true
            }
            None => {
                warn!(id = debt.id, "edit target not in ledger, ignoring");
                false
            }
        }
    }

    pub fn remove(&mut self, id: i64) -> Option<Debt> {
        match self.position(id) {
            Some(pos) => {
                debug!(id, pos, "debt removed");
                Some(self.debts.remove(pos))
            }
            None => {
                warn!(id, "delete of unknown debt ignored");
                None
            }
        }
    }

    pub fn get(&self, id: i64) -> Option<&Debt> {
        self.debts.iter().find(|d| d.id == id)
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.debts.iter().position(|d| d.id == id)
    }

    pub fn as_slice(&self) -> &[Debt] {
        &self.debts
    }

    pub fn len(&self) -> usize {
        self.debts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.debts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, installments: u32, value: i64) -> DebtDraft {
        let value = Decimal::from(value);
        DebtDraft {
            name: name.into(),
            months: Vec::new(),
            installments,
            value,
            total: value * Decimal::from(installments),
        }
    }

    fn frozen() -> i64 {
        1_700_000_000_000
    }

    #[test]
    fn ids_increase_when_clock_stalls() {
        let mut ids = IdSource::with_clock(frozen);
        assert_eq!(ids.next_id(), 1_700_000_000_000);
        assert_eq!(ids.next_id(), 1_700_000_000_001);
        assert_eq!(ids.next_id(), 1_700_000_000_002);
    }

    #[test]
    fn add_appends_with_unique_ids() {
        let mut ledger = DebtLedger::with_ids(IdSource::with_clock(frozen));
        let a = ledger.add(draft("Card", 3, 100));
        let b = ledger.add(draft("Loan", 2, 50));
        assert_ne!(a, b);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.as_slice()[0].name, "Card");
        assert_eq!(ledger.as_slice()[1].name, "Loan");
    }

    #[test]
    fn replace_keeps_position_and_id() {
        let mut ledger = DebtLedger::with_ids(IdSource::with_clock(frozen));
        let a = ledger.add(draft("Card", 3, 100));
        ledger.add(draft("Loan", 2, 50));

        assert!(ledger.replace(draft("Card", 4, 100).into_debt(a)));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.as_slice()[0].id, a);
        assert_eq!(ledger.as_slice()[0].total, Decimal::from(400));
    }

    #[test]
    fn replace_unknown_is_noop() {
        let mut ledger = DebtLedger::with_ids(IdSource::with_clock(frozen));
        ledger.add(draft("Card", 3, 100));
        assert!(!ledger.replace(draft("Ghost", 1, 1).into_debt(42)));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.as_slice()[0].name, "Card");
    }

    #[test]
    fn remove_only_matching_entry() {
        let mut ledger = DebtLedger::with_ids(IdSource::with_clock(frozen));
        let a = ledger.add(draft("Card", 3, 100));
        let b = ledger.add(draft("Loan", 2, 50));

        assert!(ledger.remove(12345).is_none());
        assert_eq!(ledger.len(), 2);

        assert_eq!(ledger.remove(a).map(|d| d.id), Some(a));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.as_slice()[0].id, b);
    }
}
