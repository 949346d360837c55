// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Debt, MonthFilter};

/// Read-only month view over `debts`, preserving source order.
/// Debts without months only show up under `General`.
pub fn project(debts: &[Debt], filter: MonthFilter) -> Vec<&Debt> {
    match filter {
        MonthFilter::General => debts.iter().collect(),
        MonthFilter::Only(month) => debts.iter().filter(|d| d.applies_to(month)).collect(),
    }
}

/// Why a projection came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NoDebts,
    NoMatches,
}

impl EmptyState {
    pub fn message(self) -> &'static str {
        match self {
            EmptyState::NoDebts => "Nenhuma dívida cadastrada.",
            EmptyState::NoMatches => "Nenhuma dívida para este mês.",
        }
    }
}

/// Discriminates using the unfiltered size; `None` when rows exist.
pub fn empty_state(total_len: usize, projected_len: usize) -> Option<EmptyState> {
    match (total_len, projected_len) {
        (0, _) => Some(EmptyState::NoDebts),
        (_, 0) => Some(EmptyState::NoMatches),
        _ => None,
    }
}
