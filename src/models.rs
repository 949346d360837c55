// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DebtError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: i64,
    pub name: String,
    pub months: Vec<Month>,
    pub installments: u32,
    pub value: Decimal,
    pub total: Decimal, // value * installments at last save
}

impl Debt {
    pub fn applies_to(&self, month: Month) -> bool {
        self.months.contains(&month)
    }
}

/// Calendar month tag. Declaration order is calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Canonical identifier, e.g. `march`.
    pub fn id(self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
            Month::July => "july",
            Month::August => "august",
            Month::September => "september",
            Month::October => "october",
            Month::November => "november",
            Month::December => "december",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Month::January => "Janeiro",
            Month::February => "Fevereiro",
            Month::March => "Março",
            Month::April => "Abril",
            Month::May => "Maio",
            Month::June => "Junho",
            Month::July => "Julho",
            Month::August => "Agosto",
            Month::September => "Setembro",
            Month::October => "Outubro",
            Month::November => "Novembro",
            Month::December => "Dezembro",
        }
    }

    pub fn from_number(n: u32) -> Option<Month> {
        n.checked_sub(1)
            .and_then(|i| Month::ALL.get(i as usize))
            .copied()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn fold_key(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'ç' => 'c',
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' => 'u',
            other => other,
        })
        .collect()
}

impl FromStr for Month {
    type Err = DebtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = fold_key(s);
        if let Ok(n) = key.parse::<u32>() {
            return Month::from_number(n).ok_or_else(|| DebtError::UnknownMonth(s.to_string()));
        }
        Month::ALL
            .into_iter()
            .find(|m| m.id() == key || fold_key(m.label()) == key)
            .ok_or_else(|| DebtError::UnknownMonth(s.to_string()))
    }
}

/// Sorts into calendar order and drops repeats.
pub fn normalize_months<I: IntoIterator<Item = Month>>(months: I) -> Vec<Month> {
    let mut out: Vec<Month> = months.into_iter().collect();
    out.sort();
    out.dedup();
    out
}

/// Month selector used by the collection view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MonthFilter {
    #[default]
    General,
    Only(Month),
}

impl MonthFilter {
    /// The 13 selector options, `General` first.
    pub fn options() -> Vec<MonthFilter> {
        std::iter::once(MonthFilter::General)
            .chain(Month::ALL.into_iter().map(MonthFilter::Only))
            .collect()
    }

    pub fn id(self) -> &'static str {
        match self {
            MonthFilter::General => "general",
            MonthFilter::Only(m) => m.id(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MonthFilter::General => "Geral",
            MonthFilter::Only(m) => m.label(),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MonthFilter {
    type Err = DebtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_key(s).as_str() {
            "general" | "geral" => Ok(MonthFilter::General),
            _ => s.parse::<Month>().map(MonthFilter::Only),
        }
    }
}

impl TryFrom<String> for MonthFilter {
    type Error = DebtError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MonthFilter> for String {
    fn from(f: MonthFilter) -> Self {
        f.id().to_string()
    }
}
