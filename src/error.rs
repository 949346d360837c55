// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// Failures surfaced by the ledger, the form and the session plumbing.
#[derive(Debug, Error)]
pub enum DebtError {
    #[error("Parcelas inválidas '{0}', informe um número inteiro positivo")]
    InvalidInstallments(String),
    #[error("Total {0} inválido para envio, verifique valor e parcelas")]
    NonPositiveTotal(Decimal),
    #[error("Mês desconhecido '{0}'")]
    UnknownMonth(String),
    #[error("Dívida {0} não encontrada")]
    DebtNotFound(i64),
    #[error("Dívida {0} está em edição, salve ou cancele antes")]
    AlreadyEditing(i64),
    #[error("Erro de configuração: {0}")]
    Config(String),
    #[error("Erro de E/S: {0}")]
    Io(#[from] std::io::Error),
    #[error("Erro de serialização: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Erro de CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub type DebtResult<T> = Result<T, DebtError>;
