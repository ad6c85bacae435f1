// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Rejections raised at the ingestion boundary, before records reach the
/// calculators in [`crate::stats`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid month {0}, expected a value in {1}")]
    InvalidMonth(i64, &'static str),
    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidMonthText(String),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid transaction type '{0}', expected income|expense")]
    InvalidKind(String),
    #[error("Invalid category type '{0}', expected income|expense|both")]
    InvalidCategoryKind(String),
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("Amount must not be negative, got {0}")]
    NegativeAmount(String),
    #[error("Amount {0} exceeds the 1,000,000,000,000 limit")]
    AmountTooLarge(String),
    #[error("Invalid range: {start} is after {end}")]
    InvalidRange { start: String, end: String },
    #[error("Category '{category}' does not accept {kind} transactions")]
    CategoryKindMismatch { category: String, kind: String },
}

pub type ValidationResult<T> = Result<T, ValidationError>;
