// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TxnKind};
use crate::period::YearMonth;

/// Criteria for the transaction list. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub month: Option<YearMonth>,
    pub kind: Option<TxnKind>,
    pub category_id: Option<i64>,
    pub search: Option<String>,
}

impl TransactionFilter {
    pub fn matches(&self, t: &Transaction) -> bool {
        if let Some(month) = self.month
            && !month.range().contains(t.date)
        {
            return false;
        }
        if self.kind.is_some_and(|k| k != t.kind) {
            return false;
        }
        if self.category_id.is_some() && self.category_id != t.category_id {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => t
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle.to_lowercase())),
        }
    }
}

/// Transactions matching `filter`, newest first.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &TransactionFilter,
) -> Vec<&'a Transaction> {
    let mut out: Vec<&Transaction> = transactions.iter().filter(|t| filter.matches(t)).collect();
    out.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    out
}
