// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use super::in_range;
use crate::models::{MonthlyStats, Transaction, TxnKind};
use crate::period::{DateRange, YearMonth};

/// Income, expense and balance for one calendar month. Transactions dated on
/// the first or last day of the month are included.
pub fn monthly_stats(transactions: &[Transaction], month: YearMonth) -> MonthlyStats {
    let stats = totals_in_range(transactions, &month.range());
    tracing::debug!(
        %month,
        income = %stats.total_income,
        expenses = %stats.total_expenses,
        "computed monthly stats"
    );
    stats
}

/// Totals saturate at `Decimal::MAX` instead of overflowing; `balance` is
/// always the difference of the two reported totals.
pub fn totals_in_range(transactions: &[Transaction], range: &DateRange) -> MonthlyStats {
    let (total_income, total_expenses) = in_range(transactions, range).fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(inc, exp), t| match t.kind {
            TxnKind::Income => (inc.saturating_add(t.amount), exp),
            TxnKind::Expense => (inc, exp.saturating_add(t.amount)),
        },
    );
    MonthlyStats {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
    }
}
