// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use super::monthly::monthly_stats;
use crate::models::{ComparisonEntry, Transaction};
use crate::period::YearMonth;

/// Income and expenses for `months_back` consecutive months, oldest first.
///
/// The window ends `offset_months` months before the month containing
/// `today`; an offset of zero ends it on the current month. A zero-width
/// window yields an empty series. Months outside chrono's calendar range
/// (only reachable with offsets in the hundreds of thousands of years) are
/// left out, so such a series is shorter than `months_back`.
pub fn comparison_series(
    transactions: &[Transaction],
    months_back: usize,
    offset_months: u32,
    today: NaiveDate,
) -> Vec<ComparisonEntry> {
    let anchor = YearMonth::of(today);
    let Ok(offset) = i32::try_from(offset_months) else {
        tracing::warn!(offset_months, "offset out of range, returning empty series");
        return Vec::new();
    };
    let series: Vec<ComparisonEntry> = (0..months_back)
        .rev()
        .filter_map(|back| {
            let back = i32::try_from(back).ok()?;
            anchor.shift(-(back.checked_add(offset)?))
        })
        .map(|month| entry_for(transactions, month))
        .collect();
    tracing::debug!(
        anchor = %anchor,
        months_back,
        offset_months,
        entries = series.len(),
        "computed comparison series"
    );
    if series.len() < months_back {
        tracing::warn!(
            months_back,
            entries = series.len(),
            "months outside the supported calendar were dropped"
        );
    }
    series
}

/// January through December of `year`.
pub fn yearly_series(transactions: &[Transaction], year: i32) -> Vec<ComparisonEntry> {
    (1..=12)
        .filter_map(|m| YearMonth::new(year, m).ok())
        .map(|month| entry_for(transactions, month))
        .collect()
}

fn entry_for(transactions: &[Transaction], month: YearMonth) -> ComparisonEntry {
    let stats = monthly_stats(transactions, month);
    ComparisonEntry {
        month_label: month.label(),
        month_name: month.short_name(),
        year: month.year(),
        month: month.month(),
        income: stats.total_income,
        expenses: stats.total_expenses,
    }
}
