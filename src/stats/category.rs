// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::in_range;
use crate::models::{Category, CategoryLabel, CategoryStats, Transaction, TxnKind};
use crate::period::{DateRange, YearMonth};

/// Per-category totals of `kind` for one month, largest first.
pub fn category_stats(
    transactions: &[Transaction],
    categories: &[Category],
    month: YearMonth,
    kind: TxnKind,
) -> Vec<CategoryStats> {
    category_stats_in_range(transactions, categories, kind, month.range())
}

/// Per-category totals of `kind` inside an inclusive date range.
///
/// Transactions without a category, or whose category is not in
/// `categories`, keep their own group and resolve to
/// [`CategoryLabel::Unknown`]. Percentages are shares of the range total and
/// are zero when that total is zero. Equal totals keep first-seen order.
pub fn category_stats_in_range(
    transactions: &[Transaction],
    categories: &[Category],
    kind: TxnKind,
    range: DateRange,
) -> Vec<CategoryStats> {
    let mut index: HashMap<Option<i64>, usize> = HashMap::new();
    let mut groups: Vec<(Option<i64>, Decimal)> = Vec::new();
    for t in in_range(transactions, &range).filter(|t| t.kind == kind) {
        let slot = *index.entry(t.category_id).or_insert_with(|| {
            groups.push((t.category_id, Decimal::ZERO));
            groups.len() - 1
        });
        groups[slot].1 = groups[slot].1.saturating_add(t.amount);
    }

    let period_total = groups
        .iter()
        .fold(Decimal::ZERO, |acc, (_, total)| acc.saturating_add(*total));
    let by_id: HashMap<i64, &Category> = categories.iter().map(|c| (c.id, c)).collect();

    let mut stats: Vec<CategoryStats> = groups
        .into_iter()
        .map(|(category_id, total)| CategoryStats {
            category_id,
            label: category_id
                .and_then(|id| by_id.get(&id))
                .map(|c| CategoryLabel::Known(c.name.clone()))
                .unwrap_or(CategoryLabel::Unknown),
            total,
            percentage: share_of(total, period_total),
        })
        .collect();
    // sort_by is stable, so ties stay in first-seen order
    stats.sort_by(|a, b| b.total.cmp(&a.total));

    tracing::debug!(
        kind = %kind,
        groups = stats.len(),
        total = %period_total,
        "computed category stats"
    );
    stats
}

fn share_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    // scaling first keeps precision; huge totals fall back to dividing first
    part.checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(whole))
        .or_else(|| {
            part.checked_div(whole)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        })
        .unwrap_or(Decimal::ZERO)
}
