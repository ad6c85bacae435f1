// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Report calculators.
//!
//! Every function here is a pure computation over a caller-owned snapshot of
//! transactions and categories: inputs are only borrowed, nothing is cached,
//! and identical inputs give identical output.

mod category;
mod comparison;
mod filter;
mod monthly;

pub use category::{category_stats, category_stats_in_range};
pub use comparison::{comparison_series, yearly_series};
pub use filter::{TransactionFilter, filter_transactions};
pub use monthly::{monthly_stats, totals_in_range};

use crate::models::Transaction;
use crate::period::DateRange;

fn in_range<'a>(
    transactions: &'a [Transaction],
    range: &'a DateRange,
) -> impl Iterator<Item = &'a Transaction> + 'a {
    transactions.iter().filter(move |t| range.contains(t.date))
}
