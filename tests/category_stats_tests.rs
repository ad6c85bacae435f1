// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use smartbudget::models::{Category, CategoryKind, CategoryLabel, Transaction, TxnKind};
use smartbudget::period::{DateRange, YearMonth};
use smartbudget::stats::{category_stats, category_stats_in_range};

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn txn(id: i64, kind: TxnKind, amount: &str, date: &str, cat: Option<i64>) -> Transaction {
    Transaction {
        id,
        kind,
        amount: d(amount),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        category_id: cat,
        description: None,
        notes: None,
    }
}

fn cat(id: i64, name: &str, kind: CategoryKind) -> Category {
    Category {
        id,
        name: name.into(),
        icon: None,
        kind,
    }
}

fn march_2025() -> YearMonth {
    YearMonth::from_month0(2025, 2).unwrap()
}

#[test]
fn single_category_takes_full_share() {
    let txns = vec![
        txn(1, TxnKind::Income, "1000", "2025-03-01", None),
        txn(2, TxnKind::Expense, "400", "2025-03-15", Some(1)),
    ];
    let cats = vec![cat(1, "Food", CategoryKind::Expense)];
    let stats = category_stats(&txns, &cats, march_2025(), TxnKind::Expense);
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].category_id, Some(1));
    assert_eq!(stats[0].label, CategoryLabel::Known("Food".into()));
    assert_eq!(stats[0].total, d("400"));
    assert_eq!(stats[0].percentage, d("100"));
}

#[test]
fn empty_input_gives_no_rows() {
    let stats = category_stats(
        &[],
        &[],
        YearMonth::from_month0(2025, 0).unwrap(),
        TxnKind::Income,
    );
    assert!(stats.is_empty());
}

#[test]
fn equal_totals_split_evenly_in_first_seen_order() {
    let txns = vec![
        txn(1, TxnKind::Expense, "200", "2025-03-02", Some(2)),
        txn(2, TxnKind::Expense, "200", "2025-03-03", Some(1)),
    ];
    let cats = vec![
        cat(1, "Food", CategoryKind::Expense),
        cat(2, "Rent", CategoryKind::Expense),
    ];
    let stats = category_stats(&txns, &cats, march_2025(), TxnKind::Expense);
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].percentage, d("50"));
    assert_eq!(stats[1].percentage, d("50"));
    assert_eq!(stats[0].label.name(), "Rent");
    assert_eq!(stats[1].label.name(), "Food");
}

#[test]
fn sorted_by_total_descending() {
    let txns = vec![
        txn(1, TxnKind::Expense, "10", "2025-03-02", Some(1)),
        txn(2, TxnKind::Expense, "300", "2025-03-03", Some(2)),
        txn(3, TxnKind::Expense, "55", "2025-03-04", Some(3)),
        txn(4, TxnKind::Expense, "100", "2025-03-05", Some(1)),
    ];
    let cats = vec![
        cat(1, "Food", CategoryKind::Expense),
        cat(2, "Rent", CategoryKind::Expense),
        cat(3, "Bills", CategoryKind::Expense),
    ];
    let stats = category_stats(&txns, &cats, march_2025(), TxnKind::Expense);
    let totals: Vec<Decimal> = stats.iter().map(|s| s.total).collect();
    assert_eq!(totals, vec![d("300"), d("110"), d("55")]);
    assert!(stats.windows(2).all(|w| w[0].total >= w[1].total));
}

#[test]
fn shares_add_up_to_one_hundred() {
    let txns = vec![
        txn(1, TxnKind::Expense, "1", "2025-03-02", Some(1)),
        txn(2, TxnKind::Expense, "1", "2025-03-03", Some(2)),
        txn(3, TxnKind::Expense, "1", "2025-03-04", Some(3)),
    ];
    let stats = category_stats(&txns, &[], march_2025(), TxnKind::Expense);
    let sum: Decimal = stats.iter().map(|s| s.percentage).sum();
    assert!((sum - d("100")).abs() < d("0.000001"));
}

#[test]
fn zero_total_gives_zero_percentages() {
    let txns = vec![
        txn(1, TxnKind::Income, "0", "2025-03-02", Some(1)),
        txn(2, TxnKind::Income, "0", "2025-03-09", Some(2)),
    ];
    let stats = category_stats(&txns, &[], march_2025(), TxnKind::Income);
    assert_eq!(stats.len(), 2);
    assert!(stats.iter().all(|s| s.percentage == Decimal::ZERO));
}

#[test]
fn unmatched_and_missing_categories_are_unknown_groups() {
    let txns = vec![
        txn(1, TxnKind::Expense, "30", "2025-03-02", None),
        txn(2, TxnKind::Expense, "20", "2025-03-03", Some(99)),
        txn(3, TxnKind::Expense, "50", "2025-03-04", Some(1)),
        txn(4, TxnKind::Expense, "5", "2025-03-05", None),
    ];
    let cats = vec![cat(1, "Food", CategoryKind::Expense)];
    let stats = category_stats(&txns, &cats, march_2025(), TxnKind::Expense);
    assert_eq!(stats.len(), 3);
    assert_eq!(stats[0].label.name(), "Food");
    assert_eq!(stats[1].category_id, None);
    assert_eq!(stats[1].total, d("35"));
    assert_eq!(stats[1].label, CategoryLabel::Unknown);
    assert_eq!(stats[2].category_id, Some(99));
    assert_eq!(stats[2].label.name(), "Unknown");
}

#[test]
fn only_requested_kind_and_month_are_counted() {
    let txns = vec![
        txn(1, TxnKind::Income, "900", "2025-03-02", Some(1)),
        txn(2, TxnKind::Expense, "40", "2025-03-03", Some(1)),
        txn(3, TxnKind::Expense, "60", "2025-04-01", Some(1)),
    ];
    let cats = vec![cat(1, "Other", CategoryKind::Both)];
    let stats = category_stats(&txns, &cats, march_2025(), TxnKind::Expense);
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].total, d("40"));
    assert_eq!(stats[0].percentage, d("100"));
}

#[test]
fn range_variant_spans_months() {
    let txns = vec![
        txn(1, TxnKind::Expense, "25", "2025-01-15", Some(1)),
        txn(2, TxnKind::Expense, "75", "2025-02-15", Some(2)),
        txn(3, TxnKind::Expense, "500", "2025-03-15", Some(2)),
    ];
    let cats = vec![
        cat(1, "Food", CategoryKind::Expense),
        cat(2, "Rent", CategoryKind::Expense),
    ];
    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(),
    )
    .unwrap();
    let stats = category_stats_in_range(&txns, &cats, TxnKind::Expense, range);
    assert_eq!(stats[0].label.name(), "Rent");
    assert_eq!(stats[0].percentage, d("75"));
    assert_eq!(stats[1].percentage, d("25"));
}

#[test]
fn repeated_calls_are_identical() {
    let txns = vec![
        txn(1, TxnKind::Expense, "12.5", "2025-03-02", Some(1)),
        txn(2, TxnKind::Expense, "7.5", "2025-03-03", Some(2)),
    ];
    let a = category_stats(&txns, &[], march_2025(), TxnKind::Expense);
    let b = category_stats(&txns, &[], march_2025(), TxnKind::Expense);
    assert_eq!(a, b);
}

#[test]
fn huge_amounts_still_give_percentages() {
    let txns = vec![
        txn(1, TxnKind::Expense, "1000000000000000000000000000", "2025-03-02", Some(1)),
        txn(2, TxnKind::Expense, "50000000000000000000000000000", "2025-03-03", Some(2)),
        txn(3, TxnKind::Expense, "50000000000000000000000000000", "2025-03-04", Some(2)),
    ];
    let single = category_stats(&txns[..1], &[], march_2025(), TxnKind::Expense);
    assert_eq!(single[0].percentage, d("100"));

    let stats = category_stats(&txns, &[], march_2025(), TxnKind::Expense);
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].total, Decimal::MAX);
    assert_eq!(stats[0].percentage, d("100"));
    assert!(stats[1].percentage > d("1") && stats[1].percentage < d("2"));
}
