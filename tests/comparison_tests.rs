// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use smartbudget::models::{Transaction, TxnKind};
use smartbudget::stats::{comparison_series, yearly_series};

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn txn(id: i64, kind: TxnKind, amount: &str, on: &str) -> Transaction {
    Transaction {
        id,
        kind,
        amount: d(amount),
        date: date(on),
        category_id: None,
        description: None,
        notes: None,
    }
}

fn sample() -> Vec<Transaction> {
    vec![
        txn(1, TxnKind::Income, "1000", "2025-01-10"),
        txn(2, TxnKind::Expense, "300", "2025-01-31"),
        txn(3, TxnKind::Expense, "120", "2025-02-01"),
        txn(4, TxnKind::Income, "1000", "2025-03-01"),
        txn(5, TxnKind::Expense, "400", "2025-03-15"),
        txn(6, TxnKind::Expense, "80", "2024-11-30"),
        txn(7, TxnKind::Income, "50", "2024-12-31"),
    ]
}

#[test]
fn three_months_ending_now() {
    let series = comparison_series(&sample(), 3, 0, date("2025-03-20"));
    let labels: Vec<&str> = series.iter().map(|e| e.month_label.as_str()).collect();
    assert_eq!(labels, vec!["01/2025", "02/2025", "03/2025"]);
    assert_eq!(series[0].income, d("1000"));
    assert_eq!(series[0].expenses, d("300"));
    assert_eq!(series[1].income, Decimal::ZERO);
    assert_eq!(series[1].expenses, d("120"));
    assert_eq!(series[2].income, d("1000"));
    assert_eq!(series[2].expenses, d("400"));
    assert_eq!(series[2].month_name, "Mar");
}

#[test]
fn offset_pages_into_previous_year() {
    let series = comparison_series(&sample(), 3, 3, date("2025-03-20"));
    let months: Vec<(i32, u32)> = series.iter().map(|e| (e.year, e.month)).collect();
    assert_eq!(months, vec![(2024, 10), (2024, 11), (2024, 12)]);
    assert_eq!(series[0].income, Decimal::ZERO);
    assert_eq!(series[0].expenses, Decimal::ZERO);
    assert_eq!(series[1].expenses, d("80"));
    assert_eq!(series[2].income, d("50"));
}

#[test]
fn six_month_window_is_ascending_and_ends_on_current_month() {
    let series = comparison_series(&sample(), 6, 0, date("2025-03-01"));
    assert_eq!(series.len(), 6);
    let last = series.last().unwrap();
    assert_eq!((last.year, last.month), (2025, 3));
    assert!(
        series
            .windows(2)
            .all(|w| (w[0].year, w[0].month) < (w[1].year, w[1].month))
    );
}

#[test]
fn window_spanning_new_year_switches_year() {
    let series = comparison_series(&[], 4, 0, date("2025-02-10"));
    let months: Vec<(i32, u32)> = series.iter().map(|e| (e.year, e.month)).collect();
    assert_eq!(months, vec![(2024, 11), (2024, 12), (2025, 1), (2025, 2)]);
    assert_eq!(series[1].month_label, "12/2024");
    assert_eq!(series[2].month_name, "Jan");
}

#[test]
fn zero_width_window_is_empty() {
    assert!(comparison_series(&sample(), 0, 0, date("2025-03-20")).is_empty());
    assert!(comparison_series(&sample(), 0, 5, date("2025-03-20")).is_empty());
}

#[test]
fn same_inputs_same_series() {
    let txns = sample();
    let a = comparison_series(&txns, 12, 2, date("2025-03-20"));
    let b = comparison_series(&txns, 12, 2, date("2025-03-20"));
    assert_eq!(a, b);
    assert_eq!(a.len(), 12);
}

#[test]
fn yearly_series_covers_every_month() {
    let series = yearly_series(&sample(), 2025);
    assert_eq!(series.len(), 12);
    assert_eq!(series[0].month_label, "01/2025");
    assert_eq!(series[11].month_label, "12/2025");
    assert!(series.iter().all(|e| e.year == 2025));
    assert_eq!(series[2].expenses, d("400"));
    assert_eq!(series[5].income, Decimal::ZERO);
}

#[test]
fn offsets_beyond_the_calendar_drop_months() {
    assert!(comparison_series(&sample(), 3, u32::MAX, date("2025-03-20")).is_empty());
    assert!(comparison_series(&sample(), 3, 4_000_000, date("2025-03-20")).is_empty());
}
