// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use smartbudget::error::ValidationError;
use smartbudget::period::{DateRange, YearMonth};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn zero_based_month_is_validated() {
    assert_eq!(YearMonth::from_month0(2025, 0).unwrap().month(), 1);
    assert_eq!(YearMonth::from_month0(2025, 11).unwrap().month(), 12);
    assert_eq!(
        YearMonth::from_month0(2025, 12),
        Err(ValidationError::InvalidMonth(12, "0-11"))
    );
    assert!(YearMonth::from_month0(2025, -1).is_err());
    assert!(YearMonth::new(2025, 0).is_err());
    assert!(YearMonth::new(2025, 13).is_err());
}

#[test]
fn month_bounds() {
    let feb = YearMonth::new(2023, 2).unwrap();
    assert_eq!(feb.first_day(), date(2023, 2, 1));
    assert_eq!(feb.last_day(), date(2023, 2, 28));
    assert_eq!(YearMonth::new(2024, 2).unwrap().last_day(), date(2024, 2, 29));
    assert_eq!(YearMonth::new(2025, 4).unwrap().last_day(), date(2025, 4, 30));
    assert_eq!(YearMonth::new(2025, 12).unwrap().last_day(), date(2025, 12, 31));
}

#[test]
fn shift_wraps_years() {
    let jan = YearMonth::new(2025, 1).unwrap();
    assert_eq!(jan.shift(-1), Some(YearMonth::new(2024, 12).unwrap()));
    assert_eq!(jan.shift(-13), Some(YearMonth::new(2023, 12).unwrap()));
    assert_eq!(jan.shift(11), Some(YearMonth::new(2025, 12).unwrap()));
    assert_eq!(jan.shift(12), Some(YearMonth::new(2026, 1).unwrap()));
    assert_eq!(jan.shift(0), Some(jan));
}

#[test]
fn parse_and_display() {
    let m = YearMonth::parse("2025-03").unwrap();
    assert_eq!((m.year(), m.month(), m.month0()), (2025, 3, 2));
    assert_eq!(m.to_string(), "2025-03");
    assert_eq!(m.label(), "03/2025");
    assert_eq!(m.short_name(), "Mar");
    assert!(YearMonth::parse("2025-13").is_err());
    assert!(YearMonth::parse("March").is_err());
    assert_eq!(YearMonth::of(date(2025, 3, 31)), m);
}

#[test]
fn range_is_inclusive_and_ordered() {
    let r = DateRange::new(date(2025, 3, 1), date(2025, 3, 31)).unwrap();
    assert!(r.contains(date(2025, 3, 1)));
    assert!(r.contains(date(2025, 3, 31)));
    assert!(!r.contains(date(2025, 2, 28)));
    assert!(!r.contains(date(2025, 4, 1)));
    assert!(DateRange::new(date(2025, 3, 2), date(2025, 3, 1)).is_err());
    assert!(DateRange::new(date(2025, 3, 1), date(2025, 3, 1)).is_ok());
}
