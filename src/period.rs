// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Calendar periods used by the report calculators.
//!
//! A [`YearMonth`] is always a valid calendar month; out-of-range month
//! numbers are rejected when the value is built instead of rolling over into
//! a neighbouring month. A [`DateRange`] is inclusive on both ends.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{ValidationError, ValidationResult};

const SHORT_MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// Builds a month from a 1-based month number (1 = January).
    pub fn new(year: i32, month: u32) -> ValidationResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::InvalidMonth(i64::from(month), "1-12"));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or_else(|| ValidationError::InvalidMonthText(format!("{year}-{month:02}")))
    }

    /// Builds a month from a 0-based month index (0 = January).
    pub fn from_month0(year: i32, month0: i32) -> ValidationResult<Self> {
        if !(0..12).contains(&month0) {
            return Err(ValidationError::InvalidMonth(i64::from(month0), "0-11"));
        }
        Self::new(year, month0 as u32 + 1)
    }

    /// Parses `YYYY-MM`.
    pub fn parse(s: &str) -> ValidationResult<Self> {
        let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidMonthText(s.to_string()))?;
        Ok(Self { first })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn month0(&self) -> u32 {
        self.first.month0()
    }

    pub fn short_name(&self) -> &'static str {
        SHORT_MONTH_NAMES[self.month0() as usize]
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        let (y, m) = (self.year(), self.month());
        let last = match m {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ => {
                if NaiveDate::from_ymd_opt(y, 2, 29).is_some() {
                    29
                } else {
                    28
                }
            }
        };
        NaiveDate::from_ymd_opt(y, m, last).unwrap_or(self.first)
    }

    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.first_day(),
            end: self.last_day(),
        }
    }

    /// Moves by `months` calendar months, wrapping across year boundaries.
    /// Returns `None` only when the result leaves chrono's supported range.
    pub fn shift(&self, months: i32) -> Option<Self> {
        let step = Months::new(months.unsigned_abs());
        let first = if months >= 0 {
            self.first.checked_add_months(step)?
        } else {
            self.first.checked_sub_months(step)?
        };
        Some(Self { first })
    }

    /// `MM/YYYY`, the label used on trend charts.
    pub fn label(&self) -> String {
        format!("{:02}/{}", self.month(), self.year())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year(), self.month())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> ValidationResult<Self> {
        if start > end {
            return Err(ValidationError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
