// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::db;
use crate::models::{CategoryStats, ComparisonEntry, MonthlyStats, TxnKind};
use crate::period::{DateRange, YearMonth};
use crate::stats;
use crate::utils::{format_amount, maybe_print_json, parse_date, parse_month, pretty_table};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("month", sub)) => month(conn, sub)?,
        Some(("categories", sub)) => categories(conn, sub)?,
        Some(("compare", sub)) => compare(conn, sub)?,
        Some(("year", sub)) => year(conn, sub)?,
        _ => {}
    }
    Ok(())
}

/// The reporting "now": `--as-of` when given, otherwise the local date, read
/// once per command.
pub fn today(sub: &clap::ArgMatches) -> Result<NaiveDate> {
    match sub.get_one::<String>("as-of") {
        Some(s) => Ok(parse_date(s)?),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn selected_month(sub: &clap::ArgMatches) -> Result<YearMonth> {
    match sub.get_one::<String>("month") {
        Some(m) => Ok(parse_month(m)?),
        None => Ok(YearMonth::of(today(sub)?)),
    }
}

#[derive(Serialize)]
pub struct MonthReport {
    pub month: String,
    #[serde(flatten)]
    pub stats: MonthlyStats,
    pub income_by_category: Vec<CategoryStats>,
    pub expenses_by_category: Vec<CategoryStats>,
}

pub fn month_report(conn: &Connection, month: YearMonth) -> Result<MonthReport> {
    let transactions = db::load_transactions(conn)?;
    let categories = db::load_categories(conn)?;
    Ok(MonthReport {
        month: month.to_string(),
        stats: stats::monthly_stats(&transactions, month),
        income_by_category: stats::category_stats(
            &transactions,
            &categories,
            month,
            TxnKind::Income,
        ),
        expenses_by_category: stats::category_stats(
            &transactions,
            &categories,
            month,
            TxnKind::Expense,
        ),
    })
}

fn month(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let month = selected_month(sub)?;
    let report = month_report(conn, month)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        return Ok(());
    }
    let ccy = Settings::load(conn)?.currency;
    println!("{} {}", month.short_name(), month.year());
    println!(
        "{}",
        pretty_table(
            &["Income", "Expenses", "Balance"],
            vec![vec![
                format_amount(&report.stats.total_income, &ccy),
                format_amount(&report.stats.total_expenses, &ccy),
                format_amount(&report.stats.balance, &ccy),
            ]],
        )
    );
    print_breakdown("Income by category", &report.income_by_category, &ccy);
    print_breakdown("Expenses by category", &report.expenses_by_category, &ccy);
    Ok(())
}

fn print_breakdown(title: &str, rows: &[CategoryStats], ccy: &str) {
    println!("{}", title);
    if rows.is_empty() {
        println!("  (nothing recorded)");
        return;
    }
    let data = rows
        .iter()
        .map(|s| {
            vec![
                s.label.to_string(),
                format_amount(&s.total, ccy),
                format!("{:.1}%", s.percentage),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Total", "Share"], data));
}

fn categories(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let kind = sub.get_one::<String>("type").unwrap().parse::<TxnKind>()?;
    let range = match (sub.get_one::<String>("from"), sub.get_one::<String>("to")) {
        (Some(from), Some(to)) => DateRange::new(parse_date(from)?, parse_date(to)?)?,
        _ => selected_month(sub)?.range(),
    };
    let transactions = db::load_transactions(conn)?;
    let categories = db::load_categories(conn)?;
    let rows = stats::category_stats_in_range(&transactions, &categories, kind, range);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        let ccy = Settings::load(conn)?.currency;
        print_breakdown(
            &format!("{} by category, {} to {}", kind, range.start(), range.end()),
            &rows,
            &ccy,
        );
    }
    Ok(())
}

fn compare(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let months = *sub.get_one::<usize>("months").unwrap_or(&6);
    let offset = *sub.get_one::<u32>("offset").unwrap_or(&0);
    let today = today(sub)?;
    let transactions = db::load_transactions(conn)?;
    let series = stats::comparison_series(&transactions, months, offset, today);
    print_series(conn, sub, &series)
}

fn year(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let year = match sub.get_one::<i32>("year") {
        Some(y) => *y,
        None => today(sub)?.year(),
    };
    let transactions = db::load_transactions(conn)?;
    let series = stats::yearly_series(&transactions, year);
    print_series(conn, sub, &series)
}

fn print_series(
    conn: &Connection,
    sub: &clap::ArgMatches,
    series: &[ComparisonEntry],
) -> Result<()> {
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &series)? {
        return Ok(());
    }
    let ccy = Settings::load(conn)?.currency;
    let data = series
        .iter()
        .map(|e| {
            vec![
                e.month_label.clone(),
                e.month_name.to_string(),
                format_amount(&e.income, &ccy),
                format_amount(&e.expenses, &ccy),
                format_amount(&(e.income - e.expenses), &ccy),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Month", "Name", "Income", "Expenses", "Net"], data)
    );
    Ok(())
}
