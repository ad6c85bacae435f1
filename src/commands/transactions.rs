// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::db::{self, TransactionDraft};
use crate::models::{Category, CategoryLabel, TxnKind};
use crate::stats::{TransactionFilter, filter_transactions};
use crate::utils::{
    format_amount, id_for_category, maybe_print_json, parse_amount, parse_date, parse_month,
    pretty_table,
};
use anyhow::{Context, Result};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            db::delete_transaction(conn, id)?;
            println!("Deleted transaction {}", id);
        }
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let kind = sub.get_one::<String>("type").unwrap().parse::<TxnKind>()?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let category_id = match sub.get_one::<String>("category") {
        Some(name) => Some(id_for_category(conn, name)?),
        None => None,
    };
    let draft = TransactionDraft {
        kind,
        amount,
        date,
        category_id,
        description: sub.get_one::<String>("description").cloned(),
        notes: sub.get_one::<String>("notes").cloned(),
    };
    let id = db::insert_transaction(conn, &draft)?;
    println!("Recorded {} {} on {} (id {})", kind, amount, date, id);
    Ok(())
}

/// Applies only the fields given on the command line on top of the stored
/// transaction.
fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let current = db::transaction_by_id(conn, id)?
        .with_context(|| format!("Transaction {} not found", id))?;
    let mut draft = TransactionDraft {
        kind: current.kind,
        amount: current.amount,
        date: current.date,
        category_id: current.category_id,
        description: current.description,
        notes: current.notes,
    };
    if let Some(k) = sub.get_one::<String>("type") {
        draft.kind = k.parse()?;
    }
    if let Some(a) = sub.get_one::<String>("amount") {
        draft.amount = parse_amount(a)?;
    }
    if let Some(d) = sub.get_one::<String>("date") {
        draft.date = parse_date(d)?;
    }
    if let Some(name) = sub.get_one::<String>("category") {
        draft.category_id = Some(id_for_category(conn, name)?);
    }
    if sub.get_flag("clear-category") {
        draft.category_id = None;
    }
    if let Some(d) = sub.get_one::<String>("description") {
        draft.description = Some(d.clone());
    }
    if let Some(n) = sub.get_one::<String>("notes") {
        draft.notes = Some(n.clone());
    }
    db::update_transaction(conn, id, &draft)?;
    println!("Updated transaction {}", id);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let ccy = Settings::load(conn)?.currency;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.r#type.clone(),
                    r.category.clone(),
                    r.amount
                        .parse::<Decimal>()
                        .map(|d| format_amount(&d, &ccy))
                        .unwrap_or_else(|_| r.amount.clone()),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Type", "Category", "Amount", "Description"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub r#type: String,
    pub category: String,
    pub amount: String,
    pub description: String,
    pub notes: String,
}

/// Rows for `tx list`, newest first, after applying the command's filters.
pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let filter = TransactionFilter {
        month: sub
            .get_one::<String>("month")
            .map(|m| parse_month(m))
            .transpose()?,
        kind: sub
            .get_one::<String>("type")
            .map(|k| k.parse::<TxnKind>())
            .transpose()?,
        category_id: sub
            .get_one::<String>("category")
            .map(|c| id_for_category(conn, c))
            .transpose()?,
        search: sub.get_one::<String>("search").cloned(),
    };
    let transactions = db::load_transactions(conn)?;
    let categories = db::load_categories(conn)?;
    let names = category_names(&categories);
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);

    Ok(filter_transactions(&transactions, &filter)
        .into_iter()
        .take(limit)
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.to_string(),
            r#type: t.kind.to_string(),
            category: label_for(&names, t.category_id).to_string(),
            amount: t.amount.to_string(),
            description: t.description.clone().unwrap_or_default(),
            notes: t.notes.clone().unwrap_or_default(),
        })
        .collect())
}

pub(crate) fn category_names(categories: &[Category]) -> HashMap<i64, &str> {
    categories.iter().map(|c| (c.id, c.name.as_str())).collect()
}

pub(crate) fn label_for(names: &HashMap<i64, &str>, id: Option<i64>) -> CategoryLabel {
    id.and_then(|id| names.get(&id))
        .map(|n| CategoryLabel::Known((*n).to_string()))
        .unwrap_or(CategoryLabel::Unknown)
}
