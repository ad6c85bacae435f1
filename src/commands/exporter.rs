// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::transactions::{category_names, label_for};
use crate::db;
use crate::stats::{TransactionFilter, filter_transactions};
use crate::utils::{format_date, parse_month};
use anyhow::{Context, Result, bail};
use rusqlite::Connection;
use serde_json::json;
use std::io::Write;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }
    let filter = TransactionFilter {
        month: sub
            .get_one::<String>("month")
            .map(|m| parse_month(m))
            .transpose()?,
        ..Default::default()
    };

    let transactions = db::load_transactions(conn)?;
    let categories = db::load_categories(conn)?;
    let names = category_names(&categories);
    let mut selected = filter_transactions(&transactions, &filter);
    selected.reverse(); // oldest first in files

    if fmt == "csv" {
        let mut file = std::fs::File::create(out).with_context(|| format!("Create {}", out))?;
        // BOM so spreadsheet apps detect UTF-8 category names
        file.write_all(UTF8_BOM)?;
        let mut wtr = csv::Writer::from_writer(file);
        wtr.write_record(["date", "type", "category", "amount", "description"])?;
        for t in &selected {
            wtr.write_record([
                format_date(t.date),
                t.kind.to_string(),
                label_for(&names, t.category_id).to_string(),
                t.amount.to_string(),
                t.description.clone().unwrap_or_default(),
            ])?;
        }
        wtr.flush()?;
    } else {
        let items: Vec<_> = selected
            .iter()
            .map(|t| {
                json!({
                    "id": t.id,
                    "date": t.date.to_string(),
                    "type": t.kind.as_str(),
                    "category": label_for(&names, t.category_id).name(),
                    "amount": t.amount.to_string(),
                    "description": t.description,
                    "notes": t.notes,
                })
            })
            .collect();
        std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
    }
    tracing::info!(count = selected.len(), path = %out, "exported transactions");
    println!("Exported {} transactions to {}", selected.len(), out);
    Ok(())
}
