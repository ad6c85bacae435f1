// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;

pub const DEFAULT_CURRENCY: &str = "ILS";

/// User preferences kept in the `settings` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.into(),
        }
    }
}

impl Settings {
    pub fn load(conn: &Connection) -> Result<Self> {
        let currency = get(conn, "currency")?.unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        Ok(Self { currency })
    }

    pub fn set_currency(conn: &Connection, ccy: &str) -> Result<()> {
        let ccy = ccy.trim().to_uppercase();
        if ccy.len() != 3 || !ccy.chars().all(|c| c.is_ascii_alphabetic()) {
            bail!("Invalid currency '{}', expected a 3-letter code", ccy);
        }
        put(conn, "currency", &ccy)?;
        tracing::info!(currency = %ccy, "currency updated");
        Ok(())
    }
}

fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            params![key],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v)
}

fn put(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}
