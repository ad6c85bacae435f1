// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;
use std::fs;
use std::path::PathBuf;

use crate::error::ValidationError;
use crate::models::{Category, CategoryKind, Transaction, TxnKind};
use crate::utils::{check_amount, parse_amount, parse_date};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "SmartBudget", "smartbudget"));

pub const DB_ENV: &str = "SMARTBUDGET_DB";

const DEFAULT_CATEGORIES: &[(&str, &str, CategoryKind)] = &[
    ("Salary", "Wallet", CategoryKind::Income),
    ("Bonus", "Gift", CategoryKind::Income),
    ("Investments", "TrendingUp", CategoryKind::Income),
    ("Food", "ShoppingCart", CategoryKind::Expense),
    ("Transport", "Car", CategoryKind::Expense),
    ("Rent/Mortgage", "Home", CategoryKind::Expense),
    ("Entertainment", "Music", CategoryKind::Expense),
    ("Bills", "FileText", CategoryKind::Expense),
    ("Health", "Heart", CategoryKind::Expense),
    ("Shopping", "ShoppingBag", CategoryKind::Expense),
    ("Education", "GraduationCap", CategoryKind::Expense),
    ("Other", "MoreHorizontal", CategoryKind::Both),
];

pub fn db_path() -> Result<PathBuf> {
    if let Some(p) = std::env::var_os(DB_ENV) {
        return Ok(PathBuf::from(p));
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("smartbudget.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let mut conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&mut conn)?;
    tracing::debug!(path = %path.display(), "database ready");
    Ok(conn)
}

pub fn init_schema(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS categories(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        icon TEXT,
        kind TEXT NOT NULL CHECK(kind IN ('income','expense','both'))
    );

    CREATE TABLE IF NOT EXISTS transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        kind TEXT NOT NULL,
        amount TEXT NOT NULL,
        date TEXT NOT NULL,
        category_id INTEGER,
        description TEXT,
        notes TEXT,
        created_at TEXT NOT NULL DEFAULT (datetime('now')),
        FOREIGN KEY(category_id) REFERENCES categories(id) ON DELETE SET NULL
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
    "#,
    )?;
    seed_default_categories(conn)?;
    Ok(())
}

fn seed_default_categories(conn: &mut Connection) -> Result<()> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM categories", [], |r| r.get(0))?;
    if count > 0 {
        return Ok(());
    }
    let tx = conn.transaction()?;
    for (name, icon, kind) in DEFAULT_CATEGORIES {
        tx.execute(
            "INSERT INTO categories(name, icon, kind) VALUES (?1, ?2, ?3)",
            params![name, icon, kind.as_str()],
        )?;
    }
    tx.commit()?;
    tracing::info!(count = DEFAULT_CATEGORIES.len(), "seeded default categories");
    Ok(())
}

pub fn load_categories(conn: &Connection) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare("SELECT id, name, icon, kind FROM categories ORDER BY id")?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, Option<String>>(2)?,
            r.get::<_, String>(3)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (id, name, icon, kind) = row?;
        let kind = kind
            .parse::<CategoryKind>()
            .with_context(|| format!("Category {} ('{}') is malformed", id, name))?;
        out.push(Category {
            id,
            name,
            icon,
            kind,
        });
    }
    Ok(out)
}

pub fn category_by_id(conn: &Connection, id: i64) -> Result<Option<Category>> {
    Ok(load_categories(conn)?.into_iter().find(|c| c.id == id))
}

pub fn insert_category(
    conn: &Connection,
    name: &str,
    icon: Option<&str>,
    kind: CategoryKind,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO categories(name, icon, kind) VALUES (?1, ?2, ?3)",
        params![name, icon, kind.as_str()],
    )
    .with_context(|| format!("Could not add category '{}'", name))?;
    tracing::info!(name, kind = kind.as_str(), "category added");
    Ok(conn.last_insert_rowid())
}

/// Deletes a category. Foreign keys null out `category_id` on its
/// transactions, which then report under the unknown category.
pub fn delete_category(conn: &Connection, name: &str) -> Result<bool> {
    let n = conn.execute("DELETE FROM categories WHERE name=?1", params![name])?;
    if n > 0 {
        tracing::info!(name, "category removed");
    }
    Ok(n > 0)
}

/// Loads every transaction, rejecting the whole snapshot if any row is
/// malformed so that the calculators only ever see valid records.
pub fn load_transactions(conn: &Connection) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(
        "SELECT id, kind, amount, date, category_id, description, notes
         FROM transactions ORDER BY date, id",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, Option<i64>>(4)?,
            r.get::<_, Option<String>>(5)?,
            r.get::<_, Option<String>>(6)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (id, kind, amount, date, category_id, description, notes) = row?;
        let parsed = parse_row(&kind, &amount, &date).map_err(|e| {
            tracing::warn!(id, error = %e, "rejected malformed transaction row");
            e
        });
        let (kind, amount, date) =
            parsed.with_context(|| format!("Transaction {} is malformed", id))?;
        out.push(Transaction {
            id,
            kind,
            amount,
            date,
            category_id,
            description,
            notes,
        });
    }
    tracing::debug!(count = out.len(), "loaded transactions");
    Ok(out)
}

fn parse_row(
    kind: &str,
    amount: &str,
    date: &str,
) -> Result<(TxnKind, Decimal, NaiveDate), ValidationError> {
    Ok((kind.parse()?, parse_amount(amount)?, parse_date(date)?))
}

/// Fields a user supplies when recording or editing a transaction.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub kind: TxnKind,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category_id: Option<i64>,
    pub description: Option<String>,
    pub notes: Option<String>,
}

fn check_draft(conn: &Connection, draft: &TransactionDraft) -> Result<()> {
    check_amount(draft.amount)?;
    if let Some(cid) = draft.category_id {
        let Some(cat) = category_by_id(conn, cid)? else {
            bail!("Category {} not found", cid);
        };
        if !cat.kind.accepts(draft.kind) {
            return Err(ValidationError::CategoryKindMismatch {
                category: cat.name,
                kind: draft.kind.to_string(),
            }
            .into());
        }
    }
    Ok(())
}

pub fn insert_transaction(conn: &Connection, draft: &TransactionDraft) -> Result<i64> {
    check_draft(conn, draft)?;
    conn.execute(
        "INSERT INTO transactions(kind, amount, date, category_id, description, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            draft.kind.as_str(),
            draft.amount.to_string(),
            draft.date.to_string(),
            draft.category_id,
            draft.description,
            draft.notes
        ],
    )?;
    let id = conn.last_insert_rowid();
    tracing::info!(id, kind = draft.kind.as_str(), amount = %draft.amount, "transaction recorded");
    Ok(id)
}

pub fn update_transaction(conn: &Connection, id: i64, draft: &TransactionDraft) -> Result<()> {
    check_draft(conn, draft)?;
    let n = conn.execute(
        "UPDATE transactions
         SET kind=?1, amount=?2, date=?3, category_id=?4, description=?5, notes=?6
         WHERE id=?7",
        params![
            draft.kind.as_str(),
            draft.amount.to_string(),
            draft.date.to_string(),
            draft.category_id,
            draft.description,
            draft.notes,
            id
        ],
    )?;
    if n == 0 {
        bail!("Transaction {} not found", id);
    }
    tracing::info!(id, "transaction updated");
    Ok(())
}

pub fn delete_transaction(conn: &Connection, id: i64) -> Result<()> {
    let n = conn.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
    if n == 0 {
        bail!("Transaction {} not found", id);
    }
    tracing::info!(id, "transaction deleted");
    Ok(())
}

pub fn transaction_by_id(conn: &Connection, id: i64) -> Result<Option<Transaction>> {
    let row = conn
        .query_row(
            "SELECT kind, amount, date, category_id, description, notes
             FROM transactions WHERE id=?1",
            params![id],
            |r| {
                Ok((
                    r.get::<_, String>(0)?,
                    r.get::<_, String>(1)?,
                    r.get::<_, String>(2)?,
                    r.get::<_, Option<i64>>(3)?,
                    r.get::<_, Option<String>>(4)?,
                    r.get::<_, Option<String>>(5)?,
                ))
            },
        )
        .optional()?;
    let Some((kind, amount, date, category_id, description, notes)) = row else {
        return Ok(None);
    };
    let (kind, amount, date) = parse_row(&kind, &amount, &date)
        .with_context(|| format!("Transaction {} is malformed", id))?;
    Ok(Some(Transaction {
        id,
        kind,
        amount,
        date,
        category_id,
        description,
        notes,
    }))
}
