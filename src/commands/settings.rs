// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => {
            let settings = Settings::load(conn)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &settings)? {
                println!(
                    "{}",
                    pretty_table(
                        &["Setting", "Value"],
                        vec![vec!["currency".into(), settings.currency]],
                    )
                );
            }
        }
        Some(("set-currency", sub)) => {
            let ccy = sub.get_one::<String>("currency").unwrap();
            Settings::set_currency(conn, ccy)?;
            println!("Currency set to {}", Settings::load(conn)?.currency);
        }
        _ => {}
    }
    Ok(())
}
