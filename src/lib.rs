// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! SmartBudget: household income and expense tracking.
//!
//! The reporting core lives in [`stats`] and [`period`] and works on plain
//! in-memory snapshots; [`db`] and [`commands`] wrap it in a SQLite-backed
//! CLI.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod period;
pub mod stats;
pub mod utils;
pub mod commands;
