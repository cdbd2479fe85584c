// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Translation between table models and column-store table definitions.
//!
//! [`parse`] reads catalog records back into models, [`emit`] renders
//! models into statements, [`envelope`] packs comment and cluster into the
//! single comment slot a table offers.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod emit;
pub mod envelope;
pub mod parse;
pub mod token;

pub use emit::{alter_comment, create_external_table, create_table, drop_table};
pub use envelope::Envelope;
pub use parse::{EngineSignature, parse_engine, parse_external_table, parse_order_by, parse_partition_by, parse_table};
