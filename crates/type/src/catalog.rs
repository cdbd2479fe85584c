// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// A table as reported by the column store's catalog.
///
/// Only the strings are interpreted; fetching the record is the job of the
/// caller's connection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogRecord {
	pub database: String,
	pub name: String,
	pub engine_full: String,
	pub engine: String,
	pub comment: String,
	/// Empty when the catalog does not expose the creation statement.
	pub create_table_query: String,
	pub columns: Vec<CatalogColumn>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogColumn {
	pub name: String,
	#[serde(rename = "type")]
	pub ty: String,
}

impl CatalogRecord {
	/// The text clause searches run over: the creation statement when
	/// present, the engine signature otherwise.
	pub fn definition(&self) -> &str {
		if self.create_table_query.trim().is_empty() {
			&self.engine_full
		} else {
			&self.create_table_query
		}
	}
}
