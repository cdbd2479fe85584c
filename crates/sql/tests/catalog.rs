// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use chdecl_sql::parse_table;
use chdecl_type::{CatalogRecord, TableModel};
use serde::Deserialize;
use test_each_file::test_each_file;

/// A catalog record and either the model it reads back into or the code
/// of the error reading it fails with.
#[derive(Debug, Deserialize)]
struct Fixture {
	record: CatalogRecord,
	#[serde(default)]
	expected: Option<TableModel>,
	#[serde(default)]
	error: Option<String>,
}

test_each_file! { in "crates/sql/tests/catalog" as catalog => run }

fn run(content: &str) {
	let fixture: Fixture = serde_json::from_str(content).expect("invalid fixture");
	let result = parse_table(&fixture.record);

	match (fixture.expected, fixture.error) {
		(Some(expected), None) => {
			let model = result.unwrap_or_else(|err| panic!("{err}"));
			assert_eq!(model, expected);
		}
		(None, Some(code)) => {
			let err = result.expect_err("expected the read to fail");
			assert_eq!(err.code, code, "{err}");
		}
		_ => panic!("fixture needs exactly one of `expected` or `error`"),
	}
}
