// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use chdecl_catalog::{DeclaredColumn, DeclaredExternalTable, DeclaredPartition, DeclaredTable};
use chdecl_type::{CatalogColumn, CatalogRecord};

/// Replicated table on `bi_cluster`, ordered by `(date, id)` and
/// partitioned by month.
pub fn declared_table() -> DeclaredTable {
	DeclaredTable {
		database: "dm".to_string(),
		name: "test_table".to_string(),
		engine: "ReplicatedMergeTree".to_string(),
		engine_params: vec!["'/clickhouse/tables/{shard}/dm/test_table'".to_string(), "'{replica}'".to_string()],
		cluster: Some("bi_cluster".to_string()),
		comment: "test".to_string(),
		columns: vec![
			DeclaredColumn::new("id", "Int64"),
			DeclaredColumn::new("date", "Date"),
			DeclaredColumn::new("value", "String"),
		],
		order_by: vec!["date".to_string(), "id".to_string()],
		partition_by: vec![DeclaredPartition {
			by: "date".to_string(),
			partition_function: "toYYYYMM".to_string(),
		}],
	}
}

pub fn declared_external_table() -> DeclaredExternalTable {
	DeclaredExternalTable {
		database: "dm".to_string(),
		name: "orders".to_string(),
		engine_params: ["'pg:5432'", "'shop'", "'orders'", "'reader'", "'secret'", "'public'"]
			.into_iter()
			.map(str::to_string)
			.collect(),
		comment: "orders mirrored from the shop".to_string(),
		columns: vec![DeclaredColumn::new("id", "Int64"), DeclaredColumn::new("total", "Decimal(18, 2)")],
	}
}

/// A table created by hand, its comment not an envelope.
pub fn foreign_record() -> CatalogRecord {
	CatalogRecord {
		database: "dm".to_string(),
		name: "manual".to_string(),
		engine_full: "ReplicatedMergeTree('/clickhouse/tables/{shard}/dm/manual', '{replica}') ORDER BY id".to_string(),
		engine: "ReplicatedMergeTree".to_string(),
		comment: "created by hand".to_string(),
		create_table_query: String::new(),
		columns: vec![CatalogColumn {
			name: "id".to_string(),
			ty: "Int64".to_string(),
		}],
	}
}
