// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Statement rendering.
//!
//! Every statement is a list of clauses, each present or absent, joined
//! with a single space. Absent clauses contribute nothing.

use chdecl_type::{Column, ExternalTableModel, PartitionSpec, TableModel, vocabulary::EXTERNAL_ENGINE};
use tracing::{debug, instrument};

use crate::token::quote_literal;

fn join(clauses: impl IntoIterator<Item = Option<String>>) -> String {
	clauses.into_iter().flatten().collect::<Vec<_>>().join(" ")
}

fn on_cluster(cluster: Option<&str>) -> Option<String> {
	cluster.filter(|cluster| !cluster.is_empty()).map(|cluster| format!("ON CLUSTER {cluster}"))
}

fn columns(columns: &[Column]) -> Option<String> {
	if columns.is_empty() {
		return None;
	}
	let definitions: Vec<_> = columns.iter().map(|column| format!("{} {}", column.name, column.ty)).collect();
	Some(format!("({})", definitions.join(", ")))
}

fn engine(name: &str, params: &[String]) -> Option<String> {
	Some(format!("ENGINE = {}({})", name, params.join(", ")))
}

fn order_by(fields: &[String]) -> Option<String> {
	if fields.is_empty() {
		return None;
	}
	Some(format!("ORDER BY {}", fields.join(", ")))
}

fn partition_by(specs: &[PartitionSpec]) -> Option<String> {
	match specs {
		[] => None,
		[spec] => Some(format!("PARTITION BY {}", spec.expression())),
		specs => {
			let expressions: Vec<_> = specs.iter().map(PartitionSpec::expression).collect();
			Some(format!("PARTITION BY ({})", expressions.join(", ")))
		}
	}
}

fn comment(envelope: Option<&str>) -> Option<String> {
	envelope.map(|envelope| format!("COMMENT {}", quote_literal(envelope)))
}

/// `CREATE TABLE` for a managed table.
///
/// `envelope` is the already encoded comment slot; `None` leaves the
/// `COMMENT` clause out.
#[instrument(name = "sql::create_table", level = "debug", skip_all, fields(table = %model.qualified_name()))]
pub fn create_table(model: &TableModel, envelope: Option<&str>) -> String {
	let statement = join([
		Some(format!("CREATE TABLE {}", model.qualified_name())),
		on_cluster(model.cluster()),
		columns(&model.columns),
		engine(&model.engine, &model.engine_params),
		order_by(&model.order_by),
		partition_by(&model.partition_by),
		comment(envelope),
	]);
	debug!(%statement, "rendered");
	statement
}

/// `CREATE TABLE` for a PostgreSQL-backed table. No cluster, ordering or
/// partitioning clauses exist for this shape.
#[instrument(name = "sql::create_external_table", level = "debug", skip_all, fields(table = %model.qualified_name()))]
pub fn create_external_table(model: &ExternalTableModel, envelope: Option<&str>) -> String {
	let statement = join([
		Some(format!("CREATE TABLE {}", model.qualified_name())),
		columns(&model.columns),
		engine(EXTERNAL_ENGINE, &model.engine_params),
		comment(envelope),
	]);
	debug!(%statement, "rendered");
	statement
}

/// Replaces only the comment slot of an existing table.
pub fn alter_comment(database: &str, name: &str, cluster: Option<&str>, envelope: &str) -> String {
	join([
		Some(format!("ALTER TABLE {database}.{name}")),
		on_cluster(cluster),
		Some(format!("MODIFY COMMENT {}", quote_literal(envelope))),
	])
}

pub fn drop_table(database: &str, name: &str, cluster: Option<&str>) -> String {
	join([Some(format!("DROP TABLE {database}.{name}")), on_cluster(cluster)])
}
