// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! User declarations of tables, as they arrive from configuration and as
//! they are handed back after a read.

use chdecl_type::{
	Column, Diagnostic, ExternalTableModel, PartitionSpec, TableModel,
	validate::{parse_partition_function, validate_definition, validate_model, validate_type},
};
use serde::{Deserialize, Serialize};

use crate::{ResourceError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeclaredColumn {
	pub name: String,
	#[serde(rename = "type")]
	pub ty: String,
}

impl DeclaredColumn {
	pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			ty: ty.into(),
		}
	}
}

impl From<&DeclaredColumn> for Column {
	fn from(column: &DeclaredColumn) -> Self {
		Column::new(column.name.clone(), column.ty.clone())
	}
}

impl From<Column> for DeclaredColumn {
	fn from(column: Column) -> Self {
		DeclaredColumn::new(column.name, column.ty)
	}
}

/// One partition key element; an empty `partition_function` partitions by
/// the raw column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeclaredPartition {
	pub by: String,
	pub partition_function: String,
}

impl From<PartitionSpec> for DeclaredPartition {
	fn from(spec: PartitionSpec) -> Self {
		Self {
			by: spec.column,
			partition_function: spec.function.map(|function| function.name().to_string()).unwrap_or_default(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeclaredTable {
	pub database: String,
	pub name: String,
	pub engine: String,
	pub engine_params: Vec<String>,
	pub cluster: Option<String>,
	pub comment: String,
	#[serde(rename = "column")]
	pub columns: Vec<DeclaredColumn>,
	pub order_by: Vec<String>,
	pub partition_by: Vec<DeclaredPartition>,
}

impl DeclaredTable {
	/// Builds the model and runs every check against it. All findings are
	/// returned together, the model is built regardless.
	pub fn to_model(&self) -> (TableModel, Vec<Diagnostic>) {
		let mut diagnostics = Vec::new();

		let mut partition_by = Vec::with_capacity(self.partition_by.len());
		for partition in &self.partition_by {
			let function = match parse_partition_function(&partition.partition_function) {
				Ok(function) => function,
				Err(err) => {
					diagnostics.push(err.diagnostic());
					None
				}
			};
			partition_by.push(PartitionSpec {
				column: partition.by.clone(),
				function,
			});
		}

		let model = TableModel {
			database: self.database.clone(),
			name: self.name.clone(),
			engine: self.engine.clone(),
			engine_params: self.engine_params.clone(),
			cluster: self.cluster.clone().filter(|cluster| !cluster.is_empty()),
			comment: self.comment.clone(),
			columns: self.columns.iter().map(Column::from).collect(),
			order_by: self.order_by.clone(),
			partition_by,
		};

		diagnostics.extend(validate_definition(&model));
		(model, diagnostics)
	}

	/// The model, or every finding when at least one is an error.
	pub fn into_model(self) -> Result<TableModel> {
		let (model, diagnostics) = self.to_model();
		ResourceError::check(diagnostics)?;
		Ok(model)
	}

	/// The declaration a read-back model corresponds to.
	pub fn from_model(model: TableModel) -> Self {
		Self {
			database: model.database,
			name: model.name,
			engine: model.engine,
			engine_params: model.engine_params,
			cluster: model.cluster,
			comment: model.comment,
			columns: model.columns.into_iter().map(DeclaredColumn::from).collect(),
			order_by: model.order_by,
			partition_by: model.partition_by.into_iter().map(DeclaredPartition::from).collect(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeclaredExternalTable {
	pub database: String,
	pub name: String,
	pub engine_params: Vec<String>,
	pub comment: String,
	#[serde(rename = "column")]
	pub columns: Vec<DeclaredColumn>,
}

impl DeclaredExternalTable {
	pub fn to_model(&self) -> (ExternalTableModel, Vec<Diagnostic>) {
		let model = ExternalTableModel {
			database: self.database.clone(),
			name: self.name.clone(),
			engine_params: self.engine_params.clone(),
			comment: self.comment.clone(),
			columns: self.columns.iter().map(Column::from).collect(),
		};

		let mut diagnostics = Vec::new();
		for column in &model.columns {
			if let Err(err) = validate_type(&column.ty) {
				let mut diagnostic = err.diagnostic();
				diagnostic.notes.push(format!("declared for column '{}'", column.name));
				diagnostics.push(diagnostic);
			}
		}
		diagnostics.extend(validate_model(&TableModel {
			database: model.database.clone(),
			name: model.name.clone(),
			columns: model.columns.clone(),
			..Default::default()
		}));

		(model, diagnostics)
	}

	pub fn into_model(self) -> Result<ExternalTableModel> {
		let (model, diagnostics) = self.to_model();
		ResourceError::check(diagnostics)?;
		Ok(model)
	}

	pub fn from_model(model: ExternalTableModel) -> Self {
		Self {
			database: model.database,
			name: model.name,
			engine_params: model.engine_params,
			comment: model.comment,
			columns: model.columns.into_iter().map(DeclaredColumn::from).collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use chdecl_type::PartitionFunction;

	use super::*;

	fn declared() -> DeclaredTable {
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
				DeclaredColumn::new("value", "Nullable(Decimal(10, 2))"),
			],
			order_by: vec!["date".to_string(), "id".to_string()],
			partition_by: vec![DeclaredPartition {
				by: "date".to_string(),
				partition_function: "toYYYYMM".to_string(),
			}],
		}
	}

	#[test]
	fn test_valid_declaration() {
		let model = declared().into_model().unwrap();
		assert_eq!(model.partition_by, vec![PartitionSpec::bucketed("date", PartitionFunction::YearMonth)]);
		assert_eq!(model.columns[2], Column::new("value", "Nullable(Decimal(10, 2))"));
	}

	#[test]
	fn test_raw_partition() {
		let mut declared = declared();
		declared.partition_by[0].partition_function = String::new();
		assert_eq!(declared.into_model().unwrap().partition_by, vec![PartitionSpec::column("date")]);
	}

	#[test]
	fn test_all_findings_reported_together() {
		let mut declared = declared();
		declared.engine = "MergeTree".to_string();
		declared.columns[1].ty = "FooBar".to_string();
		declared.order_by.push("missing".to_string());
		declared.partition_by[0].partition_function = "toMonday".to_string();

		let (_, diagnostics) = declared.to_model();
		let codes: Vec<_> = diagnostics.iter().map(|d| d.code.as_str()).collect();
		assert_eq!(codes, vec!["PARTITION_001", "ENGINE_001", "TYPE_001", "MODEL_001"]);
		assert_eq!(diagnostics[2].notes, vec!["declared for column 'date'".to_string()]);

		match declared.into_model() {
			Err(ResourceError::Rejected(diagnostics)) => assert_eq!(diagnostics.len(), 4),
			other => panic!("expected rejection, got {other:?}"),
		}
	}

	#[test]
	fn test_empty_cluster_is_absent() {
		let mut declared = declared();
		declared.cluster = Some(String::new());
		assert_eq!(declared.into_model().unwrap().cluster, None);
	}

	#[test]
	fn test_from_model_rebuilds_partition_list() {
		let model = declared().into_model().unwrap();
		let rebuilt = DeclaredTable::from_model(model);
		assert_eq!(rebuilt, declared());
		assert_eq!(rebuilt.partition_by[0].partition_function, "toYYYYMM");
	}

	#[test]
	fn test_deserialize_declaration() {
		let declared: DeclaredTable = serde_json::from_str(
			r#"{
				"database": "dm",
				"name": "t",
				"engine": "ReplacingMergeTree",
				"column": [{ "name": "id", "type": "Int64" }],
				"order_by": ["id"],
				"partition_by": [{ "by": "id" }]
			}"#,
		)
		.unwrap();
		assert_eq!(declared.cluster, None);
		assert_eq!(declared.partition_by[0].partition_function, "");
		assert!(declared.into_model().is_ok());
	}

	#[test]
	fn test_external_declaration() {
		let declared = DeclaredExternalTable {
			database: "dm".to_string(),
			name: "orders".to_string(),
			engine_params: vec!["'pg:5432'".to_string()],
			comment: String::new(),
			columns: vec![DeclaredColumn::new("id", "Int64"), DeclaredColumn::new("id", "Blob")],
		};
		let (_, diagnostics) = declared.to_model();
		let codes: Vec<_> = diagnostics.iter().map(|d| d.code.as_str()).collect();
		assert_eq!(codes, vec!["TYPE_001", "MODEL_003"]);
	}
}
