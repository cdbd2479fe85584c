// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{
	CatalogColumn,
	vocabulary::{TO_YYYYMM, TO_YYYYMMDD, TO_YYYYMMDDHHMMSS, is_cluster_engine},
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	#[serde(rename = "type")]
	pub ty: String,
}

impl Column {
	pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			ty: ty.into(),
		}
	}
}

impl From<&CatalogColumn> for Column {
	fn from(column: &CatalogColumn) -> Self {
		Column::new(column.name.clone(), column.ty.clone())
	}
}

/// Date-bucketing function wrapping a partition column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartitionFunction {
	#[serde(rename = "toYYYYMM")]
	YearMonth,
	#[serde(rename = "toYYYYMMDD")]
	YearMonthDay,
	#[serde(rename = "toYYYYMMDDhhmmss")]
	YearMonthDayTime,
}

impl PartitionFunction {
	pub fn name(&self) -> &'static str {
		match self {
			PartitionFunction::YearMonth => TO_YYYYMM,
			PartitionFunction::YearMonthDay => TO_YYYYMMDD,
			PartitionFunction::YearMonthDayTime => TO_YYYYMMDDHHMMSS,
		}
	}

	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			TO_YYYYMM => Some(PartitionFunction::YearMonth),
			TO_YYYYMMDD => Some(PartitionFunction::YearMonthDay),
			TO_YYYYMMDDHHMMSS => Some(PartitionFunction::YearMonthDayTime),
			_ => None,
		}
	}
}

impl Display for PartitionFunction {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartitionSpec {
	pub column: String,
	#[serde(default)]
	pub function: Option<PartitionFunction>,
}

impl PartitionSpec {
	pub fn column(column: impl Into<String>) -> Self {
		Self {
			column: column.into(),
			function: None,
		}
	}

	pub fn bucketed(column: impl Into<String>, function: PartitionFunction) -> Self {
		Self {
			column: column.into(),
			function: Some(function),
		}
	}

	/// The partition expression as it appears after `PARTITION BY`.
	pub fn expression(&self) -> String {
		match self.function {
			Some(function) => format!("{}({})", function, self.column),
			None => self.column.clone(),
		}
	}
}

/// Canonical in-memory description of a managed table.
///
/// `order_by` and `partition_by` name entries of `columns`; they do not own
/// them. Column order is the physical layout and is preserved end to end.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableModel {
	pub database: String,
	pub name: String,
	pub engine: String,
	/// Engine constructor arguments, verbatim.
	pub engine_params: Vec<String>,
	pub cluster: Option<String>,
	pub comment: String,
	pub columns: Vec<Column>,
	pub order_by: Vec<String>,
	pub partition_by: Vec<PartitionSpec>,
}

impl TableModel {
	pub fn has_column(&self, name: &str) -> bool {
		self.columns.iter().any(|column| column.name == name)
	}

	pub fn column(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|column| column.name == name)
	}

	/// `database.name`
	pub fn qualified_name(&self) -> String {
		format!("{}.{}", self.database, self.name)
	}

	pub fn is_clustered(&self) -> bool {
		is_cluster_engine(&self.engine)
	}

	pub fn cluster(&self) -> Option<&str> {
		self.cluster.as_deref().filter(|cluster| !cluster.is_empty())
	}
}

/// A table whose data lives on an external PostgreSQL server.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalTableModel {
	pub database: String,
	pub name: String,
	pub engine_params: Vec<String>,
	pub comment: String,
	pub columns: Vec<Column>,
}

impl ExternalTableModel {
	pub fn qualified_name(&self) -> String {
		format!("{}.{}", self.database, self.name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_partition_expression() {
		assert_eq!(PartitionSpec::column("region").expression(), "region");
		assert_eq!(PartitionSpec::bucketed("date", PartitionFunction::YearMonth).expression(), "toYYYYMM(date)");
		assert_eq!(
			PartitionSpec::bucketed("ts", PartitionFunction::YearMonthDayTime).expression(),
			"toYYYYMMDDhhmmss(ts)"
		);
	}

	#[test]
	fn test_partition_function_names() {
		for function in
			[PartitionFunction::YearMonth, PartitionFunction::YearMonthDay, PartitionFunction::YearMonthDayTime]
		{
			assert_eq!(PartitionFunction::from_name(function.name()), Some(function));
		}
		assert_eq!(PartitionFunction::from_name("toMonday"), None);
		assert_eq!(PartitionFunction::from_name(""), None);
	}

	#[test]
	fn test_partition_function_serde_uses_function_name() {
		let json = serde_json::to_string(&PartitionSpec::bucketed("d", PartitionFunction::YearMonthDay)).unwrap();
		assert_eq!(json, r#"{"column":"d","function":"toYYYYMMDD"}"#);
	}

	#[test]
	fn test_empty_cluster_is_absent() {
		let mut model = TableModel {
			cluster: Some(String::new()),
			..Default::default()
		};
		assert_eq!(model.cluster(), None);
		model.cluster = Some("bi_cluster".to_string());
		assert_eq!(model.cluster(), Some("bi_cluster"));
	}

	#[test]
	fn test_has_column() {
		let model = TableModel {
			columns: vec![Column::new("id", "Int64"), Column::new("date", "Date")],
			..Default::default()
		};
		assert!(model.has_column("date"));
		assert!(!model.has_column("Date"));
		assert_eq!(model.column("id").map(|c| c.ty.as_str()), Some("Int64"));
	}
}
