// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use chdecl_type::{Error, diagnostic::catalog::invalid_resource_id, error};

/// Identity of a managed table: `<cluster>:<database>:<name>`, with an
/// empty first segment for single-node tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableId {
	pub cluster: Option<String>,
	pub database: String,
	pub name: String,
}

impl TableId {
	pub fn new(cluster: Option<&str>, database: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			cluster: cluster.filter(|cluster| !cluster.is_empty()).map(str::to_string),
			database: database.into(),
			name: name.into(),
		}
	}

	pub fn cluster(&self) -> Option<&str> {
		self.cluster.as_deref()
	}
}

impl Display for TableId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}:{}", self.cluster.as_deref().unwrap_or_default(), self.database, self.name)
	}
}

impl FromStr for TableId {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.splitn(3, ':').collect::<Vec<_>>().as_slice() {
			[cluster, database, name] if !database.is_empty() && !name.is_empty() => {
				Ok(TableId::new(Some(cluster), *database, *name))
			}
			_ => Err(error!(invalid_resource_id(s, "<cluster>:<database>:<name>"))),
		}
	}
}

/// Identity of a PostgreSQL-backed table: `<database>:<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExternalTableId {
	pub database: String,
	pub name: String,
}

impl ExternalTableId {
	pub fn new(database: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			database: database.into(),
			name: name.into(),
		}
	}
}

impl Display for ExternalTableId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}", self.database, self.name)
	}
}

impl FromStr for ExternalTableId {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.split_once(':') {
			Some((database, name)) if !database.is_empty() && !name.is_empty() && !name.contains(':') => {
				Ok(ExternalTableId::new(database, name))
			}
			_ => Err(error!(invalid_resource_id(s, "<database>:<name>"))),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_table_id_text_form() {
		let id = TableId::new(Some("bi_cluster"), "dm", "t");
		assert_eq!(id.to_string(), "bi_cluster:dm:t");
		assert_eq!("bi_cluster:dm:t".parse::<TableId>().unwrap(), id);
	}

	#[test]
	fn test_table_id_without_cluster() {
		let id = TableId::new(None, "dm", "t");
		assert_eq!(id.to_string(), ":dm:t");
		assert_eq!(":dm:t".parse::<TableId>().unwrap().cluster(), None);
	}

	#[test]
	fn test_table_id_rejects_malformed() {
		for text in ["", "dm:t", "c::t", "c:dm:", "c"] {
			let err = text.parse::<TableId>().unwrap_err();
			assert_eq!(err.code, "CATALOG_002", "text={text:?}");
		}
	}

	#[test]
	fn test_external_id() {
		let id = ExternalTableId::new("dm", "orders");
		assert_eq!(id.to_string(), "dm:orders");
		assert_eq!("dm:orders".parse::<ExternalTableId>().unwrap(), id);
		for text in ["dm", ":orders", "dm:", "c:dm:orders"] {
			assert!(text.parse::<ExternalTableId>().is_err(), "text={text:?}");
		}
	}
}
