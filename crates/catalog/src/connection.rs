// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Collaborators the lifecycle operations are run against.

use chdecl_type::{
	CatalogRecord,
	diagnostic::{catalog::table_not_found, execute::execution_failed},
	error,
};
use tracing::debug;

/// Opaque failure reported by a collaborator.
pub type ExecutionError = Box<dyn std::error::Error + Send + Sync>;

/// Reads table metadata from the live catalog.
pub trait TableLookup {
	/// `Ok(None)` when no such table exists.
	fn get_table(&self, database: &str, name: &str) -> Result<Option<CatalogRecord>, ExecutionError>;
}

/// Runs a rendered statement.
pub trait DdlExecutor {
	fn execute(&self, statement: &str) -> Result<(), ExecutionError>;
}

impl<T: TableLookup + ?Sized> TableLookup for &T {
	fn get_table(&self, database: &str, name: &str) -> Result<Option<CatalogRecord>, ExecutionError> {
		(**self).get_table(database, name)
	}
}

impl<T: DdlExecutor + ?Sized> DdlExecutor for &T {
	fn execute(&self, statement: &str) -> Result<(), ExecutionError> {
		(**self).execute(statement)
	}
}

pub(crate) fn execute(executor: &impl DdlExecutor, statement: &str) -> chdecl_type::Result<()> {
	debug!(statement, "executing");
	executor.execute(statement).map_err(|err| error!(execution_failed(err.to_string())).with_statement(statement))
}

pub(crate) fn lookup(tables: &impl TableLookup, database: &str, name: &str) -> chdecl_type::Result<CatalogRecord> {
	match tables.get_table(database, name) {
		Ok(Some(record)) => Ok(record),
		Ok(None) => Err(error!(table_not_found(database, name))),
		Err(err) => Err(error!(execution_failed(err.to_string()))),
	}
}
