// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use chdecl_sql::{create_table, envelope};
use tracing::instrument;

use crate::{Catalog, DdlExecutor, DeclaredTable, Result, TableId, connection::execute};

impl Catalog {
	/// Validates the declaration, resolves its cluster and creates the table.
	/// Nothing is executed when the declaration is rejected.
	#[instrument(
		name = "catalog::table::create",
		level = "debug",
		skip_all,
		fields(database = %declared.database, table = %declared.name)
	)]
	pub fn create_table(&self, executor: &impl DdlExecutor, declared: DeclaredTable) -> Result<TableId> {
		let mut model = declared.into_model()?;
		model.cluster = self.config.resolve_cluster(&model.engine, model.cluster());

		let envelope = envelope::encode(&model.comment, model.cluster().unwrap_or_default())?;
		let statement = create_table(&model, Some(&envelope));
		execute(executor, &statement)?;

		Ok(TableId::new(model.cluster(), model.database.clone(), model.name.clone()))
	}
}
