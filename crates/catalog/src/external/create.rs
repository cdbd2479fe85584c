// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use chdecl_sql::{create_external_table, envelope};
use tracing::instrument;

use crate::{Catalog, DdlExecutor, DeclaredExternalTable, ExternalTableId, Result, connection::execute};

impl Catalog {
	#[instrument(
		name = "catalog::external::create",
		level = "debug",
		skip_all,
		fields(database = %declared.database, table = %declared.name)
	)]
	pub fn create_external_table(
		&self,
		executor: &impl DdlExecutor,
		declared: DeclaredExternalTable,
	) -> Result<ExternalTableId> {
		let model = declared.into_model()?;

		let envelope = envelope::encode(&model.comment, "")?;
		let statement = create_external_table(&model, Some(&envelope));
		execute(executor, &statement)?;

		Ok(ExternalTableId::new(model.database, model.name))
	}
}
