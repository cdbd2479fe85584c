// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use chdecl_sql::drop_table;
use tracing::instrument;

use crate::{Catalog, DdlExecutor, Result, TableId, connection::execute};

impl Catalog {
	/// Drops the table on the cluster recorded in its identity.
	#[instrument(name = "catalog::table::drop", level = "debug", skip_all, fields(id = %id))]
	pub fn drop_table(&self, executor: &impl DdlExecutor, id: &TableId) -> Result<()> {
		let statement = drop_table(&id.database, &id.name, id.cluster());
		execute(executor, &statement)?;
		Ok(())
	}
}
