// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use chdecl_sql::drop_table;
use tracing::instrument;

use crate::{Catalog, DdlExecutor, ExternalTableId, Result, connection::execute};

impl Catalog {
	#[instrument(name = "catalog::external::drop", level = "debug", skip_all, fields(id = %id))]
	pub fn drop_external_table(&self, executor: &impl DdlExecutor, id: &ExternalTableId) -> Result<()> {
		execute(executor, &drop_table(&id.database, &id.name, None))?;
		Ok(())
	}
}
