// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use chdecl_sql::{alter_comment, envelope};
use tracing::instrument;

use crate::{
	Catalog, DdlExecutor, DeclaredExternalTable, ExternalTableId, Result, TableLookup, connection::execute,
};

impl Catalog {
	/// Replaces the comment and returns the table as read back afterwards.
	#[instrument(name = "catalog::external::update_comment", level = "debug", skip_all, fields(id = %id))]
	pub fn update_external_comment<C>(
		&self,
		connection: &C,
		id: &ExternalTableId,
		comment: &str,
	) -> Result<DeclaredExternalTable>
	where
		C: TableLookup + DdlExecutor,
	{
		let envelope = envelope::encode(comment, "")?;
		let statement = alter_comment(&id.database, &id.name, None, &envelope);
		execute(connection, &statement)?;

		self.get_external_table(connection, id)
	}
}
