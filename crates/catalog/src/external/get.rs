// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use chdecl_sql::parse_external_table;
use tracing::instrument;

use crate::{Catalog, DeclaredExternalTable, ExternalTableId, Result, TableLookup, connection::lookup};

impl Catalog {
	#[instrument(name = "catalog::external::get", level = "debug", skip_all, fields(id = %id))]
	pub fn get_external_table(&self, tables: &impl TableLookup, id: &ExternalTableId) -> Result<DeclaredExternalTable> {
		let record = lookup(tables, &id.database, &id.name)?;
		let model = parse_external_table(&record)?;
		Ok(DeclaredExternalTable::from_model(model))
	}
}
