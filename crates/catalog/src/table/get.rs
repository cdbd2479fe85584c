// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use chdecl_sql::parse_table;
use tracing::instrument;

use crate::{Catalog, DeclaredTable, Result, TableId, TableLookup, connection::lookup};

impl Catalog {
	/// Reads the live table back into the declaration it corresponds to.
	#[instrument(name = "catalog::table::get", level = "debug", skip_all, fields(id = %id))]
	pub fn get_table(&self, tables: &impl TableLookup, id: &TableId) -> Result<DeclaredTable> {
		let record = lookup(tables, &id.database, &id.name)?;
		let model = parse_table(&record)?;
		Ok(DeclaredTable::from_model(model))
	}
}
