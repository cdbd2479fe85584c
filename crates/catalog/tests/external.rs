// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use chdecl_catalog::{Catalog, ExternalTableId, ResourceError};
use chdecl_sub_tracing::TracingBuilder;
use chdecl_testing::{MemoryConnection, fixture};

fn setup() -> (Catalog, MemoryConnection) {
	TracingBuilder::for_tests().try_init();
	(Catalog::default(), MemoryConnection::new())
}

#[test]
fn test_create_external_table() {
	let (catalog, connection) = setup();

	let id = catalog.create_external_table(&connection, fixture::declared_external_table()).unwrap();
	assert_eq!(id.to_string(), "dm:orders");
	assert_eq!(
		connection.statements()[0],
		"CREATE TABLE dm.orders (id Int64, total Decimal(18, 2)) \
		 ENGINE = PostgreSQL('pg:5432', 'shop', 'orders', 'reader', 'secret', 'public') \
		 COMMENT '{\"comment\":\"orders mirrored from the shop\",\"cluster\":\"\"}'"
	);
}

#[test]
fn test_create_then_read_round_trips() {
	let (catalog, connection) = setup();
	let declared = fixture::declared_external_table();

	let id = catalog.create_external_table(&connection, declared.clone()).unwrap();
	assert_eq!(catalog.get_external_table(&connection, &id).unwrap(), declared);
}

#[test]
fn test_update_comment_only() {
	let (catalog, connection) = setup();
	let id = catalog.create_external_table(&connection, fixture::declared_external_table()).unwrap();

	let updated = catalog.update_external_comment(&connection, &id, "it's nightly").unwrap();
	assert_eq!(updated.comment, "it's nightly");
	assert_eq!(updated.engine_params, fixture::declared_external_table().engine_params);
	assert_eq!(
		connection.statements()[1],
		r#"ALTER TABLE dm.orders MODIFY COMMENT '{"comment":"it\'s nightly","cluster":""}'"#
	);
}

#[test]
fn test_read_rejects_managed_table() {
	let (catalog, connection) = setup();
	catalog.create_table(&connection, fixture::declared_table()).unwrap();

	let id = ExternalTableId::new("dm", "test_table");
	match catalog.get_external_table(&connection, &id) {
		Err(ResourceError::Failed(err)) => {
			assert_eq!(err.code, "DDL_003");
			assert_eq!(err.message, "table engine is not PostgreSQL, got: ReplicatedMergeTree");
		}
		other => panic!("expected engine mismatch, got {other:?}"),
	}
}

#[test]
fn test_drop_external_table() {
	let (catalog, connection) = setup();
	let id = catalog.create_external_table(&connection, fixture::declared_external_table()).unwrap();

	catalog.drop_external_table(&connection, &id).unwrap();
	assert_eq!(connection.statements()[1], "DROP TABLE dm.orders");
	assert!(connection.is_empty());
}
