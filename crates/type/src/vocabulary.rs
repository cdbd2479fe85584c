// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Closed vocabularies the validators check declarations against.

/// Bare column type names, after one `Nullable(...)` wrapper and any
/// parameter list have been stripped.
pub const COLUMN_TYPES: &[&str] = &[
	"UInt8",
	"UInt16",
	"UInt32",
	"UInt64",
	"UInt128",
	"UInt256",
	"Int8",
	"Int16",
	"Int32",
	"Int64",
	"Int128",
	"Int256",
	"Float32",
	"Float64",
	"Bool",
	"String",
	"UUID",
	"Date",
	"Date32",
	"DateTime",
	"DateTime64",
	"LowCardinality",
	"JSON",
	"Decimal",
];

pub const REPLICATED_MERGE_TREE: &str = "ReplicatedMergeTree";
pub const REPLACING_MERGE_TREE: &str = "ReplacingMergeTree";
pub const DISTRIBUTED: &str = "Distributed";

/// Engines a managed table may be declared with.
pub const ENGINES: &[&str] = &[REPLICATED_MERGE_TREE, DISTRIBUTED, REPLACING_MERGE_TREE];

/// Engines that operate on a cluster and therefore take an `ON CLUSTER` clause.
pub const CLUSTER_ENGINES: &[&str] = &[REPLICATED_MERGE_TREE, DISTRIBUTED];

/// Engine of external tables backed by a PostgreSQL server.
pub const EXTERNAL_ENGINE: &str = "PostgreSQL";

pub const TO_YYYYMM: &str = "toYYYYMM";
pub const TO_YYYYMMDD: &str = "toYYYYMMDD";
pub const TO_YYYYMMDDHHMMSS: &str = "toYYYYMMDDhhmmss";

/// Date-bucketing functions usable inside a partition key.
pub const PARTITION_FUNCTIONS: &[&str] = &[TO_YYYYMM, TO_YYYYMMDD, TO_YYYYMMDDHHMMSS];

pub fn is_cluster_engine(engine: &str) -> bool {
	CLUSTER_ENGINES.contains(&engine)
}
