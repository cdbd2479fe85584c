// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::collections::HashSet;

use super::{validate_engine, validate_type};
use crate::{
	Diagnostic, TableModel,
	diagnostic::model::{
		cluster_on_single_node_engine, duplicate_column, empty_identifier, order_by_not_a_column,
		partition_by_not_a_column,
	},
};

/// Cross-checks the model against its own column list.
///
/// Every `order_by` field and every `partition_by` column must name a
/// declared column. Findings are accumulated, never short-circuited.
pub fn validate_model(model: &TableModel) -> Vec<Diagnostic> {
	let mut result = Vec::new();

	if model.database.is_empty() {
		result.push(empty_identifier("database"));
	}
	if model.name.is_empty() {
		result.push(empty_identifier("name"));
	}

	let mut seen = HashSet::new();
	for column in &model.columns {
		if !seen.insert(column.name.as_str()) {
			result.push(duplicate_column(&column.name));
		}
	}

	for field in &model.order_by {
		if !model.has_column(field) {
			result.push(order_by_not_a_column(field));
		}
	}

	for spec in &model.partition_by {
		if !model.has_column(&spec.column) {
			result.push(partition_by_not_a_column(&spec.column));
		}
	}

	result
}

/// Engine and column-type whitelists followed by [`validate_model`].
/// Only cluster engines may carry a cluster.
pub fn validate_definition(model: &TableModel) -> Vec<Diagnostic> {
	let mut result = Vec::new();

	match validate_engine(&model.engine) {
		Err(err) => result.push(err.diagnostic()),
		Ok(()) => {
			if let Some(cluster) = model.cluster()
				&& !model.is_clustered()
			{
				result.push(cluster_on_single_node_engine(&model.engine, cluster));
			}
		}
	}

	for column in &model.columns {
		if let Err(err) = validate_type(&column.ty) {
			let mut diagnostic = err.diagnostic();
			diagnostic.notes.push(format!("declared for column '{}'", column.name));
			result.push(diagnostic);
		}
	}

	result.extend(validate_model(model));
	result
}
