// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, Severity};

pub fn table_not_found(database: &str, name: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_001".to_string(),
		severity: Severity::Error,
		statement: None,
		message: format!("table '{}.{}' not found", database, name),
		label: None,
		help: None,
		notes: vec![],
	}
}

pub fn invalid_resource_id(id: &str, expected: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_002".to_string(),
		severity: Severity::Error,
		statement: None,
		message: format!("resource id {:?} is not of the form {}", id, expected),
		label: None,
		help: None,
		notes: vec![],
	}
}
