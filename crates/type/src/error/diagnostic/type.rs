// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, Severity};
use crate::vocabulary::COLUMN_TYPES;

pub fn unknown_type(value: &str) -> Diagnostic {
	Diagnostic {
		code: "TYPE_001".to_string(),
		severity: Severity::Error,
		statement: None,
		message: format!("{:?} is not a valid type. Allowed types: [{}]", value, COLUMN_TYPES.join(" ")),
		label: Some("unsupported column type".to_string()),
		help: Some(
			"use one of the allowed types, optionally wrapped once in Nullable(...) or carrying a parameter list"
				.to_string(),
		),
		notes: vec![],
	}
}
