// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, Severity};

pub fn missing_engine_constructor(engine_full: &str) -> Diagnostic {
	Diagnostic {
		code: "DDL_001".to_string(),
		severity: Severity::Error,
		statement: None,
		message: format!("engine signature {:?} has no recognizable engine constructor", engine_full),
		label: Some("expected `EngineName` or `EngineName(arg, ...)`".to_string()),
		help: None,
		notes: vec![],
	}
}

/// Scanner failure; the caller attaches the text it scanned.
pub fn unbalanced_ddl(reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "DDL_002".to_string(),
		severity: Severity::Error,
		statement: None,
		message: reason.into(),
		label: Some("malformed table definition".to_string()),
		help: None,
		notes: vec![],
	}
}

pub fn unexpected_engine(expected: &str, actual: &str) -> Diagnostic {
	Diagnostic {
		code: "DDL_003".to_string(),
		severity: Severity::Error,
		statement: None,
		message: format!("table engine is not {}, got: {}", expected, actual),
		label: None,
		help: Some(format!("only tables using the {} engine can be read by this resource", expected)),
		notes: vec![],
	}
}
