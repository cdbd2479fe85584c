// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, Severity};

pub fn execution_failed(reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "EXEC_001".to_string(),
		severity: Severity::Error,
		statement: None,
		message: format!("executing statement failed: {}", reason.into()),
		label: None,
		help: None,
		notes: vec![],
	}
}
