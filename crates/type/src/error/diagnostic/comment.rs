// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, Severity};

pub fn malformed_envelope(value: &str, reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "COMMENT_001".to_string(),
		statement: None,
		severity: Severity::Error,
		message: format!("table comment {:?} is not a valid comment envelope", value),
		label: Some("malformed comment envelope".to_string()),
		help: Some(
			"the comment slot must hold a JSON object with \"comment\" and \"cluster\" fields; \
			 tables created outside this tool carry no envelope"
				.to_string(),
		),
		notes: vec![reason.into()],
	}
}

pub fn envelope_encoding_failed(reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "COMMENT_002".to_string(),
		statement: None,
		severity: Severity::Error,
		message: "failed to encode comment envelope".to_string(),
		label: None,
		help: None,
		notes: vec![reason.into()],
	}
}
