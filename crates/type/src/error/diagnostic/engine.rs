// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, Severity};
use crate::vocabulary::ENGINES;

pub fn unknown_engine(value: &str) -> Diagnostic {
	let allowed = ENGINES.iter().map(|engine| format!("{engine:?}")).collect::<Vec<_>>().join(" ");
	Diagnostic {
		code: "ENGINE_001".to_string(),
		severity: Severity::Error,
		statement: None,
		message: format!("{:?} is not {}", value, allowed),
		label: Some("unsupported table engine".to_string()),
		help: Some(format!("choose one of: {}", ENGINES.join(", "))),
		notes: vec![],
	}
}
