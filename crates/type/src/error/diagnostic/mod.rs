// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod comment;
pub mod ddl;
pub mod engine;
pub mod execute;
pub mod model;
pub mod partition;
pub mod render;
pub mod r#type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
	Error,
	Warning,
}

impl Display for Severity {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Severity::Error => f.write_str("error"),
			Severity::Warning => f.write_str("warning"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub severity: Severity,
	pub statement: Option<String>,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

impl Diagnostic {
	pub fn is_error(&self) -> bool {
		self.severity == Severity::Error
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
	}
}

/// Returns true when at least one diagnostic is error-severity.
pub fn has_error(diagnostics: &[Diagnostic]) -> bool {
	diagnostics.iter().any(Diagnostic::is_error)
}
