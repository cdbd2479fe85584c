// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use chdecl_type::{Diagnostic, Error, diagnostic::has_error};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResourceError {
	/// Every finding of one declaration, at least one of them an error.
	#[error("declaration rejected with {} finding(s)", .0.len())]
	Rejected(Vec<Diagnostic>),

	#[error(transparent)]
	Failed(#[from] Error),
}

impl ResourceError {
	/// `Err(Rejected)` when any finding is error-severity.
	pub fn check(diagnostics: Vec<Diagnostic>) -> Result<(), ResourceError> {
		if has_error(&diagnostics) {
			return Err(ResourceError::Rejected(diagnostics));
		}
		Ok(())
	}

	pub fn diagnostics(&self) -> Vec<&Diagnostic> {
		match self {
			ResourceError::Rejected(diagnostics) => diagnostics.iter().collect(),
			ResourceError::Failed(err) => vec![&err.0],
		}
	}
}

impl From<Diagnostic> for ResourceError {
	fn from(diagnostic: Diagnostic) -> Self {
		ResourceError::Failed(Error(diagnostic))
	}
}
