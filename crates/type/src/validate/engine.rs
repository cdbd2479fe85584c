// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{Result, diagnostic::engine::unknown_engine, return_error, vocabulary::ENGINES};

pub fn validate_engine(name: &str) -> Result<()> {
	if !ENGINES.contains(&name) {
		return_error!(unknown_engine(name));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_allowed_engines() {
		assert!(validate_engine("ReplicatedMergeTree").is_ok());
		assert!(validate_engine("ReplacingMergeTree").is_ok());
		assert!(validate_engine("Distributed").is_ok());
	}

	#[test]
	fn test_rejected_engine_message() {
		let err = validate_engine("MergeTree").unwrap_err();
		assert_eq!(err.code, "ENGINE_001");
		assert_eq!(
			err.message,
			r#""MergeTree" is not "ReplicatedMergeTree" "Distributed" "ReplacingMergeTree""#
		);
	}

	#[test]
	fn test_empty_engine_rejected() {
		assert!(validate_engine("").is_err());
	}
}
