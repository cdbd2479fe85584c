// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	PartitionFunction, Result, diagnostic::partition::unknown_partition_function, return_error,
	vocabulary::PARTITION_FUNCTIONS,
};

/// Accepts the empty string (raw column partitioning) or a bucketing function.
pub fn validate_partition_function(name: &str) -> Result<()> {
	if !name.is_empty() && !PARTITION_FUNCTIONS.contains(&name) {
		return_error!(unknown_partition_function(name));
	}
	Ok(())
}

pub fn parse_partition_function(name: &str) -> Result<Option<PartitionFunction>> {
	validate_partition_function(name)?;
	Ok(PartitionFunction::from_name(name))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_is_raw_column() {
		assert!(validate_partition_function("").is_ok());
		assert_eq!(parse_partition_function("").unwrap(), None);
	}

	#[test]
	fn test_bucketing_functions() {
		assert_eq!(parse_partition_function("toYYYYMM").unwrap(), Some(PartitionFunction::YearMonth));
		assert_eq!(parse_partition_function("toYYYYMMDD").unwrap(), Some(PartitionFunction::YearMonthDay));
		assert_eq!(
			parse_partition_function("toYYYYMMDDhhmmss").unwrap(),
			Some(PartitionFunction::YearMonthDayTime)
		);
	}

	#[test]
	fn test_rejected_function_message() {
		let err = validate_partition_function("toMonday").unwrap_err();
		assert_eq!(err.code, "PARTITION_001");
		assert_eq!(err.message, r#""toMonday" is not "toYYYYMM toYYYYMMDD toYYYYMMDDhhmmss""#);
	}
}
