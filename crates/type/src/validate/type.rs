// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{Result, diagnostic::r#type::unknown_type, return_error, vocabulary::COLUMN_TYPES};

const NULLABLE: &str = "Nullable(";

/// Accepts a column type whose bare name is whitelisted, after stripping at
/// most one `Nullable(...)` wrapper and any parameter list.
pub fn validate_type(value: &str) -> Result<()> {
	let base = strip_nullable(value);
	match bare_name(base) {
		Some(name) if COLUMN_TYPES.contains(&name) => Ok(()),
		_ => return_error!(unknown_type(value)),
	}
}

fn strip_nullable(value: &str) -> &str {
	let Some(inner) = value.strip_prefix(NULLABLE) else {
		return value;
	};
	match closing_paren(inner) {
		Some(end) if end + 1 == inner.len() => &inner[..end],
		_ => value,
	}
}

/// `Type(args)` -> `Type`; `None` when the parameter list is not closed by
/// the final character.
fn bare_name(ty: &str) -> Option<&str> {
	match ty.find('(') {
		None => Some(ty),
		Some(0) => None,
		Some(open) => {
			let args = &ty[open + 1..];
			match closing_paren(args) {
				Some(end) if end + 1 == args.len() => Some(&ty[..open]),
				_ => None,
			}
		}
	}
}

/// Position of the `)` that closes a parenthesis opened just before `s`.
fn closing_paren(s: &str) -> Option<usize> {
	let mut depth = 0usize;
	for (idx, c) in s.char_indices() {
		match c {
			'(' => depth += 1,
			')' if depth == 0 => return Some(idx),
			')' => depth -= 1,
			_ => {}
		}
	}
	None
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_plain_types() {
		for ty in ["UInt8", "Int256", "Float64", "Bool", "String", "UUID", "Date32", "DateTime", "JSON"] {
			assert!(validate_type(ty).is_ok(), "{ty}");
		}
	}

	#[test]
	fn test_parameterized_types() {
		assert!(validate_type("Decimal(10, 2)").is_ok());
		assert!(validate_type("DateTime64(6)").is_ok());
		assert!(validate_type("DateTime64(3, 'Europe/Moscow')").is_ok());
		assert!(validate_type("LowCardinality(String)").is_ok());
		assert!(validate_type("LowCardinality(Nullable(String))").is_ok());
	}

	#[test]
	fn test_nullable_wrapping_parameterized_type() {
		assert!(validate_type("Nullable(Decimal(10,2))").is_ok());
		assert!(validate_type("Nullable(Decimal(10, 2))").is_ok());
		assert!(validate_type("Nullable(DateTime64(6))").is_ok());
		assert!(validate_type("Nullable(UUID)").is_ok());
	}

	#[test]
	fn test_unbalanced_nullable_rejected() {
		assert!(validate_type("Nullable(").is_err());
		assert!(validate_type("Nullable(Int8").is_err());
		assert!(validate_type("Nullable(Decimal(10,2)").is_err());
		assert!(validate_type("Decimal(10,2").is_err());
	}

	#[test]
	fn test_only_one_nullable_level_stripped() {
		assert!(validate_type("Nullable(Nullable(Int8))").is_err());
		assert!(validate_type("Nullable").is_err());
	}

	#[test]
	fn test_unknown_type_names_whitelist() {
		let err = validate_type("FooBar").unwrap_err();
		assert_eq!(err.code, "TYPE_001");
		assert!(err.message.starts_with("\"FooBar\" is not a valid type. Allowed types: [UInt8 UInt16"));
		assert!(err.message.ends_with("LowCardinality JSON Decimal]"));
	}

	#[test]
	fn test_error_names_full_value() {
		let err = validate_type("Nullable(FooBar(1))").unwrap_err();
		assert!(err.message.starts_with("\"Nullable(FooBar(1))\" is not a valid type"));
	}

	#[test]
	fn test_type_names_are_case_sensitive() {
		assert!(validate_type("string").is_err());
		assert!(validate_type("uuid").is_err());
	}
}
