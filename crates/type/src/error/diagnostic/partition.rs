// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, Severity};
use crate::vocabulary::PARTITION_FUNCTIONS;

pub fn unknown_partition_function(value: &str) -> Diagnostic {
	Diagnostic {
		code: "PARTITION_001".to_string(),
		severity: Severity::Error,
		statement: None,
		message: format!("{:?} is not {:?}", value, PARTITION_FUNCTIONS.join(" ")),
		label: Some("unsupported partition function".to_string()),
		help: Some("leave the partition function empty to partition by the raw column".to_string()),
		notes: vec![],
	}
}
