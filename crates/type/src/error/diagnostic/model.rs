// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, Severity};

pub fn order_by_not_a_column(field: &str) -> Diagnostic {
	Diagnostic {
		code: "MODEL_001".to_string(),
		severity: Severity::Error,
		statement: None,
		message: format!("order by field '{}' is not a column", field),
		label: Some("not a declared column".to_string()),
		help: Some(format!("declare a column named '{}' or remove it from order_by", field)),
		notes: vec![],
	}
}

pub fn partition_by_not_a_column(field: &str) -> Diagnostic {
	Diagnostic {
		code: "MODEL_002".to_string(),
		severity: Severity::Error,
		statement: None,
		message: format!("partition by field '{}' is not a column", field),
		label: Some("not a declared column".to_string()),
		help: Some(format!("declare a column named '{}' or remove it from partition_by", field)),
		notes: vec![],
	}
}

pub fn duplicate_column(name: &str) -> Diagnostic {
	Diagnostic {
		code: "MODEL_003".to_string(),
		severity: Severity::Error,
		statement: None,
		message: format!("column '{}' is declared more than once", name),
		label: Some("duplicate column name".to_string()),
		help: Some("column names must be unique within a table".to_string()),
		notes: vec![],
	}
}

pub fn empty_identifier(what: &str) -> Diagnostic {
	Diagnostic {
		code: "MODEL_004".to_string(),
		severity: Severity::Error,
		statement: None,
		message: format!("table {} must not be empty", what),
		label: Some("empty identifier".to_string()),
		help: None,
		notes: vec![],
	}
}

pub fn cluster_on_single_node_engine(engine: &str, cluster: &str) -> Diagnostic {
	Diagnostic {
		code: "MODEL_005".to_string(),
		severity: Severity::Error,
		statement: None,
		message: format!("engine {} does not run on a cluster, got cluster '{}'", engine, cluster),
		label: Some("cluster not allowed for this engine".to_string()),
		help: Some("declare a cluster only for ReplicatedMergeTree or Distributed tables".to_string()),
		notes: vec![],
	}
}
