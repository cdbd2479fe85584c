// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The table comment slot carries a JSON object holding the user comment
//! and the cluster name together.

use chdecl_type::{
	Result,
	diagnostic::comment::{envelope_encoding_failed, malformed_envelope},
	return_error,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Envelope {
	pub comment: String,
	pub cluster: String,
}

impl Envelope {
	pub fn new(comment: impl Into<String>, cluster: impl Into<String>) -> Self {
		Self {
			comment: comment.into(),
			cluster: cluster.into(),
		}
	}

	/// The cluster, `None` when the envelope records none.
	pub fn cluster(&self) -> Option<&str> {
		Some(self.cluster.as_str()).filter(|cluster| !cluster.is_empty())
	}

	pub fn encode(&self) -> Result<String> {
		match serde_json::to_string(self) {
			Ok(encoded) => Ok(encoded),
			Err(err) => return_error!(envelope_encoding_failed(err.to_string())),
		}
	}
}

#[instrument(name = "envelope::encode", level = "trace", skip_all)]
pub fn encode(comment: &str, cluster: &str) -> Result<String> {
	Envelope::new(comment, cluster).encode()
}

/// Decodes the comment slot. A slot that does not hold a JSON object,
/// including an empty one, is an error.
#[instrument(name = "envelope::decode", level = "trace")]
pub fn decode(value: &str) -> Result<Envelope> {
	if !value.trim_start().starts_with('{') {
		return_error!(malformed_envelope(value, "expected a JSON object"));
	}
	match serde_json::from_str(value) {
		Ok(envelope) => Ok(envelope),
		Err(err) => return_error!(malformed_envelope(value, err.to_string())),
	}
}
