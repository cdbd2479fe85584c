// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use chdecl_type::vocabulary::is_cluster_engine;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
	/// Cluster used for cluster engines declared without one.
	pub default_cluster: Option<String>,
}

impl CatalogConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_default_cluster(mut self, cluster: impl Into<String>) -> Self {
		self.default_cluster = Some(cluster.into());
		self
	}

	/// The cluster a table runs on. Single-node engines never get one;
	/// cluster engines get the declared cluster, otherwise the default.
	pub fn resolve_cluster(&self, engine: &str, declared: Option<&str>) -> Option<String> {
		if !is_cluster_engine(engine) {
			return None;
		}
		match declared.filter(|cluster| !cluster.is_empty()) {
			Some(cluster) => Some(cluster.to_string()),
			None => self.default_cluster.clone().filter(|cluster| !cluster.is_empty()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_declared_cluster_wins() {
		let config = CatalogConfig::new().with_default_cluster("default");
		assert_eq!(config.resolve_cluster("ReplicatedMergeTree", Some("bi")), Some("bi".to_string()));
		assert_eq!(config.resolve_cluster("Distributed", Some("bi")), Some("bi".to_string()));
	}

	#[test]
	fn test_single_node_engine_never_gets_cluster() {
		let config = CatalogConfig::new().with_default_cluster("default");
		assert_eq!(config.resolve_cluster("ReplacingMergeTree", Some("bi")), None);
		assert_eq!(config.resolve_cluster("ReplacingMergeTree", None), None);
	}

	#[test]
	fn test_default_only_for_cluster_engines() {
		let config = CatalogConfig::new().with_default_cluster("default");
		assert_eq!(config.resolve_cluster("ReplicatedMergeTree", None), Some("default".to_string()));
		assert_eq!(config.resolve_cluster("Distributed", Some("")), Some("default".to_string()));
		assert_eq!(config.resolve_cluster("ReplacingMergeTree", None), None);
	}

	#[test]
	fn test_without_default() {
		assert_eq!(CatalogConfig::new().resolve_cluster("ReplicatedMergeTree", None), None);
		let blank = CatalogConfig::new().with_default_cluster("");
		assert_eq!(blank.resolve_cluster("Distributed", None), None);
	}

	#[test]
	fn test_deserialize() {
		let config: CatalogConfig = serde_json::from_str(r#"{"default_cluster":"bi_cluster"}"#).unwrap();
		assert_eq!(config.default_cluster.as_deref(), Some("bi_cluster"));
		let config: CatalogConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config, CatalogConfig::default());
	}
}
