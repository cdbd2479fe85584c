// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod config;
pub mod connection;
pub mod declare;
mod error;
pub mod external;
pub mod id;
pub mod table;

pub use config::CatalogConfig;
pub use connection::{DdlExecutor, ExecutionError, TableLookup};
pub use declare::{DeclaredColumn, DeclaredExternalTable, DeclaredPartition, DeclaredTable};
pub use error::ResourceError;
pub use id::{ExternalTableId, TableId};

pub type Result<T> = std::result::Result<T, ResourceError>;

/// Entry point of every table lifecycle operation. Holds no connection;
/// each operation borrows the collaborator it needs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	config: CatalogConfig,
}

impl Catalog {
	pub fn new(config: CatalogConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn config(&self) -> &CatalogConfig {
		&self.config
	}
}
