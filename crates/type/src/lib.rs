// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod catalog;
pub mod error;
pub mod model;
pub mod validate;
pub mod vocabulary;

pub use catalog::{CatalogColumn, CatalogRecord};
pub use error::{
	Error, IntoDiagnostic,
	diagnostic::{self, Diagnostic, Severity},
};
pub use model::{Column, ExternalTableModel, PartitionFunction, PartitionSpec, TableModel};

pub type Result<T> = std::result::Result<T, Error>;
