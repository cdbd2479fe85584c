// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Whitelist validators and the model consistency check.
//!
//! The single-value validators fail fast with an [`Error`](crate::Error);
//! the model-level checks accumulate every finding so a declaration can be
//! fixed in one pass.

mod engine;
mod model;
mod partition;
mod r#type;

pub use engine::validate_engine;
pub use model::{validate_definition, validate_model};
pub use partition::{parse_partition_function, validate_partition_function};
pub use r#type::validate_type;
