// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Managed tables: engines from the allowed set, optionally on a cluster.

mod create;
mod drop;
mod get;
