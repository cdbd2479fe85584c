// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Tables whose rows live on a PostgreSQL server. Only the comment of such
//! a table can change in place.

mod create;
mod drop;
mod get;
mod update;
