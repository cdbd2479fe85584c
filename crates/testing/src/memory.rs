// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! In-memory stand-in for a column-store server.
//!
//! Applies the statements it is given to a map of catalog records, the way
//! the server would report them afterwards: `engine_full` without the
//! comment, the comment unquoted, `create_table_query` verbatim.

use std::{collections::BTreeMap, sync::Arc};

use chdecl_catalog::{DdlExecutor, ExecutionError, TableLookup};
use chdecl_sql::token::{Token, TokenKind, matching_paren, split_top_level, tokenize, unquote_literal};
use chdecl_type::{CatalogColumn, CatalogRecord};
use parking_lot::{Mutex, RwLock};

type Key = (String, String);

#[derive(Debug, Clone, Default)]
pub struct MemoryConnection {
	tables: Arc<RwLock<BTreeMap<Key, CatalogRecord>>>,
	statements: Arc<Mutex<Vec<String>>>,
	fail_next: Arc<Mutex<Option<String>>>,
}

impl MemoryConnection {
	pub fn new() -> Self {
		Self::default()
	}

	/// Seeds a table as if it had been created out of band.
	pub fn insert(&self, record: CatalogRecord) {
		self.tables.write().insert((record.database.clone(), record.name.clone()), record);
	}

	pub fn table(&self, database: &str, name: &str) -> Option<CatalogRecord> {
		self.tables.read().get(&(database.to_string(), name.to_string())).cloned()
	}

	pub fn len(&self) -> usize {
		self.tables.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.tables.read().is_empty()
	}

	/// Every statement handed to [`DdlExecutor::execute`], failed ones included.
	pub fn statements(&self) -> Vec<String> {
		self.statements.lock().clone()
	}

	/// Makes the next call fail with `message` without applying anything.
	pub fn fail_next(&self, message: impl Into<String>) {
		*self.fail_next.lock() = Some(message.into());
	}

	fn take_failure(&self) -> Result<(), ExecutionError> {
		match self.fail_next.lock().take() {
			Some(message) => Err(message.into()),
			None => Ok(()),
		}
	}

	fn apply(&self, statement: &str) -> Result<(), ExecutionError> {
		let tokens = tokenize(statement)?;
		let words: Vec<&str> = tokens
			.iter()
			.filter(|t| t.kind == TokenKind::Word && t.is_top_level())
			.take(2)
			.map(|t| t.text(statement))
			.collect();

		match words.as_slice() {
			["CREATE", "TABLE"] => self.create(statement, &tokens),
			["ALTER", "TABLE"] => self.alter_comment(statement, &tokens),
			["DROP", "TABLE"] => self.drop(statement),
			_ => Err(format!("unsupported statement: {statement}").into()),
		}
	}

	fn create(&self, statement: &str, tokens: &[Token]) -> Result<(), ExecutionError> {
		let key = qualified_name(statement)?;
		if self.tables.read().contains_key(&key) {
			return Err(format!("table {}.{} already exists", key.0, key.1).into());
		}

		let engine_at = keyword(statement, tokens, "ENGINE").ok_or("missing ENGINE clause")?;
		let comment_at = comment_keyword(statement, tokens);

		let mut columns = Vec::new();
		let column_list = (0..engine_at).find(|&idx| tokens[idx].kind == TokenKind::OpenParen && tokens[idx].is_top_level());
		if let Some(open) = column_list {
			let close = matching_paren(tokens, open).ok_or("unbalanced column list")?;
			for definition in split_top_level(&statement[tokens[open].end..tokens[close].start])? {
				let (name, ty) = definition.split_once(' ').ok_or("column without type")?;
				columns.push(CatalogColumn {
					name: name.to_string(),
					ty: ty.trim().to_string(),
				});
			}
		}

		let engine_end = comment_at.map(|idx| tokens[idx].start).unwrap_or(statement.len());
		let engine_full =
			statement[tokens[engine_at].end..engine_end].trim().trim_start_matches('=').trim().to_string();
		let engine: String = engine_full.chars().take_while(|c| c.is_ascii_alphanumeric() || *c == '_').collect();

		let comment = match comment_at {
			Some(idx) => literal_after(statement, tokens, idx)?,
			None => String::new(),
		};

		let record = CatalogRecord {
			database: key.0.clone(),
			name: key.1.clone(),
			engine_full,
			engine,
			comment,
			create_table_query: statement.to_string(),
			columns,
		};
		self.tables.write().insert(key, record);
		Ok(())
	}

	fn alter_comment(&self, statement: &str, tokens: &[Token]) -> Result<(), ExecutionError> {
		let key = qualified_name(statement)?;
		let comment_at = keyword(statement, tokens, "COMMENT").ok_or("only MODIFY COMMENT is supported")?;
		let comment = literal_after(statement, tokens, comment_at)?;

		let mut tables = self.tables.write();
		let record = tables.get_mut(&key).ok_or_else(|| format!("table {}.{} does not exist", key.0, key.1))?;
		record.comment = comment;
		Ok(())
	}

	fn drop(&self, statement: &str) -> Result<(), ExecutionError> {
		let key = qualified_name(statement)?;
		match self.tables.write().remove(&key) {
			Some(_) => Ok(()),
			None => Err(format!("table {}.{} does not exist", key.0, key.1).into()),
		}
	}
}

/// `database.name` following the leading `<VERB> TABLE`.
fn qualified_name(statement: &str) -> Result<Key, ExecutionError> {
	let qualified = statement
		.split_whitespace()
		.nth(2)
		.map(|word| word.split('(').next().unwrap_or(word))
		.ok_or("missing table name")?;
	let (database, name) = qualified.split_once('.').ok_or("table name must be qualified")?;
	Ok((database.to_string(), name.to_string()))
}

fn keyword(statement: &str, tokens: &[Token], keyword: &str) -> Option<usize> {
	tokens.iter().position(|t| t.kind == TokenKind::Word && t.is_top_level() && t.text(statement) == keyword)
}

/// The `COMMENT` keyword that introduces a literal, skipping columns of that name.
fn comment_keyword(statement: &str, tokens: &[Token]) -> Option<usize> {
	(0..tokens.len()).find(|&idx| {
		let token = &tokens[idx];
		token.kind == TokenKind::Word
			&& token.is_top_level()
			&& token.text(statement) == "COMMENT"
			&& tokens[idx + 1..]
				.iter()
				.find(|t| t.kind != TokenKind::Whitespace)
				.is_some_and(|t| t.kind == TokenKind::Literal)
	})
}

fn literal_after(statement: &str, tokens: &[Token], idx: usize) -> Result<String, ExecutionError> {
	let literal = tokens[idx + 1..]
		.iter()
		.find(|t| t.kind != TokenKind::Whitespace)
		.filter(|t| t.kind == TokenKind::Literal)
		.ok_or("expected a string literal")?;
	Ok(unquote_literal(literal.text(statement)).ok_or("malformed string literal")?)
}

impl TableLookup for MemoryConnection {
	fn get_table(&self, database: &str, name: &str) -> Result<Option<CatalogRecord>, ExecutionError> {
		self.take_failure()?;
		Ok(self.table(database, name))
	}
}

impl DdlExecutor for MemoryConnection {
	fn execute(&self, statement: &str) -> Result<(), ExecutionError> {
		self.statements.lock().push(statement.to_string());
		self.take_failure()?;
		self.apply(statement)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const CREATE: &str = "CREATE TABLE dm.t ON CLUSTER bi_cluster (id Int64, amount Nullable(Decimal(10, 2))) \
		ENGINE = ReplicatedMergeTree('/p', '{replica}') ORDER BY id COMMENT '{\"comment\":\"it\\'s\",\"cluster\":\"bi_cluster\"}'";

	#[test]
	fn test_create_records_table() {
		let connection = MemoryConnection::new();
		connection.execute(CREATE).unwrap();

		let record = connection.table("dm", "t").unwrap();
		assert_eq!(record.engine, "ReplicatedMergeTree");
		assert_eq!(record.engine_full, "ReplicatedMergeTree('/p', '{replica}') ORDER BY id");
		assert_eq!(record.comment, r#"{"comment":"it's","cluster":"bi_cluster"}"#);
		assert_eq!(record.columns.len(), 2);
		assert_eq!(record.columns[1].ty, "Nullable(Decimal(10, 2))");
		assert_eq!(record.create_table_query, CREATE);
	}

	#[test]
	fn test_create_twice_fails() {
		let connection = MemoryConnection::new();
		connection.execute(CREATE).unwrap();
		assert!(connection.execute(CREATE).is_err());
		assert_eq!(connection.statements().len(), 2);
	}

	#[test]
	fn test_alter_and_drop() {
		let connection = MemoryConnection::new();
		connection.execute(CREATE).unwrap();

		connection.execute("ALTER TABLE dm.t MODIFY COMMENT '{}'").unwrap();
		assert_eq!(connection.table("dm", "t").unwrap().comment, "{}");

		connection.execute("DROP TABLE dm.t ON CLUSTER bi_cluster").unwrap();
		assert!(connection.is_empty());
		assert!(connection.execute("DROP TABLE dm.t").is_err());
	}

	#[test]
	fn test_fail_next() {
		let connection = MemoryConnection::new();
		connection.fail_next("connection reset");

		let err = connection.execute(CREATE).unwrap_err();
		assert_eq!(err.to_string(), "connection reset");
		assert!(connection.is_empty());

		connection.execute(CREATE).unwrap();
		assert_eq!(connection.len(), 1);
	}

	#[test]
	fn test_unsupported_statement() {
		assert!(MemoryConnection::new().execute("SELECT 1").is_err());
	}
}
