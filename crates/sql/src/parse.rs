// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use chdecl_type::{
	CatalogRecord, Column, Error, ExternalTableModel, PartitionFunction, PartitionSpec, Result, TableModel,
	diagnostic::ddl::{missing_engine_constructor, unexpected_engine},
	error, return_error,
	vocabulary::EXTERNAL_ENGINE,
};
use tracing::{instrument, warn};

use crate::{
	envelope,
	token::{
		ScanError, Token, TokenKind, collapse_whitespace, matching_paren, split_top_level, strip_enclosing_parens,
		tokenize,
	},
};

/// Engine name and constructor arguments of an engine signature.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineSignature {
	pub name: String,
	/// Verbatim, quotes included.
	pub params: Vec<String>,
}

const ORDER_BY: &[&str] = &["ORDER", "BY"];
const PARTITION_BY: &[&str] = &["PARTITION", "BY"];

/// What has to come right after a terminator phrase for it to end a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Follow {
	Anything,
	/// A quoted literal, as in `COMMENT '...'`.
	Literal,
	/// A `name =` pair, as in `SETTINGS index_granularity = 8192`.
	Assignment,
}

/// A keyword phrase that ends the clause before it.
struct Terminator {
	phrase: &'static [&'static str],
	follow: Follow,
}

const fn ends(phrase: &'static [&'static str], follow: Follow) -> Terminator {
	Terminator {
		phrase,
		follow,
	}
}

const ORDER_BY_END: &[Terminator] = &[
	ends(&["PARTITION", "BY"], Follow::Anything),
	ends(&["COMMENT"], Follow::Literal),
	ends(&["SETTINGS"], Follow::Assignment),
	ends(&["PRIMARY", "KEY"], Follow::Anything),
	ends(&["SAMPLE", "BY"], Follow::Anything),
	ends(&["TTL"], Follow::Anything),
];

const PARTITION_BY_END: &[Terminator] = &[
	ends(&["ORDER", "BY"], Follow::Anything),
	ends(&["COMMENT"], Follow::Literal),
	ends(&["SETTINGS"], Follow::Assignment),
	ends(&["PRIMARY", "KEY"], Follow::Anything),
	ends(&["SAMPLE", "BY"], Follow::Anything),
	ends(&["TTL"], Follow::Anything),
];

fn malformed(text: &str) -> impl FnOnce(ScanError) -> Error + '_ {
	move |err| error!(err).with_statement(text)
}

/// Parses `EngineName(arg, ...)`, or a bare `EngineName`, at the start of
/// an engine signature. A leading `ENGINE =` is skipped.
#[instrument(name = "sql::parse_engine", level = "trace")]
pub fn parse_engine(engine_full: &str) -> Result<EngineSignature> {
	let tokens = tokenize(engine_full).map_err(malformed(engine_full))?;
	let significant: Vec<usize> = (0..tokens.len()).filter(|&idx| tokens[idx].kind != TokenKind::Whitespace).collect();

	let mut cursor = 0;
	if let [first, second, ..] = significant.as_slice()
		&& is_word(&tokens[*first], engine_full, "ENGINE")
		&& tokens[*second].text(engine_full) == "="
	{
		cursor = 2;
	}

	let Some(&name_idx) = significant.get(cursor) else {
		return_error!(missing_engine_constructor(engine_full));
	};
	let name_token = tokens[name_idx];
	let name = name_token.text(engine_full);
	if name_token.kind != TokenKind::Word || !name.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
		return_error!(missing_engine_constructor(engine_full));
	}

	let mut params = Vec::new();
	if let Some(&open) = significant.get(cursor + 1)
		&& tokens[open].kind == TokenKind::OpenParen
	{
		let Some(close) = matching_paren(&tokens, open) else {
			return_error!(missing_engine_constructor(engine_full));
		};
		let arguments = &engine_full[tokens[open].end..tokens[close].start];
		params = split_top_level(arguments).map_err(malformed(engine_full))?;
	}

	Ok(EngineSignature {
		name: name.to_string(),
		params,
	})
}

fn is_word(token: &Token, source: &str, keyword: &str) -> bool {
	token.kind == TokenKind::Word && token.text(source).eq_ignore_ascii_case(keyword)
}

/// Byte ranges of keyword phrases found at depth 0, outside literals.
struct Keywords<'a> {
	source: &'a str,
	tokens: Vec<Token>,
	/// Indices of non-whitespace tokens.
	significant: Vec<usize>,
}

impl<'a> Keywords<'a> {
	fn new(source: &'a str) -> std::result::Result<Self, ScanError> {
		let tokens = tokenize(source)?;
		let significant = (0..tokens.len()).filter(|&idx| tokens[idx].kind != TokenKind::Whitespace).collect();
		Ok(Self {
			source,
			tokens,
			significant,
		})
	}

	/// Position (into `significant`) of the first match of `phrase` at or after `from`.
	fn find(&self, phrase: &[&str], from: usize) -> Option<usize> {
		(from..self.significant.len()).find(|&pos| self.matches_at(phrase, pos))
	}

	fn matches_at(&self, phrase: &[&str], pos: usize) -> bool {
		phrase.iter().enumerate().all(|(offset, keyword)| {
			self.significant.get(pos + offset).is_some_and(|&idx| {
				let token = &self.tokens[idx];
				token.is_top_level() && is_word(token, self.source, keyword)
			})
		})
	}

	fn kind_at(&self, pos: usize) -> Option<TokenKind> {
		self.significant.get(pos).map(|&idx| self.tokens[idx].kind)
	}

	/// Whether `terminator` ends a clause at `pos`. A terminator never
	/// follows a comma, so key elements named like keywords stay in the key.
	fn ends_at(&self, terminator: &Terminator, pos: usize) -> bool {
		if !self.matches_at(terminator.phrase, pos) {
			return false;
		}
		if pos > 0 && self.kind_at(pos - 1) == Some(TokenKind::Comma) {
			return false;
		}

		let next = pos + terminator.phrase.len();
		match terminator.follow {
			Follow::Anything => true,
			Follow::Literal => self.kind_at(next) == Some(TokenKind::Literal),
			Follow::Assignment => {
				self.kind_at(next) == Some(TokenKind::Word)
					&& self.significant.get(next + 1).is_some_and(|&idx| self.tokens[idx].text(self.source) == "=")
			}
		}
	}

	/// Text between `keyword` and the earliest of `terminators`, or end of text.
	///
	/// The first token of the body is always part of it.
	fn clause(&self, keyword: &[&str], terminators: &[Terminator]) -> Option<&'a str> {
		let found = self.find(keyword, 0)?;
		let body = found + keyword.len();

		let start = match self.significant.get(body) {
			Some(&idx) => self.tokens[idx].start,
			None => return Some(""),
		};
		let end = (body + 1..self.significant.len())
			.find(|&pos| terminators.iter().any(|terminator| self.ends_at(terminator, pos)))
			.map(|pos| self.tokens[self.significant[pos]].start)
			.unwrap_or(self.source.len());

		Some(self.source[start..end].trim())
	}
}

/// The ordering key of a definition; empty when there is no `ORDER BY`
/// or it orders by `tuple()`.
pub fn parse_order_by(definition: &str) -> Result<Vec<String>> {
	let keywords = Keywords::new(definition).map_err(malformed(definition))?;
	let Some(clause) = keywords.clause(ORDER_BY, ORDER_BY_END) else {
		return Ok(vec![]);
	};

	let clause = collapse_whitespace(clause).map_err(malformed(definition))?;
	let clause = strip_enclosing_parens(&clause).map_err(malformed(definition))?;
	if clause.eq_ignore_ascii_case("tuple()") {
		return Ok(vec![]);
	}
	split_top_level(clause).map_err(malformed(definition))
}

/// The partition key of a definition. A tuple key yields one spec per element.
pub fn parse_partition_by(definition: &str) -> Result<Vec<PartitionSpec>> {
	let keywords = Keywords::new(definition).map_err(malformed(definition))?;
	let Some(clause) = keywords.clause(PARTITION_BY, PARTITION_BY_END) else {
		return Ok(vec![]);
	};

	let clause = collapse_whitespace(clause).map_err(malformed(definition))?;
	if clause.is_empty() {
		return Ok(vec![]);
	}

	let elements = match tuple_elements(&clause).map_err(malformed(definition))? {
		Some(elements) => elements,
		None => vec![clause],
	};

	elements.iter().map(|element| partition_spec(element).map_err(malformed(definition))).collect()
}

/// Elements of `(a, b)` or `tuple(a, b)`; `None` for anything else.
fn tuple_elements(expression: &str) -> std::result::Result<Option<Vec<String>>, ScanError> {
	let tokens = tokenize(expression)?;
	let open = match tokens.as_slice() {
		[first, ..] if first.kind == TokenKind::OpenParen => 0,
		[first, second, ..] if is_word(first, expression, "tuple") && second.kind == TokenKind::OpenParen => 1,
		_ => return Ok(None),
	};

	match matching_paren(&tokens, open) {
		Some(close) if close + 1 == tokens.len() => {
			let inner = &expression[tokens[open].end..tokens[close].start];
			Ok(Some(split_top_level(inner)?))
		}
		_ => Ok(None),
	}
}

/// `fn(column)` for a known bucketing function, otherwise a raw column.
/// Whitespace between the function name and its parenthesis is allowed.
fn partition_spec(expression: &str) -> std::result::Result<PartitionSpec, ScanError> {
	let tokens = tokenize(expression)?;
	let significant: Vec<usize> = (0..tokens.len()).filter(|&idx| tokens[idx].kind != TokenKind::Whitespace).collect();

	if let [name, open, .., close] = significant.as_slice()
		&& tokens[*name].kind == TokenKind::Word
		&& tokens[*open].kind == TokenKind::OpenParen
		&& tokens[*close].kind == TokenKind::CloseParen
		&& matching_paren(&tokens, *open) == Some(*close)
		&& let Some(function) = PartitionFunction::from_name(tokens[*name].text(expression))
	{
		let column = expression[tokens[*open].end..tokens[*close].start].trim();
		if !column.is_empty() {
			return Ok(PartitionSpec::bucketed(column, function));
		}
	}
	Ok(PartitionSpec::column(expression))
}

/// Reads a catalog record of a managed table back into a [`TableModel`].
///
/// The comment slot must hold an envelope; a foreign or damaged comment
/// fails the whole read.
#[instrument(name = "sql::parse_table", level = "debug", skip(record), fields(database = %record.database, table = %record.name))]
pub fn parse_table(record: &CatalogRecord) -> Result<TableModel> {
	let signature = parse_engine(&record.engine_full)?;
	if !record.engine.is_empty() && record.engine != signature.name {
		warn!(
			engine = %record.engine,
			constructor = %signature.name,
			"catalog engine differs from engine signature"
		);
	}

	let definition = record.definition();
	let order_by = parse_order_by(definition)?;
	let partition_by = parse_partition_by(definition)?;
	let envelope = envelope::decode(&record.comment)?;

	Ok(TableModel {
		database: record.database.clone(),
		name: record.name.clone(),
		engine: signature.name,
		engine_params: signature.params,
		cluster: envelope.cluster().map(str::to_string),
		comment: envelope.comment,
		columns: record.columns.iter().map(Column::from).collect(),
		order_by,
		partition_by,
	})
}

/// Reads a catalog record of a PostgreSQL-backed table.
#[instrument(name = "sql::parse_external_table", level = "debug", skip(record), fields(database = %record.database, table = %record.name))]
pub fn parse_external_table(record: &CatalogRecord) -> Result<ExternalTableModel> {
	if record.engine != EXTERNAL_ENGINE {
		return_error!(unexpected_engine(EXTERNAL_ENGINE, &record.engine));
	}

	let signature = parse_engine(&record.engine_full)?;
	let envelope = envelope::decode(&record.comment)?;

	Ok(ExternalTableModel {
		database: record.database.clone(),
		name: record.name.clone(),
		engine_params: signature.params,
		comment: envelope.comment,
		columns: record.columns.iter().map(Column::from).collect(),
	})
}
