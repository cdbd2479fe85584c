// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{iter::Peekable, str::CharIndices};

use chdecl_type::{Diagnostic, IntoDiagnostic, diagnostic::ddl::unbalanced_ddl};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScanError {
	#[error("unterminated string literal starting at byte {position}")]
	UnterminatedLiteral {
		position: usize,
	},

	#[error("unexpected ')' at byte {position}")]
	UnexpectedCloseParen {
		position: usize,
	},

	#[error("unclosed '(' at byte {position}")]
	UnclosedParen {
		position: usize,
	},
}

impl IntoDiagnostic for ScanError {
	fn into_diagnostic(self) -> Diagnostic {
		unbalanced_ddl(self.to_string())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
	/// `[A-Za-z0-9_]+`
	Word,
	/// A quoted run: `'...'`, `"..."` or `` `...` ``, quotes included.
	Literal,
	OpenParen,
	CloseParen,
	Comma,
	Whitespace,
	/// Any other single character.
	Other,
}

/// A token with its byte range and the parenthesis depth it sits at.
///
/// Both parentheses of a pair carry the depth outside the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
	pub kind: TokenKind,
	pub start: usize,
	pub end: usize,
	pub depth: usize,
}

impl Token {
	pub fn text<'a>(&self, source: &'a str) -> &'a str {
		&source[self.start..self.end]
	}

	pub fn is_top_level(&self) -> bool {
		self.depth == 0
	}
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, ScanError> {
	Lexer::new(source).tokenize()
}

struct Lexer<'a> {
	source: &'a str,
	chars: Peekable<CharIndices<'a>>,
	open: Vec<usize>,
}

impl<'a> Lexer<'a> {
	fn new(source: &'a str) -> Self {
		Self {
			source,
			chars: source.char_indices().peekable(),
			open: Vec::new(),
		}
	}

	fn tokenize(mut self) -> Result<Vec<Token>, ScanError> {
		let mut tokens = Vec::new();

		while let Some((start, c)) = self.chars.next() {
			let depth = self.open.len();
			let kind = match c {
				'(' => {
					self.open.push(start);
					TokenKind::OpenParen
				}
				')' => {
					if self.open.pop().is_none() {
						return Err(ScanError::UnexpectedCloseParen {
							position: start,
						});
					}
					tokens.push(Token {
						kind: TokenKind::CloseParen,
						start,
						end: start + 1,
						depth: self.open.len(),
					});
					continue;
				}
				',' => TokenKind::Comma,
				'\'' | '"' | '`' => {
					let end = self.literal(start, c)?;
					tokens.push(Token {
						kind: TokenKind::Literal,
						start,
						end,
						depth,
					});
					continue;
				}
				c if c.is_whitespace() => {
					let end = self.consume_while(start + c.len_utf8(), char::is_whitespace);
					tokens.push(Token {
						kind: TokenKind::Whitespace,
						start,
						end,
						depth,
					});
					continue;
				}
				c if is_word_char(c) => {
					let end = self.consume_while(start + 1, is_word_char);
					tokens.push(Token {
						kind: TokenKind::Word,
						start,
						end,
						depth,
					});
					continue;
				}
				_ => TokenKind::Other,
			};

			tokens.push(Token {
				kind,
				start,
				end: start + c.len_utf8(),
				depth,
			});
		}

		if let Some(&position) = self.open.last() {
			return Err(ScanError::UnclosedParen {
				position,
			});
		}

		Ok(tokens)
	}

	/// Consumes a literal opened by `quote` at `start`; returns its end.
	/// Backslash escapes the next character, a doubled quote is an escaped quote.
	fn literal(&mut self, start: usize, quote: char) -> Result<usize, ScanError> {
		while let Some((idx, c)) = self.chars.next() {
			if c == '\\' {
				self.chars.next();
				continue;
			}
			if c == quote {
				if matches!(self.chars.peek(), Some(&(_, next)) if next == quote) {
					self.chars.next();
					continue;
				}
				return Ok(idx + 1);
			}
		}
		Err(ScanError::UnterminatedLiteral {
			position: start,
		})
	}

	fn consume_while(&mut self, mut end: usize, predicate: impl Fn(char) -> bool) -> usize {
		while let Some(&(idx, c)) = self.chars.peek() {
			if !predicate(c) {
				break;
			}
			self.chars.next();
			end = idx + c.len_utf8();
		}
		end.min(self.source.len())
	}
}

fn is_word_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '_'
}

/// Index (into `tokens`) of the parenthesis closing the one at `open`.
pub fn matching_paren(tokens: &[Token], open: usize) -> Option<usize> {
	let depth = tokens.get(open).filter(|t| t.kind == TokenKind::OpenParen)?.depth;
	tokens
		.iter()
		.enumerate()
		.skip(open + 1)
		.find(|(_, t)| t.kind == TokenKind::CloseParen && t.depth == depth)
		.map(|(idx, _)| idx)
}

/// Splits on commas that sit outside any parentheses and quoted literals.
/// Pieces are trimmed; empty pieces are dropped.
pub fn split_top_level(source: &str) -> Result<Vec<String>, ScanError> {
	let tokens = tokenize(source)?;
	let mut result = Vec::new();
	let mut start = 0;

	for token in tokens.iter().filter(|t| t.kind == TokenKind::Comma && t.is_top_level()) {
		push_piece(&mut result, &source[start..token.start]);
		start = token.end;
	}
	push_piece(&mut result, &source[start..]);

	Ok(result)
}

fn push_piece(result: &mut Vec<String>, piece: &str) {
	let piece = piece.trim();
	if !piece.is_empty() {
		result.push(piece.to_string());
	}
}

/// Collapses every whitespace run outside quoted literals into a single
/// space and trims both ends.
pub fn collapse_whitespace(source: &str) -> Result<String, ScanError> {
	let tokens = tokenize(source)?;
	let mut result = String::with_capacity(source.len());
	for token in &tokens {
		match token.kind {
			TokenKind::Whitespace => result.push(' '),
			_ => result.push_str(token.text(source)),
		}
	}
	Ok(result.trim().to_string())
}

/// Removes one pair of parentheses when it encloses the whole input.
pub fn strip_enclosing_parens(source: &str) -> Result<&str, ScanError> {
	let trimmed = source.trim();
	let tokens = tokenize(trimmed)?;
	match tokens.first() {
		Some(first) if first.kind == TokenKind::OpenParen => match matching_paren(&tokens, 0) {
			Some(close) if close + 1 == tokens.len() => Ok(trimmed[1..trimmed.len() - 1].trim()),
			_ => Ok(trimmed),
		},
		_ => Ok(trimmed),
	}
}

/// Wraps `value` in single quotes, escaping backslashes and quotes.
pub fn quote_literal(value: &str) -> String {
	let mut result = String::with_capacity(value.len() + 2);
	result.push('\'');
	for c in value.chars() {
		match c {
			'\\' => result.push_str("\\\\"),
			'\'' => result.push_str("\\'"),
			c => result.push(c),
		}
	}
	result.push('\'');
	result
}

/// Inverse of [`quote_literal`]. Also accepts doubled quotes. `None` when
/// `literal` is not a single complete literal.
pub fn unquote_literal(literal: &str) -> Option<String> {
	let mut chars = literal.chars();
	let quote = chars.next().filter(|c| matches!(c, '\'' | '"' | '`'))?;
	let body = chars.as_str().strip_suffix(quote)?;

	let mut result = String::with_capacity(body.len());
	let mut chars = body.chars();
	while let Some(c) = chars.next() {
		match c {
			'\\' => result.push(chars.next()?),
			c if c == quote => {
				if chars.next()? != quote {
					return None;
				}
				result.push(quote);
			}
			c => result.push(c),
		}
	}
	Some(result)
}
