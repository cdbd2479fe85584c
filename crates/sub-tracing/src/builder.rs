// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
	#[default]
	Text,
	/// One JSON object per line.
	Json,
}

impl LogFormat {
	pub fn from_name(name: &str) -> Self {
		match name.to_ascii_lowercase().as_str() {
			"json" | "jsonl" => LogFormat::Json,
			_ => LogFormat::Text,
		}
	}
}

/// Builder for the process-wide tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level when set.
#[derive(Debug, Clone)]
pub struct TracingBuilder {
	level: String,
	directives: Vec<String>,
	format: LogFormat,
	with_target: bool,
	with_ansi: bool,
	test_writer: bool,
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self {
			level: "info".to_string(),
			directives: Vec::new(),
			format: LogFormat::Text,
			with_target: true,
			with_ansi: true,
			test_writer: false,
		}
	}

	/// Preset for test binaries: debug level, captured output, no colors.
	pub fn for_tests() -> Self {
		Self::new().with_level("debug").with_ansi(false).with_test_writer(true)
	}

	pub fn with_level(mut self, level: impl Into<String>) -> Self {
		self.level = level.into();
		self
	}

	/// Adds a per-target directive such as `chdecl_sql=trace`.
	pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
		self.directives.push(directive.into());
		self
	}

	pub fn with_format(mut self, format: LogFormat) -> Self {
		self.format = format;
		self
	}

	pub fn with_target(mut self, with_target: bool) -> Self {
		self.with_target = with_target;
		self
	}

	pub fn with_ansi(mut self, with_ansi: bool) -> Self {
		self.with_ansi = with_ansi;
		self
	}

	pub fn with_test_writer(mut self, test_writer: bool) -> Self {
		self.test_writer = test_writer;
		self
	}

	/// The filter directives, joined the way `EnvFilter` expects them.
	pub fn filter_directives(&self) -> String {
		std::iter::once(self.level.as_str())
			.chain(self.directives.iter().map(String::as_str))
			.collect::<Vec<_>>()
			.join(",")
	}

	fn env_filter(&self) -> EnvFilter {
		EnvFilter::try_from_default_env()
			.or_else(|_| EnvFilter::try_new(self.filter_directives()))
			.unwrap_or_else(|_| EnvFilter::new("info"))
	}

	/// Installs the subscriber. Returns `false` when a global subscriber
	/// was already installed, which is not an error.
	pub fn try_init(self) -> bool {
		let filter = self.env_filter();
		let builder = fmt().with_env_filter(filter).with_target(self.with_target).with_ansi(self.with_ansi);

		match (self.format, self.test_writer) {
			(LogFormat::Text, false) => builder.try_init().is_ok(),
			(LogFormat::Text, true) => builder.with_test_writer().try_init().is_ok(),
			(LogFormat::Json, false) => builder.json().try_init().is_ok(),
			(LogFormat::Json, true) => builder.json().with_test_writer().try_init().is_ok(),
		}
	}
}
