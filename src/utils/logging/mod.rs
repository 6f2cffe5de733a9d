//! ## Sets up logging by reading configuration from environment variables.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: directory for log files; default is "logs/"
//! - LOG_MAX_SIZE: maximum size of a log file in bytes before rolling; default is 1GB

pub mod error;

use chrono::Utc;
use std::{
	env,
	fs::{create_dir_all, metadata},
	path::Path,
};
use tracing::{info, Subscriber};
use tracing_subscriber::{
	filter::EnvFilter,
	fmt::{self, format::Writer, FmtContext, FormatEvent, FormatFields},
	prelude::*,
	registry::LookupSpan,
};

/// Base name of the log file written in file mode.
const LOG_FILE_NAME: &str = "corechain-registry.log";

/// Default maximum log file size (1GB).
const DEFAULT_LOG_MAX_SIZE: u64 = 1_073_741_824;

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
	Stdout,
	File,
}

/// Logging settings, usually read from the environment with [`LoggingConfig::from_env`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
	pub mode: LogMode,
	pub level: tracing::Level,
	pub data_dir: String,
	pub max_size: u64,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			mode: LogMode::Stdout,
			level: tracing::Level::INFO,
			data_dir: "logs/".to_string(),
			max_size: DEFAULT_LOG_MAX_SIZE,
		}
	}
}

impl LoggingConfig {
	/// Reads the logging settings from the process environment.
	pub fn from_env() -> Self {
		Self::from_lookup(|key| env::var(key).ok())
	}

	/// Reads the logging settings through an arbitrary variable lookup.
	///
	/// Unparseable values fall back to the defaults.
	pub fn from_lookup<F>(lookup: F) -> Self
	where
		F: Fn(&str) -> Option<String>,
	{
		let defaults = Self::default();

		let mode = match lookup("LOG_MODE").map(|m| m.to_lowercase()).as_deref() {
			Some("file") => LogMode::File,
			_ => LogMode::Stdout,
		};

		let level = lookup("LOG_LEVEL")
			.map(|level| parse_level(&level))
			.unwrap_or(defaults.level);

		let data_dir = lookup("LOG_DATA_DIR").unwrap_or(defaults.data_dir);

		let max_size = lookup("LOG_MAX_SIZE")
			.and_then(|s| s.parse::<u64>().ok())
			.unwrap_or(defaults.max_size);

		Self {
			mode,
			level,
			data_dir,
			max_size,
		}
	}
}

/// Parses a log level name, defaulting to `INFO` for unknown names.
pub fn parse_level(level: &str) -> tracing::Level {
	match level.to_lowercase().as_str() {
		"trace" => tracing::Level::TRACE,
		"debug" => tracing::Level::DEBUG,
		"info" => tracing::Level::INFO,
		"warn" => tracing::Level::WARN,
		"error" => tracing::Level::ERROR,
		_ => tracing::Level::INFO,
	}
}

/// Formatter wrapper that strips ANSI escape codes, used for file output
struct StripAnsiFormatter<T> {
	inner: T,
}

impl<S, N, T> FormatEvent<S, N> for StripAnsiFormatter<T>
where
	S: Subscriber + for<'a> LookupSpan<'a>,
	N: for<'a> FormatFields<'a> + 'static,
	T: FormatEvent<S, N>,
{
	fn format_event(
		&self,
		ctx: &FmtContext<'_, S, N>,
		mut writer: Writer<'_>,
		event: &tracing::Event<'_>,
	) -> std::fmt::Result {
		let mut buf = String::new();
		self.inner.format_event(ctx, Writer::new(&mut buf), event)?;
		write!(writer, "{}", strip_ansi_escapes(&buf))
	}
}

fn strip_ansi_escapes(s: &str) -> String {
	match regex::Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]") {
		Ok(re) => re.replace_all(s, "").to_string(),
		Err(_) => s.to_string(),
	}
}

/// Computes the path of the rolled log file given the base file path and the date string.
pub fn compute_rolled_file_path(base_file_path: &str, date_str: &str, index: u32) -> String {
	let trimmed = base_file_path
		.strip_suffix(".log")
		.unwrap_or(base_file_path);
	format!("{}-{}.{}.log", trimmed, date_str, index)
}

/// Returns the first rolled file path whose current size does not exceed `max_size`.
pub fn space_based_rolling(
	file_path: &str,
	base_file_path: &str,
	date_str: &str,
	max_size: u64,
) -> String {
	let mut final_path = file_path.to_string();
	let mut index = 1;
	while let Ok(metadata) = metadata(&final_path) {
		if metadata.len() <= max_size {
			break;
		}
		index += 1;
		final_path = compute_rolled_file_path(base_file_path, date_str, index);
	}
	final_path
}

fn create_log_format(with_ansi: bool) -> fmt::format::Format<fmt::format::Compact> {
	fmt::format()
		.with_level(true)
		.with_target(true)
		.with_thread_ids(false)
		.with_thread_names(false)
		.with_ansi(with_ansi)
		.compact()
}

/// Installs the global `tracing` subscriber.
pub fn setup_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
	let subscriber =
		tracing_subscriber::registry().with(EnvFilter::new(config.level.to_string()));

	match config.mode {
		LogMode::File => {
			let log_dir = format!("{}/", config.data_dir.trim_end_matches('/'));
			let base_file_path = format!("{}{}", log_dir, LOG_FILE_NAME);
			let date_str = Utc::now().format("%Y-%m-%d").to_string();

			let time_based_path = compute_rolled_file_path(&base_file_path, &date_str, 1);
			if let Some(parent) = Path::new(&time_based_path).parent() {
				create_dir_all(parent)?;
			}

			let final_path =
				space_based_rolling(&time_based_path, &base_file_path, &date_str, config.max_size);

			let file_appender = tracing_appender::rolling::never(
				Path::new(&final_path).parent().unwrap_or(Path::new(".")),
				Path::new(&final_path).file_name().unwrap_or_default(),
			);

			subscriber
				.with(
					fmt::layer()
						.event_format(StripAnsiFormatter {
							inner: create_log_format(false),
						})
						.with_writer(file_appender),
				)
				.try_init()?;

			info!(path = %final_path, "Logging to file");
		}
		LogMode::Stdout => {
			subscriber
				.with(fmt::layer().event_format(create_log_format(true)))
				.try_init()?;
		}
	}

	info!(level = %config.level, "Logging is successfully configured");
	Ok(())
}
