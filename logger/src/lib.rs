//! Helper crate for fast log initializing.
//!
//! This crate reexports all macros from [`log`] crate and uses [`env_logger`]
//! crate for logger initializing.
//!
//! Example:
//! ```rust
//! use logger::*;
//!
//! init_logger(None);
//!
//! info!("Logger initialized successfully!");
//! ```

pub use log::{debug, error, info, trace, warn};

/// Default log level for debug compilations.
const DEBUG_LOG_LEVEL: &str = "trace";

/// Default log level for release compilations.
const RELEASE_LOG_LEVEL: &str = "info";

/// Environment variable for log level setting.
const LOG_LEVEL_ENV: &str = "SNAKE_LOG";

/// Environment variable for log style setting.
const LOG_STYLE_ENV: &str = "SNAKE_LOG_STYLE";

/// Default log style.
const LOG_STYLE: &str = "auto";

use env_logger::fmt::Formatter;
use log::Record;
use std::io;

/// Logger initializer. Run this function in binary crate to initialize logging.
/// This function should be ran only once.
///
/// `filters` takes precedence over the `SNAKE_LOG` environment variable and
/// uses the same `env_logger` filter syntax, e.g. `"info,game=debug"`.
pub fn init_logger(filters: Option<&str>) {
	let log_level = match cfg!(debug_assertions) {
		true => DEBUG_LOG_LEVEL,
		false => RELEASE_LOG_LEVEL,
	};

	let mut builder = env_logger::Builder::from_env(
		env_logger::Env::default()
			.filter_or(LOG_LEVEL_ENV, log_level)
			.write_style_or(LOG_STYLE_ENV, LOG_STYLE),
	);
	if let Some(filters) = filters {
		builder.parse_filters(filters);
	}
	builder.format(format).init();
}

/// Logging output format: `LEVEL\t[target] message`.
fn format(buf: &'_ mut Formatter, record: &'_ Record<'_>) -> io::Result<()> {
	use env_logger::fmt::Color;
	use log::Level;
	use std::io::Write;

	let mut level_style = buf.style();
	match record.level() {
		Level::Error => level_style.set_color(Color::Red).set_bold(true),
		Level::Warn => level_style.set_color(Color::Yellow),
		Level::Info => level_style.set_color(Color::Cyan),
		Level::Debug => level_style.set_color(Color::Magenta),
		Level::Trace => level_style.set_color(Color::Blue),
	};

	let mut target_style = buf.style();
	target_style.set_dimmed(true);

	writeln!(
		buf,
		"{}\t{} {}",
		level_style.value(record.level()),
		target_style.value(format!("[{}]", record.target())),
		record.args()
	)
}
