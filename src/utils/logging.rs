//! Logging setup.
//!
//! Logs go through `tracing_subscriber` with an `EnvFilter`. `RUST_LOG` wins
//! when set; otherwise the level passed by the caller (the `--log-level` flag
//! of the binary) applies, and `info` when neither is given.
//!
//! Logs are written to stderr by default so that `--json` output on stdout
//! stays machine readable.
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Level used when neither `RUST_LOG` nor an explicit level is given
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Resolves the filter from `RUST_LOG`, then `level`, then the default
pub fn build_filter(level: Option<&str>) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		EnvFilter::try_new(level.unwrap_or(DEFAULT_LOG_LEVEL))
			.unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
	})
}

/// Setup logging to stderr
pub fn setup_logging(
	level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	setup_logging_with_writer(level, std::io::stderr)
}

/// Setup logging with a custom writer
pub fn setup_logging_with_writer<W>(
	level: Option<&str>,
	writer: W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	tracing_subscriber::registry()
		.with(build_filter(level))
		.with(
			fmt::layer()
				.with_writer(writer)
				.event_format(
					fmt::format()
						.with_level(true)
						.with_target(true)
						.with_thread_ids(false)
						.with_thread_names(false)
						.with_ansi(false)
						.compact(),
				)
				.fmt_fields(fmt::format::PrettyFields::new()),
		)
		.try_init()?;
	Ok(())
}
