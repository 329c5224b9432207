use clap::Args;
use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Logging configuration, shared by every subcommand.
///
/// Logs always go to stderr; stdout is reserved for the token.
#[derive(Args, Clone, Debug)]
pub struct Log {
	/// The level of logging to output, overridden by RUST_LOG.
	#[arg(id = "log-level", long = "log-level", default_value = "warn", env = "APPLEDEV_LOG_LEVEL", global = true)]
	pub level: Level,
}

impl Log {
	pub fn level(&self) -> LevelFilter {
		LevelFilter::from_level(self.level)
	}

	pub fn init(&self) {
		let filter = EnvFilter::builder()
			.with_default_directive(self.level().into())
			.from_env_lossy();

		// Ignore the error if a subscriber is already installed.
		let _ = tracing_subscriber::fmt()
			.with_writer(std::io::stderr)
			.with_env_filter(filter)
			.with_target(false)
			.try_init();
	}
}
