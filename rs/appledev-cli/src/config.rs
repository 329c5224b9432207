use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::TokenArgs;

/// The validity window used when none is configured.
pub const DEFAULT_DURATION: &str = "30m";

/// Everything needed to create a token, stored as JSON so it can be reused.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
	#[serde(rename = "kid")]
	pub key_id: String,

	#[serde(rename = "tid")]
	pub team_id: String,

	#[serde(rename = "sid")]
	pub service_id: String,

	/// A human readable duration, ex. "30m".
	#[serde(rename = "d")]
	pub duration: String,

	/// The PEM encoded private key, inline.
	#[serde(rename = "pk")]
	pub private_key: String,
}

impl Config {
	/// Load the config file, or the defaults when there isn't one.
	pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
		let Some(path) = path else {
			tracing::debug!("no config file, using defaults");
			return Ok(Self {
				duration: DEFAULT_DURATION.to_string(),
				..Default::default()
			});
		};

		tracing::debug!(path = %path.display(), "loading config");

		let contents = std::fs::read(path).with_context(|| format!("failed to read config: {}", path.display()))?;
		Self::from_slice(&contents).with_context(|| format!("failed to parse config: {}", path.display()))
	}

	pub fn from_slice(v: &[u8]) -> anyhow::Result<Self> {
		Ok(serde_json::from_slice(v)?)
	}

	/// Load the config file and then apply any flags on top of it.
	pub fn from_args(path: Option<&Path>, args: &TokenArgs) -> anyhow::Result<Self> {
		let mut config = Self::load(path)?;
		config.apply(args)?;
		Ok(config)
	}

	/// Override the config with any flags that were provided.
	///
	/// Empty strings and zero durations are treated as absent.
	pub fn apply(&mut self, args: &TokenArgs) -> anyhow::Result<()> {
		if let Some(key_id) = args.key_id.as_ref().filter(|v| !v.is_empty()) {
			tracing::debug!(%key_id, "overriding key ID");
			self.key_id.clone_from(key_id);
		}

		if let Some(service_id) = args.service_id.as_ref().filter(|v| !v.is_empty()) {
			tracing::debug!(%service_id, "overriding service ID");
			self.service_id.clone_from(service_id);
		}

		if let Some(team_id) = args.team_id.as_ref().filter(|v| !v.is_empty()) {
			tracing::debug!(%team_id, "overriding team ID");
			self.team_id.clone_from(team_id);
		}

		if let Some(duration) = args.duration.as_ref().filter(|d| !d.is_zero()) {
			tracing::debug!(%duration, "overriding duration");
			self.duration = duration.to_string();
		}

		if let Some(path) = &args.private_key {
			tracing::debug!(path = %path.display(), "reading private key");
			self.private_key = std::fs::read_to_string(path)
				.with_context(|| format!("failed to read private key: {}", path.display()))?;
		}

		Ok(())
	}

	/// Parse the configured duration, falling back to [`DEFAULT_DURATION`] when empty.
	///
	/// A negative duration parses as zero so the provider reports it alongside any other invalid fields.
	pub fn duration(&self) -> anyhow::Result<Duration> {
		let duration = match self.duration.trim() {
			"" => DEFAULT_DURATION,
			duration => duration,
		};

		let (negative, magnitude) = match duration.strip_prefix('-') {
			Some(magnitude) => (true, magnitude.trim_start()),
			None => (false, duration),
		};

		let parsed = humantime::parse_duration(magnitude).with_context(|| format!("invalid duration: {duration}"))?;
		if negative {
			tracing::debug!(%duration, "negative duration");
			return Ok(Duration::ZERO);
		}

		Ok(parsed)
	}

	pub fn provider(&self) -> anyhow::Result<appledev::TokenProvider> {
		Ok(appledev::TokenProvider::new(
			&self.key_id,
			&self.team_id,
			&self.service_id,
			self.duration()?,
		))
	}

	/// Create a token signed with the configured private key.
	pub fn create_token(&self) -> anyhow::Result<String> {
		let provider = self.provider()?;
		let token = provider.signed_token(self.private_key.as_bytes())?;

		tracing::debug!(kid = %provider.key_id, duration = ?provider.duration, "created token");

		Ok(token)
	}

	pub fn to_string_pretty(&self) -> anyhow::Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}

	/// Write the config as indented JSON, replacing the file if it exists.
	pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
		let contents = self.to_string_pretty()?;
		std::fs::write(path, contents).with_context(|| format!("failed to write config: {}", path.display()))?;

		tracing::debug!(path = %path.display(), "wrote config");

		Ok(())
	}
}
