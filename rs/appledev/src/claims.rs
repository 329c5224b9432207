use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_with::TimestampSeconds;

use crate::{Error, Result, Violation, Violations};

/// The registered claims of a developer token.
#[serde_with::serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Claims {
	/// The team that issued the token.
	#[serde(rename = "iss")]
	pub issuer: String,

	/// The service the token is used by.
	#[serde(rename = "sub")]
	pub subject: String,

	/// When the token was issued, in whole seconds.
	#[serde(rename = "iat")]
	#[serde_as(as = "TimestampSeconds<i64>")]
	pub issued: SystemTime,

	/// When the token stops being accepted, in whole seconds.
	#[serde(rename = "exp")]
	#[serde_as(as = "TimestampSeconds<i64>")]
	pub expires: SystemTime,
}

impl Claims {
	/// Create claims valid for `duration` starting at `now`.
	///
	/// Both timestamps are truncated to whole seconds so `exp - iat` is exactly `duration` in seconds.
	/// Returns a validation error if the expiration can't be represented.
	pub fn new(team_id: &str, service_id: &str, now: SystemTime, duration: Duration) -> Result<Self> {
		let issued = truncate(now);

		let expires = issued
			.checked_add(Duration::from_secs(duration.as_secs()))
			.filter(|expires| timestamp(*expires) <= i64::MAX as u64)
			.ok_or_else(|| {
				let mut violations = Violations::default();
				violations.push(Violation::ExpirationOverflow);
				Error::Validation(violations)
			})?;

		Ok(Self {
			issuer: team_id.to_string(),
			subject: service_id.to_string(),
			issued,
			expires,
		})
	}

	/// How long the token is valid for.
	pub fn lifetime(&self) -> Duration {
		self.expires.duration_since(self.issued).unwrap_or_default()
	}
}

fn timestamp(time: SystemTime) -> u64 {
	time.duration_since(UNIX_EPOCH).unwrap_or_default().as_secs()
}

fn truncate(time: SystemTime) -> SystemTime {
	UNIX_EPOCH + Duration::from_secs(timestamp(time))
}
