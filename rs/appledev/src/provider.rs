use std::time::{Duration, SystemTime};

use crate::{ALGORITHM, Claims, Header, PrivateKey, Result, Token, Violation, Violations};

/// Generates developer tokens for Apple REST APIs.
///
/// A provider holds no state between calls; build one per token, or reuse it freely across threads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenProvider {
	/// The key identifier from your developer account.
	pub key_id: String,

	/// The team ID from your developer account.
	pub team_id: String,

	/// The service ID from your developer account.
	pub service_id: String,

	/// How long the token will be valid for.
	pub duration: Duration,
}

impl TokenProvider {
	pub fn new(
		key_id: impl Into<String>,
		team_id: impl Into<String>,
		service_id: impl Into<String>,
		duration: Duration,
	) -> Self {
		Self {
			key_id: key_id.into(),
			team_id: team_id.into(),
			service_id: service_id.into(),
			duration,
		}
	}

	/// Generate a token signed with the PEM encoded private key.
	///
	/// The parameters are validated before the key is parsed, so a bad key is only reported for valid parameters.
	pub fn signed_token(&self, pem: &[u8]) -> Result<String> {
		let token = self.token()?;
		let key = PrivateKey::from_pem(pem)?;
		token.sign(&key)
	}

	/// Build the unsigned token, issued now.
	pub fn token(&self) -> Result<Token> {
		self.token_at(SystemTime::now())
	}

	/// Build the unsigned token, issued at `now` truncated to whole seconds.
	///
	/// Fails if the parameters are invalid or the expiration overflows.
	pub fn token_at(&self, now: SystemTime) -> Result<Token> {
		self.validate()?;

		Ok(Token {
			header: Header::new(ALGORITHM, &self.key_id, &self.team_id, &self.service_id),
			claims: Claims::new(&self.team_id, &self.service_id, now, self.duration)?,
		})
	}

	/// Check every parameter, reporting all of the broken rules at once.
	pub fn validate(&self) -> Result<()> {
		let mut violations = Violations::default();

		if self.key_id.is_empty() {
			violations.push(Violation::EmptyKeyId);
		}

		if self.team_id.is_empty() {
			violations.push(Violation::EmptyTeamId);
		}

		if self.service_id.is_empty() {
			violations.push(Violation::EmptyServiceId);
		}

		if self.duration.is_zero() {
			violations.push(Violation::NonPositiveDuration);
		}

		violations.into_result()
	}
}
