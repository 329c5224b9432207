use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
	#[error("validation failed: {0}")]
	Validation(Violations),

	#[error("failed to parse private key. {0}")]
	KeyParse(String),

	#[error("failed to create signed JWT. {0}")]
	Sign(String),
}

/// A single rule broken by a [`crate::TokenProvider`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Violation {
	EmptyKeyId,
	EmptyTeamId,
	EmptyServiceId,
	NonPositiveDuration,
	ExpirationOverflow,
}

impl fmt::Display for Violation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let msg = match self {
			Self::EmptyKeyId => "key identifier may not be empty",
			Self::EmptyTeamId => "team ID may not be empty",
			Self::EmptyServiceId => "service ID may not be empty",
			Self::NonPositiveDuration => "token expiration must be in the future (duration must be greater than 0)",
			Self::ExpirationOverflow => "token expiration is too far in the future",
		};

		f.write_str(msg)
	}
}

/// Every rule broken by a provider, in the order they were checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
	pub fn push(&mut self, violation: Violation) {
		self.0.push(violation);
	}

	pub fn contains(&self, violation: Violation) -> bool {
		self.0.contains(&violation)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns an error if any rule was broken.
	pub fn into_result(self) -> Result<()> {
		if self.is_empty() {
			return Ok(());
		}

		Err(Error::Validation(self))
	}
}

impl fmt::Display for Violations {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, violation) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			violation.fmt(f)?;
		}

		Ok(())
	}
}
