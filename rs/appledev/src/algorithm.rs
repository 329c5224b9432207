use std::fmt;

use serde::{Deserialize, Serialize};

/// The algorithm used to sign every token.
///
/// Both the header's `alg` field and the signer are derived from this value, so they can't disagree.
pub const ALGORITHM: Algorithm = Algorithm::ES256;

/// A JWS signing algorithm supported by Apple's developer tokens.
///
/// Apple only accepts ECDSA on the P-256 curve with SHA-256.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
	#[default]
	ES256,
}

impl Algorithm {
	/// The name used in the JWT header.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::ES256 => "ES256",
		}
	}

	/// The name of the elliptic curve the signing key must use.
	pub const fn curve(&self) -> &'static str {
		match self {
			Self::ES256 => "P-256",
		}
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<Algorithm> for jsonwebtoken::Algorithm {
	fn from(alg: Algorithm) -> Self {
		match alg {
			Algorithm::ES256 => jsonwebtoken::Algorithm::ES256,
		}
	}
}
