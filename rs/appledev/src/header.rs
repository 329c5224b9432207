use serde::{Deserialize, Serialize};

use crate::Algorithm;

/// The JOSE header of a developer token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Header {
	/// The signing algorithm, always [`crate::ALGORITHM`] for tokens we create.
	pub alg: Algorithm,

	/// The identifier of the private key, shown next to the key in the developer account.
	pub kid: String,

	/// The team and service identifiers joined by a period.
	pub id: String,
}

impl Header {
	pub fn new(alg: Algorithm, key_id: &str, team_id: &str, service_id: &str) -> Self {
		Self {
			alg,
			kid: key_id.to_string(),
			id: format!("{team_id}.{service_id}"),
		}
	}
}
