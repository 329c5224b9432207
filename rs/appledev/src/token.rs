use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Serialize;

use crate::{Claims, Error, Header, PrivateKey, Result};

/// An unsigned developer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
	pub header: Header,
	pub claims: Claims,
}

impl Token {
	/// The `header.claims` portion of the compact serialization, which is what gets signed.
	pub fn signing_input(&self) -> Result<String> {
		let header = encode_segment(&self.header)?;
		let claims = encode_segment(&self.claims)?;
		Ok(format!("{header}.{claims}"))
	}

	/// Sign the token, returning the compact `header.claims.signature` form.
	pub fn sign(&self, key: &PrivateKey) -> Result<String> {
		let input = self.signing_input()?;
		let signature = key.sign(input.as_bytes())?;
		Ok(format!("{input}.{}", URL_SAFE_NO_PAD.encode(signature)))
	}
}

fn encode_segment<T: Serialize>(value: &T) -> Result<String> {
	let json = serde_json::to_vec(value).map_err(|err| Error::Sign(err.to_string()))?;
	Ok(URL_SAFE_NO_PAD.encode(json))
}
