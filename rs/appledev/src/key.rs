use std::fmt;
use std::str::FromStr;

use p256::ecdsa::{Signature, SigningKey, signature::Signer};
use p256::pkcs8::DecodePrivateKey;

use crate::{ALGORITHM, Algorithm, Error, Result};

const SEC1_LABEL: &str = "EC PRIVATE KEY";
const PKCS8_LABEL: &str = "PRIVATE KEY";

/// A private key used to sign developer tokens.
///
/// Apple hands these out as `.p8` files, which are PKCS#8 PEM.
/// SEC1 PEM (`EC PRIVATE KEY`), as written by `openssl ec`, is accepted too.
#[derive(Clone)]
pub struct PrivateKey {
	inner: SigningKey,
}

impl PrivateKey {
	/// Parse a PEM encoded private key.
	///
	/// Text around the PEM block, such as trailing blank lines, is ignored.
	/// The curve isn't checked separately; keys for any other curve fail to parse.
	pub fn from_pem(pem: &[u8]) -> Result<Self> {
		let pem = std::str::from_utf8(pem).map_err(|err| Error::KeyParse(err.to_string()))?;
		let block = format!("{}\n", pem_block(pem));

		let label = p256::pkcs8::der::pem::decode_label(block.as_bytes())
			.map_err(|err| Error::KeyParse(format!("key must be a PEM encoded SEC1 or PKCS8 key: {err}")))?;

		let curve = ALGORITHM.curve();
		let secret = match label {
			SEC1_LABEL => p256::SecretKey::from_sec1_pem(&block)
				.map_err(|err| Error::KeyParse(format!("invalid {curve} SEC1 key: {err}")))?,
			PKCS8_LABEL => p256::SecretKey::from_pkcs8_pem(&block)
				.map_err(|err| Error::KeyParse(format!("invalid {curve} PKCS8 key: {err}")))?,
			label => return Err(Error::KeyParse(format!("unsupported PEM label: {label}"))),
		};

		Ok(Self {
			inner: SigningKey::from(secret),
		})
	}

	pub fn algorithm(&self) -> Algorithm {
		ALGORITHM
	}

	/// Sign the message, returning the fixed width `r || s` form used by JWS.
	pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
		let signature: Signature = self.inner.try_sign(message).map_err(|err| Error::Sign(err.to_string()))?;
		Ok(signature.to_bytes().to_vec())
	}
}

/// Returns the first `-----BEGIN` through `-----END ...-----` block, or the input if there isn't one.
fn pem_block(pem: &str) -> &str {
	const BEGIN: &str = "-----BEGIN ";
	const END: &str = "-----END ";
	const DASHES: &str = "-----";

	let Some(start) = pem.find(BEGIN) else {
		return pem;
	};

	let block = &pem[start..];
	let Some(end) = block.find(END) else {
		return block;
	};

	let label_start = end + END.len();
	match block[label_start..].find(DASHES) {
		Some(close) => &block[..label_start + close + DASHES.len()],
		None => block,
	}
}

impl FromStr for PrivateKey {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::from_pem(s.as_bytes())
	}
}

impl fmt::Debug for PrivateKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PrivateKey")
			.field("alg", &self.algorithm())
			.finish_non_exhaustive()
	}
}
