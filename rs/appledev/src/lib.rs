//! Signed developer tokens for Apple REST APIs.
//!
//! Apple services such as MusicKit, Sign in with Apple, and WeatherKit authenticate
//! requests with a short-lived JWT signed by a developer's ES256 private key.
//! [`TokenProvider`] validates the identity parameters, builds the [`Header`] and
//! [`Claims`], and signs them with a [`PrivateKey`] loaded from PEM.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! let provider = appledev::TokenProvider::new("ABC123", "TEAM1", "com.example.svc", Duration::from_secs(1800));
//! let pem = std::fs::read("AuthKey_ABC123.p8").unwrap();
//! let token = provider.signed_token(&pem).unwrap();
//! println!("{token}");
//! ```

mod algorithm;
mod claims;
mod error;
mod header;
mod key;
mod provider;
mod token;

pub use algorithm::*;
pub use claims::*;
pub use error::*;
pub use header::*;
pub use key::*;
pub use provider::*;
pub use token::*;
