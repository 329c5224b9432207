use std::path::PathBuf;

use clap::Args;

/// Token parameters accepted by both `token` and `config`.
#[derive(Args, Clone, Debug, Default)]
pub struct TokenArgs {
	/// The path to a file containing your PEM encoded private key.
	#[arg(long = "pk", value_name = "PATH", env = "APPLEDEV_PK")]
	pub private_key: Option<PathBuf>,

	/// The Key ID associated with your private key.
	#[arg(long = "kid", env = "APPLEDEV_KID")]
	pub key_id: Option<String>,

	/// The Team ID from your developer account.
	#[arg(long = "tid", env = "APPLEDEV_TID")]
	pub team_id: Option<String>,

	/// The Service ID from your developer account.
	#[arg(long = "sid", env = "APPLEDEV_SID")]
	pub service_id: Option<String>,

	/// How long the token will be valid for, ex. "30m" or "1h 30m".
	#[arg(short = 'd', long = "duration", env = "APPLEDEV_DURATION")]
	pub duration: Option<humantime::Duration>,
}
