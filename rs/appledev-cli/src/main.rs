mod args;
mod config;
mod log;

use std::path::PathBuf;
use std::process::ExitCode;

use args::*;
use config::*;
use log::*;

use clap::{Parser, Subcommand};

#[derive(Parser, Clone, Debug)]
#[command(name = "appledev", version, about = "Create signed developer tokens for Apple REST APIs.")]
pub struct Cli {
	#[command(flatten)]
	log: Log,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
	/// Create an apple developer token.
	Token {
		/// Path to a json config file containing args.
		///
		/// Flags take precedence over the values in the file.
		#[arg(short = 'c', long = "config", env = "APPLEDEV_CONFIG")]
		config: Option<PathBuf>,

		#[command(flatten)]
		args: TokenArgs,
	},

	/// Generate a config file.
	Config {
		/// The path where the config file will be written.
		#[arg(short = 'o', long = "output")]
		output: PathBuf,

		#[command(flatten)]
		args: TokenArgs,
	},

	/// Print the version of this application.
	Version,
}

fn main() -> ExitCode {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(err) => {
			let _ = err.print();
			// --help and --version are not failures.
			if err.use_stderr() {
				return ExitCode::FAILURE;
			}

			return ExitCode::SUCCESS;
		}
	};

	cli.log.init();

	match run(cli.command) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			tracing::debug!(?err, "command failed");
			eprintln!("{}", diagnostic(&err));
			ExitCode::FAILURE
		}
	}
}

/// The single line printed to stderr when a command fails.
fn diagnostic(err: &anyhow::Error) -> String {
	format!("appledev: {err:#}")
}

fn run(command: Command) -> anyhow::Result<()> {
	match command {
		Command::Version => println!("{}", env!("CARGO_PKG_VERSION")),
		Command::Token { config, args } => println!("{}", token(config, args)?),
		Command::Config { output, args } => {
			let config = Config::from_args(None, &args)?;
			config.write_to_file(&output)?;
		}
	}

	Ok(())
}

fn token(config: Option<PathBuf>, args: TokenArgs) -> anyhow::Result<String> {
	if config.is_none() && args.private_key.is_none() {
		anyhow::bail!("a private key file path (--pk) is required when a config file (-c) is not provided");
	}

	Config::from_args(config.as_deref(), &args)?.create_token()
}
