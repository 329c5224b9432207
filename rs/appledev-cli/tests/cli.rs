use std::process::{Command, Output};

const KEY: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../appledev/testdata/es256.p8");

fn appledev(args: &[&str]) -> Output {
	let mut cmd = Command::new(env!("CARGO_BIN_EXE_appledev"));
	for var in [
		"APPLEDEV_PK",
		"APPLEDEV_KID",
		"APPLEDEV_TID",
		"APPLEDEV_SID",
		"APPLEDEV_DURATION",
		"APPLEDEV_CONFIG",
		"APPLEDEV_LOG_LEVEL",
		"RUST_LOG",
	] {
		cmd.env_remove(var);
	}

	cmd.args(args).output().expect("failed to run appledev")
}

fn stderr(output: &Output) -> String {
	String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn version() {
	let output = appledev(&["version"]);
	assert_eq!(output.status.code(), Some(0));
	assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn token() {
	let output = appledev(&["token", "--pk", KEY, "--kid", "ABC123", "--tid", "TEAM1", "--sid", "svc.example"]);
	assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert_eq!(stdout.trim().split('.').count(), 3);
	assert!(output.stderr.is_empty());
}

#[test]
fn validation_failure() {
	let output = appledev(&["token", "--pk", KEY, "--kid", "ABC123"]);
	assert_eq!(output.status.code(), Some(1));
	assert!(output.stdout.is_empty());
	assert_eq!(
		stderr(&output),
		"appledev: validation failed: team ID may not be empty, service ID may not be empty\n"
	);
}

#[test]
fn huge_duration() {
	let output = appledev(&[
		"token",
		"--pk",
		KEY,
		"--kid",
		"ABC123",
		"--tid",
		"TEAM1",
		"--sid",
		"svc.example",
		"-d",
		"300000000000y",
	]);
	assert_eq!(output.status.code(), Some(1));
	assert_eq!(
		stderr(&output),
		"appledev: validation failed: token expiration is too far in the future\n"
	);
}

#[test]
fn missing_key_file() {
	let output = appledev(&["token", "--pk", "/does/not/exist.p8"]);
	assert_eq!(output.status.code(), Some(1));

	let stderr = stderr(&output);
	assert!(stderr.starts_with("appledev: failed to read private key: /does/not/exist.p8: "), "{stderr}");
	assert_eq!(stderr.lines().count(), 1);
}

#[test]
fn missing_subcommand() {
	let output = appledev(&[]);
	assert_eq!(output.status.code(), Some(1));
}
