#![allow(unused)]

use assert_cmd::{Command, cargo};
use std::path::PathBuf;

#[cfg(windows)]
pub const BINARY_NAME: &str = "sitemap.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "sitemap";

/// Helper to get a testdata file path.
pub fn get_testdata(filename: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR"))
		.parent()
		.unwrap()
		.join("testdata")
		.join(filename)
}

/// Helper to create a Command for the sitemap binary.
pub fn sitemap_cmd() -> Command {
	Command::new(cargo::cargo_bin!())
}

/// Runs the binary with the given arguments and returns stdout, asserting success.
pub fn sitemap_stdout(args: &[&str]) -> String {
	let output = sitemap_cmd().args(args).assert().success().get_output().stdout.clone();
	String::from_utf8(output).unwrap()
}
